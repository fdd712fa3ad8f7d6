use thiserror::Error;

/// Errors raised while configuring a [`crate::PaletteBuilder`].
///
/// Every variant is produced at the configuration call site, before any pixel is
/// touched. [`crate::PaletteBuilder::generate`] itself cannot fail: degenerate
/// inputs (a fully filtered or fully transparent image) produce an empty
/// [`crate::Palette`] instead.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("maximum color count must be at least 1, got {0}")]
    InvalidMaximumColorCount(usize),

    #[error("region {left},{top}..{right},{bottom} is invalid for a {width}x{height} image")]
    InvalidRegion {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        width: u32,
        height: u32,
    },

    #[error("resize area must be greater than zero")]
    InvalidResizeArea,

    #[error("cluster count must be at least 1, got {0}")]
    InvalidClusterCount(usize),

    #[error("target {axis} range must satisfy 0 <= min <= target <= max <= 1, got {min}, {target}, {max}")]
    InvalidTargetRange {
        axis: &'static str,
        min: f32,
        target: f32,
        max: f32,
    },

    #[error("target weight must be a finite value greater than zero, got {0}")]
    InvalidTargetWeight(f32),
}
