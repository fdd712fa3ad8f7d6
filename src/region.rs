use crate::ConfigError;

/// A rectangular sub-area of an image, expressed as half-open pixel bounds:
/// `left..right` by `top..bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl Region {
    /// Build a region validated against the given image dimensions: `left <
    /// right <= width` and `top < bottom <= height`.
    pub fn new(
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        width: u32,
        height: u32,
    ) -> Result<Region, ConfigError> {
        if left < right && right <= width && top < bottom && bottom <= height {
            Ok(Self {
                left,
                top,
                right,
                bottom,
            })
        } else {
            Err(ConfigError::InvalidRegion {
                left,
                top,
                right,
                bottom,
                width,
                height,
            })
        }
    }

    pub fn left(self) -> u32 {
        self.left
    }

    pub fn top(self) -> u32 {
        self.top
    }

    pub fn right(self) -> u32 {
        self.right
    }

    pub fn bottom(self) -> u32 {
        self.bottom
    }

    pub fn width(self) -> u32 {
        self.right - self.left
    }

    pub fn height(self) -> u32 {
        self.bottom - self.top
    }

    /// Scale the region by a uniform factor, keeping it inside a resized image of
    /// the given dimensions and never collapsing it to an empty rectangle.
    pub(crate) fn scaled(self, factor: f32, width: u32, height: u32) -> Region {
        let left = ((self.left as f32 * factor).floor() as u32).min(width.saturating_sub(1));
        let top = ((self.top as f32 * factor).floor() as u32).min(height.saturating_sub(1));
        let right = ((self.right as f32 * factor).ceil() as u32).clamp(left + 1, width);
        let bottom = ((self.bottom as f32 * factor).ceil() as u32).clamp(top + 1, height);

        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}
