const MIN_LUMINANCE: f32 = 0.05;
const MAX_LUMINANCE: f32 = 0.95;

/// A trait used to implement filters for the image quantization process.
///
/// During quantization, filters remove colors from consideration before any
/// counting or merging takes place; a color is excluded as soon as any registered
/// filter disallows it. This trait allows the library consumer to implement
/// custom filters.
///
/// Filters must be `Send + Sync` so a configured builder can be moved to a worker
/// thread by [`crate::PaletteBuilder::generate_deferred`].
///
/// See [`crate::PaletteBuilder::add_filter`] on how to add filters to the
/// quantization process.
pub trait Filter: Send + Sync {
    /// Return whether a given color should be allowed or not. The same color is
    /// given in both sRGB and HSL for convenience.
    fn is_allowed(&self, rgb: (u8, u8, u8), hsl: (f32, f32, f32)) -> bool;
}

/// The filter included in every [`crate::PaletteBuilder`] by default.
///
/// Disallows colors very close to black and colors very close to white, judged by
/// a weighted sRGB luminance outside `(0.05, 0.95)`.
#[derive(Debug)]
pub struct DefaultFilter;

impl Filter for DefaultFilter {
    fn is_allowed(&self, (r, g, b): (u8, u8, u8), _: (f32, f32, f32)) -> bool {
        let luminance = (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0;

        luminance > MIN_LUMINANCE && luminance < MAX_LUMINANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_near_black_and_near_white() {
        let filter = DefaultFilter;

        assert!(!filter.is_allowed((0, 0, 0), (0.0, 0.0, 0.0)));
        assert!(!filter.is_allowed((5, 5, 5), (0.0, 0.0, 0.02)));
        assert!(!filter.is_allowed((255, 255, 255), (0.0, 0.0, 1.0)));
        assert!(!filter.is_allowed((250, 250, 250), (0.0, 0.0, 0.98)));
    }

    #[test]
    fn allows_midtones() {
        let filter = DefaultFilter;

        assert!(filter.is_allowed((128, 128, 128), (0.0, 0.0, 0.5)));
        assert!(filter.is_allowed((200, 30, 30), (0.0, 0.74, 0.45)));
    }
}
