use palette::IntoColor;

/// Minimum WCAG contrast ratio for title text over a swatch.
pub const MIN_CONTRAST_TITLE_TEXT: f32 = 4.5;
/// Minimum WCAG contrast ratio for body text over a swatch.
pub const MIN_CONTRAST_BODY_TEXT: f32 = 3.0;

pub const WHITE: (u8, u8, u8) = (255, 255, 255);
pub const BLACK: (u8, u8, u8) = (0, 0, 0);

/// Convert an sRGB color into HSL. The hue is in positive degrees, saturation and
/// lightness in `[0, 1]`. Achromatic colors come out with hue and saturation 0.
pub fn rgb_to_hsl(rgb: (u8, u8, u8)) -> (f32, f32, f32) {
    let raw = palette::Srgb::from_components(rgb);
    let raw_float: palette::Srgb<f32> = raw.into_format();
    let hsl: palette::Hsl = raw_float.into_color();
    let (h, s, l) = hsl.into_components();

    (h.into_positive_degrees(), s, l)
}

/// Relative luminance of an sRGB color per the WCAG definition, in `[0, 1]`.
pub fn luminance((r, g, b): (u8, u8, u8)) -> f32 {
    0.2126 * channel_to_linear(r) + 0.7152 * channel_to_linear(g) + 0.0722 * channel_to_linear(b)
}

fn channel_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;

    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio between two relative luminances, in `[1, 21]`.
pub fn contrast_ratio(l1: f32, l2: f32) -> f32 {
    (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
}

/// Pick pure white or pure black text for the given background color. White is
/// chosen whenever it reaches `min_contrast` against the background.
pub fn text_color_for(rgb: (u8, u8, u8), min_contrast: f32) -> (u8, u8, u8) {
    if contrast_ratio(1.0, luminance(rgb)) >= min_contrast {
        WHITE
    } else {
        BLACK
    }
}

/// Euclidean distance between two colors in RGB space.
pub fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> f32 {
    let dr = a.0 as f32 - b.0 as f32;
    let dg = a.1 as f32 - b.1 as f32;
    let db = a.2 as f32 - b.2 as f32;

    (dr * dr + dg * dg + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achromatic_colors_have_zero_hue_and_saturation() {
        for value in [0, 64, 128, 255] {
            let (h, s, _) = rgb_to_hsl((value, value, value));
            assert_eq!(h, 0.0);
            assert_eq!(s, 0.0);
        }
    }

    #[test]
    fn primary_hues() {
        let (h, s, l) = rgb_to_hsl((255, 0, 0));
        assert!(h.abs() < 0.01);
        assert!((s - 1.0).abs() < 0.01);
        assert!((l - 0.5).abs() < 0.01);

        let (h, _, _) = rgb_to_hsl((0, 255, 0));
        assert!((h - 120.0).abs() < 0.01);

        let (h, _, _) = rgb_to_hsl((0, 0, 255));
        assert!((h - 240.0).abs() < 0.01);
    }

    #[test]
    fn luminance_endpoints() {
        assert_eq!(luminance(BLACK), 0.0);
        assert!((luminance(WHITE) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn contrast_ratio_is_symmetric_and_bounded() {
        assert!((contrast_ratio(0.0, 1.0) - 21.0).abs() < 1e-4);
        assert_eq!(contrast_ratio(0.3, 0.7), contrast_ratio(0.7, 0.3));
        assert_eq!(contrast_ratio(0.5, 0.5), 1.0);
    }

    #[test]
    fn text_color_is_black_on_white_and_white_on_black() {
        assert_eq!(text_color_for(WHITE, MIN_CONTRAST_TITLE_TEXT), BLACK);
        assert_eq!(text_color_for(BLACK, MIN_CONTRAST_TITLE_TEXT), WHITE);
        assert_eq!(text_color_for(BLACK, MIN_CONTRAST_BODY_TEXT), WHITE);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance((0, 0, 0), (0, 0, 0)), 0.0);
        assert_eq!(distance((255, 0, 0), (0, 0, 0)), 255.0);
        assert!((distance((3, 4, 0), (0, 0, 0)) - 5.0).abs() < 1e-6);
    }
}
