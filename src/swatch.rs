use crate::color;

/// A representative color extracted from an image, along with the number of pixels
/// it represents and text colors guaranteed to be readable over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    red: u8,
    green: u8,
    blue: u8,
    population: u32,
    title_text_color: (u8, u8, u8),
    body_text_color: (u8, u8, u8),
}

impl Swatch {
    pub fn new((red, green, blue): (u8, u8, u8), population: u32) -> Swatch {
        let rgb = (red, green, blue);

        Self {
            red,
            green,
            blue,
            population,
            title_text_color: color::text_color_for(rgb, color::MIN_CONTRAST_TITLE_TEXT),
            body_text_color: color::text_color_for(rgb, color::MIN_CONTRAST_BODY_TEXT),
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn hsl(self) -> (f32, f32, f32) {
        color::rgb_to_hsl(self.rgb())
    }

    pub fn population(self) -> u32 {
        self.population
    }

    /// Pure black or pure white, whichever is readable as title text over this
    /// swatch's color.
    pub fn title_text_color(self) -> (u8, u8, u8) {
        self.title_text_color
    }

    /// Pure black or pure white, whichever is readable as body text over this
    /// swatch's color.
    pub fn body_text_color(self) -> (u8, u8, u8) {
        self.body_text_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_colors_are_binary() {
        for rgb in [(0, 0, 0), (255, 255, 255), (200, 30, 30), (120, 120, 120)] {
            let swatch = Swatch::new(rgb, 1);

            for text in [swatch.title_text_color(), swatch.body_text_color()] {
                assert!(text == color::BLACK || text == color::WHITE);
            }
        }
    }

    #[test]
    fn dark_swatch_gets_white_text() {
        let swatch = Swatch::new((10, 10, 10), 1);
        assert_eq!(swatch.title_text_color(), color::WHITE);
        assert_eq!(swatch.body_text_color(), color::WHITE);
    }

    #[test]
    fn light_swatch_gets_black_text() {
        let swatch = Swatch::new((250, 250, 250), 1);
        assert_eq!(swatch.title_text_color(), color::BLACK);
        assert_eq!(swatch.body_text_color(), color::BLACK);
    }
}
