use vibrancy::{image::RgbaImage, ConfigError, KmeansQuantizer, NamedTarget, PaletteBuilder, Quantizer};

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn solid_image(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba(pixel))
}

#[test]
fn two_by_two_image_quantizes_to_two_colors() {
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(0, 0, image::Rgba(RED));
    img.put_pixel(1, 0, image::Rgba(RED));
    img.put_pixel(0, 1, image::Rgba(GREEN));
    img.put_pixel(1, 1, image::Rgba(BLUE));

    let palette = PaletteBuilder::from_image(img)
        .clear_filters()
        .maximum_color_count(2)
        .unwrap()
        .generate();

    assert_eq!(palette.swatches().len(), 2);

    let dominant = palette.dominant_swatch().unwrap();
    let (r, g, b) = dominant.rgb();
    assert!(r > 200 && g < 64 && b < 64, "dominant {:?} is not red-family", dominant.rgb());
    assert_eq!(dominant.population(), 2);
}

#[test]
fn saturated_red_matches_the_vibrant_target() {
    let palette = PaletteBuilder::from_image(solid_image(4, 4, RED)).generate();

    let vibrant = palette.vibrant_swatch().expect("no vibrant swatch");
    assert_eq!(vibrant.rgb(), (255, 0, 0));
}

#[test]
fn all_black_image_produces_an_empty_palette() {
    let palette = PaletteBuilder::from_image(solid_image(4, 4, BLACK)).generate();

    assert!(palette.swatches().is_empty());
    assert!(palette.dominant_swatch().is_none());
    for named in NamedTarget::ALL {
        assert!(palette.swatch_for(named).is_none());
    }
}

#[test]
fn fully_transparent_image_produces_an_empty_palette_with_kmeans() {
    let palette = PaletteBuilder::from_image(solid_image(4, 4, [255, 0, 0, 0]))
        .quantizer(Quantizer::Kmeans(KmeansQuantizer::new(4).unwrap().with_seed(0)))
        .generate();

    assert!(palette.swatches().is_empty());
    assert!(palette.dominant_swatch().is_none());
}

#[test]
fn out_of_bounds_region_is_rejected_before_generation() {
    let result = PaletteBuilder::from_image(solid_image(8, 8, RED)).set_region(0, 0, 9, 8);
    assert!(matches!(result, Err(ConfigError::InvalidRegion { .. })));

    let result = PaletteBuilder::from_image(solid_image(8, 8, RED)).set_region(4, 4, 4, 8);
    assert!(matches!(result, Err(ConfigError::InvalidRegion { .. })));
}

#[test]
fn zero_maximum_color_count_is_rejected() {
    let result = PaletteBuilder::from_image(solid_image(8, 8, RED)).maximum_color_count(0);
    assert!(matches!(result, Err(ConfigError::InvalidMaximumColorCount(0))));
}

#[test]
fn zero_resize_area_is_rejected() {
    let result = PaletteBuilder::from_image(solid_image(8, 8, RED)).resize_bitmap_area(0);
    assert!(matches!(result, Err(ConfigError::InvalidResizeArea)));
}

#[test]
fn region_restricts_quantization() {
    // left half red, right half blue
    let img = RgbaImage::from_fn(10, 10, |x, _| {
        if x < 5 {
            image::Rgba(RED)
        } else {
            image::Rgba(BLUE)
        }
    });

    let palette = PaletteBuilder::from_image(img)
        .clear_filters()
        .set_region(0, 0, 5, 10)
        .unwrap()
        .generate();

    assert!(!palette.swatches().is_empty());
    for swatch in palette.swatches() {
        let (r, _, b) = swatch.rgb();
        assert!(r > 200 && b < 64, "swatch {:?} is not from the red half", swatch.rgb());
    }
}

#[test]
fn generation_is_idempotent() {
    let img = RgbaImage::from_fn(16, 16, |x, y| {
        image::Rgba([(x * 16) as u8, (y * 16) as u8, 128, 255])
    });

    let first = PaletteBuilder::from_image(img.clone()).generate();
    let second = PaletteBuilder::from_image(img).generate();

    assert_eq!(first, second);
}

#[test]
fn deferred_generation_matches_synchronous_generation() {
    let img = RgbaImage::from_fn(16, 16, |x, y| {
        image::Rgba([(x * 16) as u8, 200, (y * 16) as u8, 255])
    });

    let synchronous = PaletteBuilder::from_image(img.clone()).generate();
    let deferred = PaletteBuilder::from_image(img)
        .generate_deferred()
        .join()
        .expect("deferred generation panicked");

    assert_eq!(synchronous, deferred);
}

#[test]
fn large_images_are_downsampled_before_quantization() {
    // well above the default 112x112 resize area
    let palette = PaletteBuilder::from_image(solid_image(300, 300, RED)).generate();

    let dominant = palette.dominant_swatch().unwrap();
    assert_eq!(dominant.rgb(), (255, 0, 0));
    assert!(dominant.population() <= 112 * 113);
}

#[test]
fn seeded_kmeans_palette_is_reproducible() {
    let img = RgbaImage::from_fn(16, 16, |x, y| {
        image::Rgba([(x * 16) as u8, (y * 16) as u8, 64, 255])
    });
    let quantizer = Quantizer::Kmeans(KmeansQuantizer::new(6).unwrap().with_seed(1234));

    let first = PaletteBuilder::from_image(img.clone()).quantizer(quantizer).generate();
    let second = PaletteBuilder::from_image(img).quantizer(quantizer).generate();

    assert_eq!(first, second);
}

#[test]
fn kmeans_dominant_covers_a_solid_image() {
    let palette = PaletteBuilder::from_image(solid_image(8, 8, GREEN))
        .quantizer(Quantizer::Kmeans(KmeansQuantizer::new(3).unwrap().with_seed(0)))
        .generate();

    let dominant = palette.dominant_swatch().unwrap();
    assert_eq!(dominant.rgb(), (0, 255, 0));
    assert_eq!(dominant.population(), 64);
}
