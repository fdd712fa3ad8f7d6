use vibrancy::image::io::Reader as ImageReader;

const BLACK_MAX_LUMINANCE: f32 = 0.02;
const WHITE_MIN_LUMINANCE: f32 = 0.90;

// this filter uses the same approach as the default filter in vibrancy, except it
// allows more darker colors and blocks more lighter colors
struct CustomFilter;
impl vibrancy::Filter for CustomFilter {
    fn is_allowed(&self, (r, g, b): (u8, u8, u8), _: (f32, f32, f32)) -> bool {
        let luminance = (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0;

        luminance > BLACK_MAX_LUMINANCE && luminance < WHITE_MIN_LUMINANCE
    }
}

fn main() {
    let path = std::env::args().nth(1).expect("usage: filter <image>");

    let reader = ImageReader::open(path).unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let palette = vibrancy::PaletteBuilder::from_image(buf)
        .clear_filters() // remove the default filter
        .add_filter(CustomFilter) // add our custom filter
        .generate();

    println!("{:#?}", palette);
}
