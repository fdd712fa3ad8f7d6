use vibrancy::image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args().nth(1).expect("usage: basic <image>");

    let reader = ImageReader::open(path).unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let palette = vibrancy::PaletteBuilder::from_image(buf).generate();

    if let Some(dominant) = palette.dominant_swatch() {
        println!("dominant: {:?} ({} pixels)", dominant.rgb(), dominant.population());
    }

    for (name, color) in [
        ("vibrant", palette.vibrant_color()),
        ("light vibrant", palette.light_vibrant_color()),
        ("dark vibrant", palette.dark_vibrant_color()),
        ("muted", palette.muted_color()),
        ("light muted", palette.light_muted_color()),
        ("dark muted", palette.dark_muted_color()),
    ] {
        println!("{name}: {color:?}");
    }
}
