use vibrancy::image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args().nth(1).expect("usage: vibrancy <image>");

    let reader = ImageReader::open(path).unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let palette = vibrancy::PaletteBuilder::from_image(buf).generate();

    println!("{:#?}", palette);
}
