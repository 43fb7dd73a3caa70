use std::error::Error;

use image::{GrayImage, Luma};

use numqr::{ECLevel, QR};

// Quiet zone width in modules
const QZ: u32 = 4;

fn render(qr: &QR, module_sz: u32) -> GrayImage {
    let qz_sz = QZ * module_sz;
    let qr_sz = qr.size() as u32 * module_sz;
    let total_sz = qz_sz + qr_sz + qz_sz;

    GrayImage::from_fn(total_sz, total_sz, |x, y| {
        if x < qz_sz || x >= qz_sz + qr_sz || y < qz_sz || y >= qz_sz + qr_sz {
            return Luma([255]);
        }
        let r = ((y - qz_sz) / module_sz) as usize;
        let c = ((x - qz_sz) / module_sz) as usize;
        if qr.is_dark(r, c) {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let data = args.next().unwrap_or_else(|| "4006381333931".to_string());
    let ecl = match args.next() {
        Some(level) => level.parse::<ECLevel>()?,
        None => ECLevel::M,
    };

    let qr = numqr::encode(&data, ecl)?;

    let img = render(&qr, 8); // 8x scale factor
    img.save("numeric_qr.png")?;

    println!("QR code for {data:?} at level {ecl} saved to: numeric_qr.png");
    Ok(())
}
