use std::error::Error;

use numqr::QRBuilder;

// Quiet zone width in modules
const QZ: usize = 4;

fn main() -> Result<(), Box<dyn Error>> {
    let data = std::env::args().nth(1).unwrap_or_else(|| "0123-4567-89".to_string());

    let builder = QRBuilder::new(&data);
    let qr = builder.build()?;

    let blank = "  ".repeat(qr.size() + 2 * QZ);
    let side = "  ".repeat(QZ);
    for _ in 0..QZ {
        println!("{blank}");
    }
    for line in qr.to_str().lines() {
        println!("{side}{line}{side}");
    }
    for _ in 0..QZ {
        println!("{blank}");
    }

    println!("Generated {}", builder.metadata());
    Ok(())
}
