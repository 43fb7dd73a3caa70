//! # numqr
//!
//! A Rust library for generating the module matrix of numeric QR codes, as
//! printed on pass and voucher codes. Symbols are always version 1 (21x21),
//! numeric mode, mask pattern 0, with error correction level L or M.
//!
//! The library stops at the matrix. Rendering to pixels, SVG or terminal
//! blocks, including the quiet zone, is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use numqr::{encode, ECLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = encode("4006-3812-55", ECLevel::M)?;
//! assert_eq!(qr.size(), 21);
//!
//! for row in qr.modules() {
//!     let line: String = row.iter().map(|&m| if m == 1 { '#' } else { ' ' }).collect();
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use numqr::{ECLevel, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("0123456789")
//!     .ec_level(ECLevel::L) // if not provided, defaults to ECLevel::M
//!     .build()?;
//! assert_eq!(qr.get_bit(13, 8), 1); // dark module
//! # Ok(())
//! # }
//! ```
//!
//! ## Input
//!
//! Every character that is not an ASCII digit is dropped, so `"12-34"` and
//! `"1234"` produce the same symbol. Input without any digit yields an all
//! light matrix. Input longer than the level's capacity (41 digits at L, 34
//! at M) is rejected with [`QRError::DataTooLong`].
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction, 19 data + 7 ecc codewords
//! - **M (Medium)**: ~15% error correction, 16 data + 10 ecc codewords
//!
//! Levels parse from text with [`str::parse`]; anything other than `L` or `M`
//! is rejected with [`QRError::InvalidECLevel`].

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{QRBuilder, QR};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Version};

/// Galois field and Reed-Solomon primitives used for the error correction
/// codewords.
pub mod ec {
    pub use crate::common::ec::{append_ecc, ecc, generator_polynomial, multiply, GF};
}

/// Encodes the digits of `value` into a version 1 symbol.
pub fn encode(value: &str, ecl: ECLevel) -> QRResult<QR> {
    QRBuilder::new(value).ec_level(ecl).build()
}

/// [`encode`] at the default level, M.
pub fn encode_default(value: &str) -> QRResult<QR> {
    QRBuilder::new(value).build()
}
