use std::fmt::{Display, Formatter};
use std::ops::Not;
use std::str::FromStr;

use super::error::{QRError, QRResult};
use super::mask::MaskPattern;

// Version
//------------------------------------------------------------------------------

/// Symbol version. Only version 1 (21x21) exists for numeric pass codes.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Version(u8);

impl Version {
    pub const V1: Version = Version(1);

    pub const fn number(self) -> u8 {
        self.0
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }

    pub const fn total_codewords(self) -> usize {
        26
    }

    pub const fn data_codewords(self, ecl: ECLevel) -> usize {
        match ecl {
            ECLevel::L => 19,
            ECLevel::M => 16,
        }
    }

    pub const fn ecc_codewords(self, ecl: ECLevel) -> usize {
        self.total_codewords() - self.data_codewords(ecl)
    }

    pub const fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }

    pub const fn mode_bits(self) -> usize {
        4
    }

    pub const fn char_cnt_bits(self) -> usize {
        10
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Default)]
pub enum ECLevel {
    L,
    #[default]
    M,
}

impl ECLevel {
    /// Two bit indicator stored in the format information.
    pub const fn format_bits(self) -> u32 {
        match self {
            Self::L => 0b01,
            Self::M => 0b00,
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L => f.write_str("L"),
            Self::M => f.write_str("M"),
        }
    }
}

impl TryFrom<char> for ECLevel {
    type Error = QRError;
    fn try_from(c: char) -> QRResult<Self> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Self::L),
            'M' => Ok(Self::M),
            _ => Err(QRError::InvalidECLevel(c.to_string())),
        }
    }
}

impl FromStr for ECLevel {
    type Err = QRError;
    fn from_str(s: &str) -> QRResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|_| QRError::InvalidECLevel(s.into())),
            _ => Err(QRError::InvalidECLevel(s.into())),
        }
    }
}


// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

// Format information
//------------------------------------------------------------------------------

/// 15 bit format information: 5 data bits (ec level, mask) followed by a
/// 10 bit BCH code, XORed with [`FORMAT_MASK`].
pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    let data = (ecl.format_bits() << 3) | *mask as u32;
    let mut rem = data << FORMAT_ERROR_BIT_LEN;
    for i in (FORMAT_ERROR_BIT_LEN..FORMAT_INFO_BIT_LEN).rev() {
        if rem & (1 << i) != 0 {
            rem ^= FORMAT_GENERATOR << (i - FORMAT_ERROR_BIT_LEN);
        }
    }
    ((data << FORMAT_ERROR_BIT_LEN) | rem) ^ FORMAT_MASK
}


// Global constants
//------------------------------------------------------------------------------

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const FORMAT_ERROR_BIT_LEN: usize = 10;

pub const FORMAT_GENERATOR: u32 = 0b10100110111;

pub const FORMAT_MASK: u32 = 0b101010000010010;

/// Main copy around the top left finder, most significant bit first.
pub static FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

/// Side copy split between the bottom left and top right finders, most
/// significant bit first.
pub static FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

/// Always dark, next to the bottom left finder.
pub const DARK_MODULE_COORD: (i16, i16) = (-8, 8);
