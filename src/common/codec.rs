use log::trace;

use super::bitstream::BitStream;
use super::error::{QRError, QRResult};
use super::metadata::{ECLevel, Version};

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Numeric = 0b0001,
}

impl Mode {
    pub fn contains(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
        }
    }

    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Numeric.contains(char), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    pub fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                debug_assert!(len <= 3, "Data is too long for numeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
        }
    }

    /// Bits taken by a chunk of `len` characters.
    pub fn encoded_chunk_len(&self, len: usize) -> usize {
        match self {
            Self::Numeric => match len {
                3 => 10,
                2 => 7,
                1 => 4,
                _ => unreachable!("Invalid numeric chunk length: {len}"),
            },
        }
    }

    pub fn chunk_size(&self) -> usize {
        match self {
            Self::Numeric => 3,
        }
    }

    /// Encoded data length in bits, excluding mode indicator and char count.
    pub fn encoded_len(&self, len: usize) -> usize {
        let chunk = self.chunk_size();
        let rem = len % chunk;
        let rem_bits = if rem == 0 { 0 } else { self.encoded_chunk_len(rem) };
        (len / chunk) * self.encoded_chunk_len(chunk) + rem_bits
    }
}

// Digits
//------------------------------------------------------------------------------

/// Keeps ASCII digits and drops every other character.
pub fn strip_non_digits(value: &str) -> Vec<u8> {
    value.bytes().filter(|b| Mode::Numeric.contains(*b)).collect()
}

/// Total bits of a numeric segment holding `len` digits.
pub fn segment_bit_len(ver: Version, len: usize) -> usize {
    ver.mode_bits() + ver.char_cnt_bits() + Mode::Numeric.encoded_len(len)
}

/// Largest digit count that fits the data capacity of the version & level.
pub fn numeric_capacity(ver: Version, ecl: ECLevel) -> usize {
    let bcap = ver.data_bit_capacity(ecl);
    let mut len = 0;
    while segment_bit_len(ver, len + 1) <= bcap {
        len += 1;
    }
    len
}

// Encoder
//------------------------------------------------------------------------------

/// Encodes digits into data codewords: numeric segment, terminator, bit
/// padding and pad codewords up to the data capacity.
pub fn encode(digits: &[u8], ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
    debug_assert!(
        digits.iter().all(|b| Mode::Numeric.contains(*b)),
        "Digits must be stripped before encoding"
    );

    let bcap = ver.data_bit_capacity(ecl);
    let sz = segment_bit_len(ver, digits.len());
    if sz > bcap {
        return Err(QRError::DataTooLong {
            len: digits.len(),
            capacity: numeric_capacity(ver, ecl),
        });
    }

    let mut bs = BitStream::new(bcap);
    push_segment(digits, ver, &mut bs);
    trace!("Numeric segment: {} bits of {bcap}", bs.len());
    push_terminator(&mut bs);
    pad_remaining_capacity(&mut bs);
    Ok(bs)
}

fn push_segment(digits: &[u8], ver: Version, out: &mut BitStream) {
    let mode = Mode::Numeric;
    out.push_bits(mode as u8, ver.mode_bits());
    out.push_bits(digits.len() as u16, ver.char_cnt_bits());
    for chunk in digits.chunks(mode.chunk_size()) {
        out.push_bits(mode.encode_chunk(chunk), mode.encoded_chunk_len(chunk.len()));
    }
}

fn push_terminator(out: &mut BitStream) {
    let bit_len = out.len();
    let bit_capacity = out.capacity();
    if bit_len < bit_capacity {
        let term_len = std::cmp::min(4, bit_capacity - bit_len);
        out.push_bits(0, term_len);
    }
}

fn pad_remaining_capacity(out: &mut BitStream) {
    push_padding_bits(out);
    push_padding_codewords(out);
}

fn push_padding_bits(out: &mut BitStream) {
    let offset = out.len() & 7;
    if offset > 0 {
        let padding_bits_len = 8 - offset;
        out.push_bits(0, padding_bits_len);
    }
}

fn push_padding_codewords(out: &mut BitStream) {
    let offset = out.len() & 7;
    debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {}", offset);

    let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
    PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
        out.push_bits(pc, 8);
    });
}


// Global constants
//------------------------------------------------------------------------------

pub const PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
