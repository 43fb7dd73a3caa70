use std::fmt::Display;
use std::mem;

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

/// Fixed capacity, most significant bit first bit buffer.
#[derive(Debug, Clone)]
pub struct BitStream {
    data: [u8; MAX_PAYLOAD_SIZE],
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
    // Pointer to take bits
    cursor: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(
            capacity <= MAX_PAYLOAD_SIZE << 3,
            "Capacity exceeds payload size: Capacity {capacity}"
        );
        Self { data: [0; MAX_PAYLOAD_SIZE], len: 0, capacity, cursor: 0 }
    }

    pub fn from(inp: &[u8]) -> Self {
        let mut bs = Self::new(inp.len() << 3);
        bs.extend(inp);
        bs
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..(self.len + 7) >> 3]
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        debug_assert!(
            self.len + size <= self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + size
        );

        match size {
            0 => (),
            1..=8 => {
                let bits = bits.to_u8().unwrap_or_default();
                let offset = self.len & 7;
                let pos = self.len >> 3;

                if offset + size <= 8 {
                    self.data[pos] |= bits << (8 - size - offset);
                } else {
                    self.data[pos] |= bits >> (size + offset - 8);
                    self.data[pos + 1] = bits << (16 - size - offset);
                }

                self.len += size;
            }
            9..=16 => {
                let bits = bits.to_u16().unwrap_or_default();
                self.push_bits((bits >> 8) as u8, size - 8);
                self.push_bits((bits & 0xFF) as u8, 8);
            }
            _ => panic!("Bits from only u8 and u16 can be pushed: Size {size}"),
        }
    }

    #[cfg(test)]
    pub fn push(&mut self, bit: bool) {
        debug_assert!(
            self.len < self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + 1
        );

        if bit {
            let offset = self.len & 7;
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }

        self.len += 1;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        debug_assert!(
            (self.len & 7) == 0,
            "Bit offset must be zero to extend from another array: Bit offset {}",
            self.len & 7
        );
        let pos = self.len >> 3;
        let arr_bits = arr.len() << 3;
        debug_assert!(
            self.len + arr_bits <= self.capacity,
            "Extension shouldn't overflow capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + arr_bits
        );
        self.data[pos..pos + arr.len()].copy_from_slice(arr);
        self.len += arr_bits;
    }
}


// Take bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    #[cfg(test)]
    pub fn take_bits(&mut self, n: usize) -> Option<u16> {
        debug_assert!(n <= 16, "Cannot take more than 16 bits: N {n}");

        if self.cursor + n > self.len {
            return None;
        }
        if n == 0 {
            return Some(0);
        }

        let offset = self.cursor & 7;
        let pos = self.cursor >> 3;

        let mut res = (self.data[pos] as u32) << 16;
        if offset + n > 8 {
            res |= (self.data[pos + 1] as u32) << 8;
        }
        if offset + n > 16 {
            res |= self.data[pos + 2] as u32;
        }
        res >>= 24 - offset - n;
        res &= (1 << n) - 1;

        self.cursor += n;
        Some(res as u16)
    }

    pub fn take(&mut self) -> Option<bool> {
        if self.cursor == self.len {
            return None;
        }

        let offset = self.cursor & 7;
        let pos = self.cursor >> 3;
        let bit = (self.data[pos] << offset) >> 7;

        self.cursor += 1;

        Some(bit != 0)
    }
}


// Iterator for bit stream
//------------------------------------------------------------------------------

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.take()
    }
}

// Global constants
//------------------------------------------------------------------------------

/// Total codewords of a version 1 symbol.
pub const MAX_PAYLOAD_SIZE: usize = 26;
