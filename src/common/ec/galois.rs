//! Arithmetic over GF(256) as used by QR codes.
//!
//! Elements are bytes whose bits are the coefficients of a degree 7 polynomial.
//! Addition is XOR. Multiplication is done modulo the primitive polynomial
//! x^8 + x^4 + x^3 + x^2 + 1 (0x11D), for which α = 2 generates every non-zero
//! element. Both lookup tables are computed at compile time.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

const PRIMITIVE_POLY: u16 = 0x11D;

const fn compute_exp_log() -> ([u8; 512], [u8; 256]) {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];
    let mut p: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = p as u8;
        log[p as usize] = i as u8;
        p <<= 1;
        if p & 0x100 != 0 {
            p ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    // Second half repeats the first so log[a] + log[b] can index directly
    while i < 512 {
        exp[i] = exp[i - 255];
        i += 1;
    }
    (exp, log)
}

/// α^i for i in 0..512.
pub static EXP_TABLE: [u8; 512] = compute_exp_log().0;

/// Inverse of [`EXP_TABLE`] over 1..=255. `LOG_TABLE[0]` is unused.
pub static LOG_TABLE: [u8; 256] = compute_exp_log().1;

pub fn multiply(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    EXP_TABLE[LOG_TABLE[a as usize] as usize + LOG_TABLE[b as usize] as usize]
}

// Field element
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct GF(pub u8);

impl GF {
    pub const ZERO: GF = GF(0);
    pub const ONE: GF = GF(1);

    /// α^i
    pub fn exp(i: usize) -> Self {
        GF(EXP_TABLE[i % 255])
    }

    pub fn log(self) -> usize {
        debug_assert!(self.0 != 0, "Log of zero is undefined");
        LOG_TABLE[self.0 as usize] as usize
    }
}

impl Add for GF {
    type Output = GF;
    fn add(self, rhs: GF) -> GF {
        GF(self.0 ^ rhs.0)
    }
}

impl AddAssign for GF {
    fn add_assign(&mut self, rhs: GF) {
        self.0 ^= rhs.0;
    }
}

impl Sub for GF {
    type Output = GF;
    fn sub(self, rhs: GF) -> GF {
        self + rhs
    }
}

impl Mul for GF {
    type Output = GF;
    fn mul(self, rhs: GF) -> GF {
        GF(multiply(self.0, rhs.0))
    }
}

impl MulAssign for GF {
    fn mul_assign(&mut self, rhs: GF) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod galois_tests {
    use test_case::test_case;

    use super::{multiply, EXP_TABLE, GF, LOG_TABLE};

    #[test]
    fn test_exp_table() {
        assert_eq!(&EXP_TABLE[..10], &[1, 2, 4, 8, 16, 32, 64, 128, 29, 58]);
        assert_eq!(EXP_TABLE[255], 1);
        assert_eq!(EXP_TABLE[..255], EXP_TABLE[255..510]);
    }

    #[test]
    fn test_log_is_inverse_of_exp() {
        for a in 1..=255u8 {
            assert_eq!(EXP_TABLE[LOG_TABLE[a as usize] as usize], a);
        }
    }

    #[test_case(0, 0, 0; "zero times zero")]
    #[test_case(0, 123, 0; "zero lhs")]
    #[test_case(77, 0, 0; "zero rhs")]
    #[test_case(1, 200, 200; "identity")]
    #[test_case(2, 128, 29; "reduction by primitive polynomial")]
    #[test_case(3, 7, 9; "carryless")]
    #[test_case(255, 255, 226; "largest operands")]
    fn test_multiply(a: u8, b: u8, exp: u8) {
        assert_eq!(multiply(a, b), exp);
        assert_eq!(multiply(b, a), exp);
    }

    #[test]
    fn test_multiply_matches_shift_and_add() {
        fn slow_mul(mut a: u8, mut b: u8) -> u8 {
            let mut res = 0u8;
            while b != 0 {
                if b & 1 != 0 {
                    res ^= a;
                }
                let carry = a & 0x80 != 0;
                a <<= 1;
                if carry {
                    a ^= 0x1D;
                }
                b >>= 1;
            }
            res
        }
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(multiply(a, b), slow_mul(a, b), "a {a}, b {b}");
            }
        }
    }

    #[test]
    fn test_gf_ops() {
        let a = GF(0x53);
        let b = GF(0xCA);
        assert_eq!(a + b, GF(0x99));
        assert_eq!(a - b, a + b);
        assert_eq!(a * GF::ONE, a);
        assert_eq!(a * GF::ZERO, GF::ZERO);
        assert_eq!(GF::exp(8), GF(29));
        assert_eq!(GF::exp(255), GF::ONE);
        assert_eq!(GF(29).log(), 8);

        let mut c = a;
        c *= b;
        c += b;
        assert_eq!(c, a * b + b);
    }
}
