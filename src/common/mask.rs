use std::ops::Deref;

/// Data mask pattern reference. Pass codes are always drawn with pattern 000,
/// the checkerboard.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub const CHECKERBOARD: MaskPattern = MaskPattern(0b000);

    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match self.0 {
            0b000 => mask_functions::checkerboard,
            _ => unreachable!("Unsupported mask pattern {}", self.0),
        }
    }
}

impl Default for MaskPattern {
    fn default() -> Self {
        Self::CHECKERBOARD
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }
}
