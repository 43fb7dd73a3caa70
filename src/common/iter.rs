use super::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Walks the symbol two columns at a time starting from the bottom right
/// corner. Each column pair is traversed upward then downward alternately,
/// right column before left, skipping the vertical timing column entirely.
/// Function modules are yielded too; the caller skips cells already drawn.
pub struct EncRegionIter {
    // Right column of the current pair
    c: i16,
    // Position within the current pair, two cells per row
    step: i16,
    upward: bool,
    width: i16,
}

impl EncRegionIter {
    pub const fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { c: w - 1, step: 0, upward: true, width: w }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 0 {
            return None;
        }

        let row_offset = self.step >> 1;
        let r = if self.upward { self.width - 1 - row_offset } else { row_offset };
        let c = self.c - (self.step & 1);

        self.step += 1;
        if self.step == self.width * 2 {
            self.step = 0;
            self.upward = !self.upward;
            self.c -= 2;
            if self.c == VERT_TIMING_COL {
                self.c -= 1;
            }
        }

        Some((r, c))
    }
}


// Global constants
//------------------------------------------------------------------------------

pub const VERT_TIMING_COL: i16 = 6;
