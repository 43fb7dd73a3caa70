use std::ops::Deref;

use crate::common::{
    bitstream::BitStream,
    iter::EncRegionIter,
    mask::MaskPattern,
    metadata::{
        format_info, Color, ECLevel, Version, DARK_MODULE_COORD, FORMAT_INFO_BIT_LEN,
        FORMAT_INFO_COORDS_QR_MAIN, FORMAT_INFO_COORDS_QR_SIDE,
    },
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

/// Module matrix of a version 1 symbol, without quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: [Module; MAX_QR_SIZE],
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        debug_assert!(w * w <= MAX_QR_SIZE, "Version too large: {}", ver.number());
        Self { grid: [Module::Empty; MAX_QR_SIZE], w, ver, ecl, mask: None }
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    /// Modules per side, always 21.
    pub fn size(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    /// Mask applied to the data region. `None` for the blank symbol produced
    /// from input without digits.
    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid[..self.w * self.w].iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    /// 1 for dark, 0 for light.
    pub fn get_bit(&self, r: usize, c: usize) -> u8 {
        self.is_dark(r, c) as u8
    }

    pub fn is_dark(&self, r: usize, c: usize) -> bool {
        assert!(r < self.w && c < self.w, "Module out of bounds: ({r}, {c})");
        matches!(*self.grid[r * self.w + c], Color::Dark)
    }

    /// Row major 0/1 matrix, `modules()[r][c]`.
    pub fn modules(&self) -> Vec<Vec<u8>> {
        (0..self.w).map(|r| (0..self.w).map(|c| self.get_bit(r, c)).collect()).collect()
    }

    pub fn to_bool_grid(&self) -> Vec<Vec<bool>> {
        (0..self.w).map(|r| (0..self.w).map(|c| self.is_dark(r, c)).collect()).collect()
    }

    /// Two characters per module, dark as full blocks. No quiet zone.
    pub fn to_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w * 6 + 1));
        for r in 0..self.w {
            for c in 0..self.w {
                res.push_str(self.color(r, c).select("██", "  "));
            }
            res.push('\n');
        }
        res
    }

    fn color(&self, r: usize, c: usize) -> Color {
        *self.grid[r * self.w + c]
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub(crate) fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    /// Finder patterns with their light separators, 8x8 at three corners.
    pub(crate) fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    /// Alternating strips on row 6 and column 6 between the separators, dark
    /// on even indices.
    pub(crate) fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        let (off, last) = (6, w - 9);
        self.draw_line(off, 8, off, last);
        self.draw_line(8, off, last, off);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                let m =
                    if j & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(r1, j, m);
            }
        } else {
            for i in r1..=r2 {
                let m =
                    if i & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(i, c1, m);
            }
        }
    }
}


// ALl function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
    }
}

// Format info
//------------------------------------------------------------------------------

impl QR {
    /// Placeholder light modules so the data pass leaves the format area
    /// alone until the real bits are known.
    pub(crate) fn reserve_format_area(&mut self) {
        let off = Module::Format(Color::Light);
        self.draw_number(0, FORMAT_INFO_BIT_LEN, off, off, &FORMAT_INFO_COORDS_QR_MAIN);
        self.draw_number(0, FORMAT_INFO_BIT_LEN, off, off, &FORMAT_INFO_COORDS_QR_SIDE);
        self.set(DARK_MODULE_COORD.0, DARK_MODULE_COORD.1, off);
    }

    pub(crate) fn draw_format_info(&mut self, format_info: u32) {
        let off = Module::Format(Color::Light);
        let on = Module::Format(Color::Dark);
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, off, on, &FORMAT_INFO_COORDS_QR_MAIN);
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, off, on, &FORMAT_INFO_COORDS_QR_SIDE);
        self.set(DARK_MODULE_COORD.0, DARK_MODULE_COORD.1, on);
    }

    fn draw_number(
        &mut self,
        number: u32,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i16, i16)],
    ) {
        let mut mask = 1 << (bit_len - 1);
        for (r, c) in coords {
            if number & mask == 0 {
                self.set(*r, *c, off_clr);
            } else {
                self.set(*r, *c, on_clr);
            }
            mask >>= 1;
        }
    }
}

#[cfg(test)]
mod qr_information_tests {
    use crate::builder::QR;
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{format_info, ECLevel, Version};

    #[test]
    fn test_reserve_format_info_qr() {
        let mut qr = QR::new(Version::V1, ECLevel::L);
        qr.reserve_format_area();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             .....................\n\
             ........M............\n\
             MMMMMM.MM....MMMMMMMM\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n\
             ........M............\n"
        );
    }

    #[test]
    fn test_format_info_m() {
        let mut qr = QR::new(Version::V1, ECLevel::M);
        qr.draw_format_info(format_info(ECLevel::M, MaskPattern::CHECKERBOARD));
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             ........M............\n\
             ........m............\n\
             ........M............\n\
             ........M............\n\
             ........m............\n\
             ........M............\n\
             .....................\n\
             ........M............\n\
             mMmMmM.MM....MMMmMMmM\n\
             .....................\n\
             .....................\n\
             .....................\n\
             .....................\n\
             ........m............\n\
             ........M............\n\
             ........M............\n\
             ........m............\n\
             ........M............\n\
             ........m............\n\
             ........M............\n\
             ........m............\n"
        );
    }

    #[test]
    fn test_all_function_patterns_and_format_area() {
        let mut qr = QR::new(Version::V1, ECLevel::L);
        qr.draw_all_function_patterns();
        qr.reserve_format_area();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffFM....Ffffffff\n\
             fFFFFFfFM....FfFFFFFf\n\
             fFfffFfFM....FfFfffFf\n\
             fFfffFfFM....FfFfffFf\n\
             fFfffFfFM....FfFfffFf\n\
             fFFFFFfFM....FfFFFFFf\n\
             fffffffFfFfFfFfffffff\n\
             FFFFFFFFM....FFFFFFFF\n\
             MMMMMMfMM....MMMMMMMM\n\
             ......F..............\n\
             ......f..............\n\
             ......F..............\n\
             ......f..............\n\
             FFFFFFFFM............\n\
             fffffffFM............\n\
             fFFFFFfFM............\n\
             fFfffFfFM............\n\
             fFfffFfFM............\n\
             fFfffFfFM............\n\
             fFFFFFfFM............\n\
             fffffffFM............\n"
        );
        let empty = qr.grid[..21 * 21].iter().filter(|m| matches!(m, super::Module::Empty));
        assert_eq!(empty.count(), 208);
    }
}

// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Fills every empty module in placement order, masking each bit as it
    /// is written. Modules left over once the payload runs out are light
    /// before masking.
    pub(crate) fn draw_encoding_region(&mut self, payload: BitStream, mask: MaskPattern) {
        self.reserve_format_area();
        self.draw_payload(payload, mask);

        let w = self.w;
        debug_assert!(!self.grid[..w * w].contains(&Module::Empty), "Empty module found in debug");
    }

    fn draw_payload(&mut self, mut payload: BitStream, mask: MaskPattern) {
        self.mask = Some(mask);
        let mask_fn = mask.mask_function();
        for (r, c) in EncRegionIter::new(self.ver) {
            if !matches!(self.get(r, c), Module::Empty) {
                continue;
            }
            let clr = Color::from(payload.next().unwrap_or(false));
            let clr = if mask_fn(r, c) { !clr } else { clr };
            self.set(r, c, Module::Data(clr));
        }
    }

    pub(crate) fn draw_format_region(&mut self) {
        let mask = self.mask.unwrap_or_default();
        let format_info = format_info(self.ecl, mask);
        self.draw_format_info(format_info);
    }
}


// Global constants
//------------------------------------------------------------------------------

pub const MAX_QR_SIZE: usize = 21 * 21;
