//! Format information placement
use super::bch;
use crate::models::{ECLevel, MaskPattern, Module, ModuleGrid};

/// Format info is 15 bits (5 data + 10 ECC), written twice:
/// around the top-left finder, and split between the top-right and
/// bottom-left finders. Bit 0 is the least significant bit.
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Mask applied to the data modules
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Format info for `ec_level` and `mask_pattern`
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// Masked 15-bit BCH word
    pub fn bits(&self) -> u16 {
        bch::format_bits(self.ec_level, self.mask_pattern)
    }

    /// Coordinates (x, y) of bit `i` in the first and second copy
    pub fn positions(i: usize, size: usize) -> [(usize, usize); 2] {
        let first = match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        };
        let second = if i < 8 {
            (size - 1 - i, 8)
        } else {
            (8, size - 15 + i)
        };
        [first, second]
    }

    /// Write both copies into `grid`
    pub fn write(&self, grid: &mut ModuleGrid) {
        let bits = self.bits();
        let size = grid.size();
        for i in 0..15 {
            let dark = (bits >> i) & 1 == 1;
            for (x, y) in Self::positions(i, size) {
                grid.set(x, y, Module::Function(dark));
            }
        }
    }

    /// Read the first copy back and decode it
    pub fn read(grid: &ModuleGrid) -> Option<Self> {
        let size = grid.size();
        let word = (0..15).fold(0u16, |acc, i| {
            let (x, y) = Self::positions(i, size)[0];
            acc | ((grid.is_dark(x, y) as u16) << i)
        });
        bch::decode_format(word).map(|(ec_level, mask_pattern)| Self::new(ec_level, mask_pattern))
    }
}
