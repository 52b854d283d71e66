//! Codeword placement along the QR zig-zag path
use crate::models::{Module, ModuleGrid};

/// Position in the two-column zig-zag traversal.
///
/// Starts at the bottom-right corner, walks column pairs right to left,
/// alternating upward and downward, visiting the right column of a pair
/// before the left one and skipping the vertical timing column (x = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZigZag {
    size: usize,
    /// Right column of the current pair
    right: usize,
    /// Rows already walked in this pair
    vert: usize,
    /// 0 = right column, 1 = left column
    side: usize,
}

impl ZigZag {
    /// Cursor at the bottom-right module of a `size` x `size` symbol
    pub fn new(size: usize) -> Self {
        Self {
            size,
            right: size.saturating_sub(1),
            vert: 0,
            side: 0,
        }
    }

    /// Current (x, y), or `None` once the traversal is exhausted
    pub fn current(&self) -> Option<(usize, usize)> {
        if self.size == 0 || self.right < 1 || self.vert >= self.size {
            return None;
        }
        let x = self.right - self.side;
        // first pair walks up, then directions alternate
        let upward = (self.right + 1) & 2 == 0;
        let y = if upward {
            self.size - 1 - self.vert
        } else {
            self.vert
        };
        Some((x, y))
    }

    /// Next cursor state
    pub fn step(self) -> Self {
        let mut next = self;
        if next.side == 0 {
            next.side = 1;
            return next;
        }
        next.side = 0;
        next.vert += 1;
        if next.vert == next.size {
            next.vert = 0;
            next.right = match next.right.saturating_sub(2) {
                // skip the timing column
                6 => 5,
                r => r,
            };
        }
        next
    }
}

impl Iterator for ZigZag {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.current()?;
        *self = self.step();
        Some(pos)
    }
}

/// Write the codeword bits (MSB first) into every unset module in zig-zag
/// order. Modules past the last codeword bit (remainder bits) become light.
///
/// Returns the number of data modules written.
pub fn place_codewords(grid: &mut ModuleGrid, codewords: &[u8]) -> usize {
    let total_bits = codewords.len() * 8;
    let mut bit_index = 0;
    let mut written = 0;
    for (x, y) in ZigZag::new(grid.size()) {
        if grid.get(x, y) != Module::Unset {
            continue;
        }
        let dark = bit_index < total_bits
            && (codewords[bit_index / 8] >> (7 - bit_index % 8)) & 1 == 1;
        grid.set(x, y, Module::Data(dark));
        bit_index += 1;
        written += 1;
    }
    debug_assert!(
        written >= total_bits && written - total_bits < 8,
        "codeword count does not match the free modules: {total_bits} bits, {written} modules"
    );
    written
}

/// Read the data modules back in placement order
pub fn extract_codewords(grid: &ModuleGrid) -> Vec<u8> {
    let bits: Vec<bool> = ZigZag::new(grid.size())
        .filter(|&(x, y)| grid.is_data(x, y))
        .map(|(x, y)| grid.is_dark(x, y))
        .collect();
    bits.chunks_exact(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect()
}
