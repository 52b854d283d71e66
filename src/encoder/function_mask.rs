//! Function pattern layout: everything in a symbol that is not data
use super::format::FormatInfo;
use crate::models::{Module, ModuleGrid, Version};

/// Structural layer of a symbol: finder, separator, timing and alignment
/// patterns, the dark module, and the reserved format/version areas.
pub struct FunctionPatterns;

impl FunctionPatterns {
    /// Allocate a grid for `version` with every structural module placed.
    /// Everything left `Unset` is available for data.
    pub fn draw(version: Version) -> ModuleGrid {
        let size = version.size();
        let mut grid = ModuleGrid::new(size);

        // Finder patterns with their one-module separators
        Self::draw_finder(&mut grid, 3, 3);
        Self::draw_finder(&mut grid, size - 4, 3);
        Self::draw_finder(&mut grid, 3, size - 4);

        // Timing patterns (row 6 and column 6) between the finders
        for i in 8..size - 8 {
            let dark = i % 2 == 0;
            grid.set(6, i, Module::Function(dark));
            grid.set(i, 6, Module::Function(dark));
        }

        // Alignment patterns, skipping the three finder corners
        let align = alignment_pattern_positions(version);
        let last = align.len().saturating_sub(1);
        for (i, &cx) in align.iter().enumerate() {
            for (j, &cy) in align.iter().enumerate() {
                let corner = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
                if !corner {
                    Self::draw_alignment(&mut grid, cx, cy);
                }
            }
        }

        // Dark module
        grid.set(8, size - 8, Module::Function(true));

        // Format info areas
        for i in 0..15 {
            for (x, y) in FormatInfo::positions(i, size) {
                grid.set(x, y, Module::Reserved);
            }
        }

        // Version info (v7+)
        if version.has_version_info() {
            for dy in 0..6 {
                for dx in 0..3 {
                    grid.set(size - 11 + dx, dy, Module::Reserved);
                    grid.set(dy, size - 11 + dx, Module::Reserved);
                }
            }
        }

        grid
    }

    /// Number of modules left for data and ECC bits
    pub fn data_modules_count(version: Version) -> usize {
        Self::draw(version).count(|m| *m == Module::Unset)
    }

    /// 7x7 finder centred on (cx, cy) plus separator ring, clipped to bounds
    fn draw_finder(grid: &mut ModuleGrid, cx: usize, cy: usize) {
        let size = grid.size() as isize;
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if x < 0 || y < 0 || x >= size || y >= size {
                    continue;
                }
                let dist = dx.abs().max(dy.abs());
                grid.set(x as usize, y as usize, Module::Function(dist != 2 && dist != 4));
            }
        }
    }

    /// 5x5 alignment pattern centred on (cx, cy)
    fn draw_alignment(grid: &mut ModuleGrid, cx: usize, cy: usize) {
        for dy in 0..5 {
            for dx in 0..5 {
                let dist = (dx as isize - 2).abs().max((dy as isize - 2).abs());
                grid.set(cx - 2 + dx, cy - 2 + dy, Module::Function(dist != 1));
            }
        }
    }
}

/// Alignment pattern centers for a given version.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let step = (v * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;

    // Last center sits 7 modules in from the far edge; the rest count back by `step`
    let last = version.size() - 7;
    std::iter::once(6)
        .chain((1..num_align).map(|i| last - (num_align - 1 - i) * step))
        .collect()
}
