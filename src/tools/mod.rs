//! Helpers for the CLI and benchmarks: saving, previews, grid and capacity stats

use crate::encoder::modes::Mode;
use crate::encoder::tables::data_codewords;
use crate::models::{ECLevel, Symbol, Version};
use image::RgbImage;
use image::imageops::FilterType;
use std::path::Path;

/// Save a rendered symbol; the format (PNG, JPEG, ...) follows the extension.
pub fn save_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<(), image::ImageError> {
    img.save(path)
}

/// Down-scale `img` so its longer side is at most `max_side`, keeping the
/// aspect ratio. Smaller images are returned unchanged.
pub fn preview(img: &RgbImage, max_side: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    if max_side == 0 || width.max(height) <= max_side {
        return img.clone();
    }
    let scale = max_side as f64 / width.max(height) as f64;
    let new_w = ((width as f64 * scale).round() as u32).max(1);
    let new_h = ((height as f64 * scale).round() as u32).max(1);
    image::imageops::resize(img, new_w, new_h, FilterType::Lanczos3)
}

/// Summary statistics for a symbol's modules.
#[derive(Debug, Clone, Copy)]
pub struct GridStats {
    /// Count of dark modules.
    pub dark_modules: usize,
    /// Total modules in the symbol.
    pub total_modules: usize,
    /// Ratio of dark modules to total modules.
    pub dark_ratio: f64,
}

/// Compute dark module stats for a symbol.
pub fn grid_stats(symbol: &Symbol) -> GridStats {
    let dark = symbol.grid().count_dark();
    let total = symbol.size() * symbol.size();
    let ratio = if total == 0 {
        0.0
    } else {
        dark as f64 / total as f64
    };
    GridStats {
        dark_modules: dark,
        total_modules: total,
        dark_ratio: ratio,
    }
}

/// Capacity of one version at one error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityRow {
    /// Symbol version.
    pub version: Version,
    /// Data codewords after error correction.
    pub data_codewords: usize,
    /// Maximum digits in a single numeric segment.
    pub numeric: usize,
    /// Maximum characters in a single alphanumeric segment.
    pub alphanumeric: usize,
    /// Maximum bytes in a single byte segment.
    pub bytes: usize,
}

/// Per-version capacity table for `ec_level`, versions 1 to 40.
pub fn capacity_rows(ec_level: ECLevel) -> Vec<CapacityRow> {
    Version::MIN
        .up_to_max()
        .map(|version| {
            let codewords = data_codewords(version, ec_level);
            CapacityRow {
                version,
                data_codewords: codewords,
                numeric: max_chars(Mode::Numeric, version, codewords * 8),
                alphanumeric: max_chars(Mode::Alphanumeric, version, codewords * 8),
                bytes: max_chars(Mode::Byte, version, codewords * 8),
            }
        })
        .collect()
}

/// Longest single-segment payload of `mode` that fits in `capacity_bits`
fn max_chars(mode: Mode, version: Version, capacity_bits: usize) -> usize {
    let header = 4 + mode.char_count_bits(version);
    let Some(available) = capacity_bits.checked_sub(header) else {
        return 0;
    };
    let max_count = (1usize << mode.char_count_bits(version)) - 1;
    // payload_bits grows monotonically, so walk down from the upper bound
    let mut chars = match mode {
        Mode::Numeric => available * 3 / 10 + 1,
        Mode::Alphanumeric => available * 2 / 11 + 1,
        Mode::Byte => available / 8,
    }
    .min(max_count);
    while chars > 0 && mode.payload_bits(chars) > available {
        chars -= 1;
    }
    chars
}
