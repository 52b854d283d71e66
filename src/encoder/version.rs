//! Version selection and version information (versions 7-40)

use super::bch;
use super::segment::{Segment, total_bits};
use super::tables::data_capacity_bits;
use crate::error::{EncodingError, Result};
use crate::models::{ECLevel, Module, ModuleGrid, Version};

/// Pick the smallest version in `[min, 40]` whose data capacity holds the
/// segments. With `fit == false` the version is `min` exactly.
///
/// The terminator is not counted: it is truncated when fewer than 4 bits
/// remain, and byte padding never crosses a codeword boundary.
pub fn select_version(
    segments: &[Segment],
    ec_level: ECLevel,
    min: Option<Version>,
    fit: bool,
) -> Result<Version> {
    let start = min.unwrap_or(Version::MIN);

    if !fit {
        let capacity_bits = data_capacity_bits(start, ec_level);
        return match total_bits(segments, start) {
            Some(bits) if bits <= capacity_bits => Ok(start),
            bits => Err(EncodingError::ForcedVersionTooSmall {
                version: start,
                bits: bits.unwrap_or(usize::MAX),
                capacity_bits,
            }),
        };
    }

    for version in start.up_to_max() {
        if let Some(bits) = total_bits(segments, version) {
            if bits <= data_capacity_bits(version, ec_level) {
                return Ok(version);
            }
        }
    }

    Err(EncodingError::DataTooLong {
        ec_level,
        bits: total_bits(segments, Version::MAX).unwrap_or(usize::MAX),
        max_bits: data_capacity_bits(Version::MAX, ec_level),
    })
}

/// Write both 18-bit version information blocks (no-op below version 7)
///
/// Bit i of the BCH word lands at (size-11 + i%3, i/3) in the top-right
/// block and at the transposed position in the bottom-left block.
pub fn write_version_info(grid: &mut ModuleGrid, version: Version) {
    if !version.has_version_info() {
        return;
    }
    let bits = bch::version_bits(version);
    let size = grid.size();
    for i in 0..18 {
        let dark = (bits >> i) & 1 == 1;
        let a = size - 11 + i % 3;
        let b = i / 3;
        grid.set(a, b, Module::Function(dark));
        grid.set(b, a, Module::Function(dark));
    }
}

/// Read the top-right version block back (for verification)
pub fn read_version_info(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    (0..18).fold(0u32, |acc, i| {
        acc | ((grid.is_dark(size - 11 + i % 3, i / 3) as u32) << i)
    })
}
