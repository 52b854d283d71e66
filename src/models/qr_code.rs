//! Symbol parameters and the finished symbol

use super::ModuleGrid;
use crate::error::{EncodingError, Result};
use std::fmt;
use std::str::FromStr;

/// QR code version (1-40 for Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version (21x21 modules)
    pub const MIN: Version = Version(1);
    /// Largest version (177x177 modules)
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1..=40
    pub fn new(number: u16) -> Result<Self> {
        if (1..=40).contains(&number) {
            Ok(Version(number as u8))
        } else {
            Err(EncodingError::InvalidVersion(number))
        }
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Versions 7 and up carry two version information blocks
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }

    /// Iterate versions from `self` up to and including 40
    pub fn up_to_max(self) -> impl Iterator<Item = Version> {
        (self.0..=Self::MAX.0).map(Version)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels from weakest to strongest
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Two-bit field stored in the format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Get error correction level from its format information bits
    pub fn from_format_bits(bits: u8) -> Option<Self> {
        match bits & 0x03 {
            0b01 => Some(ECLevel::L),
            0b00 => Some(ECLevel::M),
            0b11 => Some(ECLevel::Q),
            0b10 => Some(ECLevel::H),
            _ => None,
        }
    }

    /// Approximate share of the symbol that can be restored
    pub fn recovery_percent(&self) -> u8 {
        match self {
            ECLevel::L => 7,
            ECLevel::M => 15,
            ECLevel::Q => 25,
            ECLevel::H => 30,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ECLevel::L => "Low",
            ECLevel::M => "Medium",
            ECLevel::Q => "Quartile",
            ECLevel::H => "High",
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} - {}% ({})",
            self,
            self.recovery_percent(),
            self.label()
        )
    }
}

impl FromStr for ECLevel {
    type Err = EncodingError;

    /// Accepts `L`/`M`/`Q`/`H` (any case), the level names, or the
    /// `"H - 30% (High)"` labels produced by `Display`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let head = trimmed
            .split(|c: char| c.is_whitespace() || c == '-')
            .next()
            .unwrap_or("");
        match head.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(ECLevel::L),
            "m" | "medium" => Ok(ECLevel::M),
            "q" | "quartile" => Ok(ECLevel::Q),
            "h" | "high" => Ok(ECLevel::H),
            _ => Err(EncodingError::InvalidEcLevel(trimmed.to_string())),
        }
    }
}

impl TryFrom<u8> for ECLevel {
    type Error = EncodingError;

    /// Ordinal form: 0=L, 1=M, 2=Q, 3=H
    fn try_from(value: u8) -> Result<Self> {
        ECLevel::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| EncodingError::InvalidEcLevel(value.to_string()))
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Every pattern in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Three-bit id written into the format information
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Check if module at (i, j) should be masked, with i = row and j = column
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Finished QR code symbol
///
/// Emitted once masking and format information are complete; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    grid: ModuleGrid,
}

impl Symbol {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
        grid: ModuleGrid,
    ) -> Self {
        debug_assert_eq!(grid.size(), version.size());
        Self {
            version,
            ec_level,
            mask,
            grid,
        }
    }

    /// QR code version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mask pattern applied to the data modules
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Module grid, including structure tags
    pub fn grid(&self) -> &ModuleGrid {
        &self.grid
    }

    /// True if the module at column `x`, row `y` is dark; false outside the symbol
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.grid.is_dark(x, y)
    }

    /// Row-major dark/light rows (true = dark)
    pub fn to_bool_rows(&self) -> Vec<Vec<bool>> {
        (0..self.size())
            .map(|y| (0..self.size()).map(|x| self.is_dark(x, y)).collect())
            .collect()
    }
}
