//! Error types for QR code encoding

use crate::encoder::modes::Mode;
use crate::models::{ECLevel, Version};
use thiserror::Error;

/// Failures reported by the encoding pipeline.
///
/// Every variant is detected before a module grid is allocated, so a
/// partially built symbol is never observable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A character cannot be represented in the requested mode or charset
    #[error("Unsupported character {character:?} at position {position} for {mode:?} mode")]
    UnsupportedCharacter {
        /// Offending character (bytes are reported as their Latin-1 char)
        character: char,
        /// Index of the character in the input
        position: usize,
        /// Mode that rejected the character
        mode: Mode,
    },

    /// No version up to 40 can hold the payload at this error correction level
    #[error("Data too long: {bits} bits exceed the {max_bits}-bit capacity of version 40-{ec_level:?}")]
    DataTooLong {
        /// Requested error correction level
        ec_level: ECLevel,
        /// Serialized payload length in bits
        bits: usize,
        /// Largest data capacity available at this level
        max_bits: usize,
    },

    /// Error correction level outside L/M/Q/H
    #[error("Invalid error correction level: {0}")]
    InvalidEcLevel(String),

    /// The caller pinned a version that cannot hold the payload
    #[error("Forced version {version:?} too small: {bits} bits needed, {capacity_bits} available")]
    ForcedVersionTooSmall {
        /// Version requested by the caller
        version: Version,
        /// Serialized payload length in bits for that version
        bits: usize,
        /// Data capacity of that version in bits
        capacity_bits: usize,
    },

    /// Version number outside 1..=40
    #[error("Invalid version: {0} (expected 1-40)")]
    InvalidVersion(u16),

    /// Module size must be a positive number of pixels
    #[error("Invalid module size: {0}")]
    InvalidModuleSize(u32),

    /// Module size and border would produce an image past the addressable size
    #[error("Image too large: module size {module_size} with a {border}-module border")]
    ImageTooLarge {
        /// Requested pixels per module
        module_size: u32,
        /// Requested quiet zone in modules
        border: u32,
    },

    /// Color string could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EncodingError>;
