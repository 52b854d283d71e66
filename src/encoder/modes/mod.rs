//! QR data mode encoders
//!
//! This module contains encoders for the supported QR data modes:
//! - Numeric: digits packed three per 10 bits
//! - Alphanumeric: 45-character alphabet packed two per 11 bits
//! - Byte: one octet per 8 bits

/// Alphanumeric packing
pub mod alphanumeric;
/// Byte packing
pub mod byte;
/// Numeric packing
pub mod numeric;

use super::bit_buffer::BitBuffer;
use crate::models::Version;

/// Data mode of a segment, ordered from narrowest to widest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Digits 0-9
    Numeric,
    /// 0-9, A-Z, space and $%*+-./:
    Alphanumeric,
    /// Arbitrary octets
    Byte,
}

impl Mode {
    /// Four-bit mode indicator
    pub fn indicator(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character count indicator for `version`
    pub fn char_count_bits(&self, version: Version) -> usize {
        let range = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            Mode::Numeric => [10, 12, 14][range],
            Mode::Alphanumeric => [9, 11, 13][range],
            Mode::Byte => [8, 16, 16][range],
        }
    }

    /// True if `byte` can be carried by this mode
    pub fn admits(&self, byte: u8) -> bool {
        match self {
            Mode::Numeric => byte.is_ascii_digit(),
            Mode::Alphanumeric => alphanumeric::char_value(byte).is_some(),
            Mode::Byte => true,
        }
    }

    /// Narrowest mode that carries `byte`
    pub fn narrowest_for(byte: u8) -> Mode {
        if Mode::Numeric.admits(byte) {
            Mode::Numeric
        } else if Mode::Alphanumeric.admits(byte) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    /// Payload length in bits for `count` characters
    pub fn payload_bits(&self, count: usize) -> usize {
        match self {
            Mode::Numeric => numeric::payload_bits(count),
            Mode::Alphanumeric => alphanumeric::payload_bits(count),
            Mode::Byte => count * 8,
        }
    }

    /// Append the payload for `data`; every byte must be admitted by the mode
    pub(crate) fn encode_payload(&self, data: &[u8], out: &mut BitBuffer) {
        match self {
            Mode::Numeric => numeric::NumericEncoder::encode(data, out),
            Mode::Alphanumeric => alphanumeric::AlphanumericEncoder::encode(data, out),
            Mode::Byte => byte::ByteEncoder::encode(data, out),
        }
    }
}
