//! Alphanumeric mode encoder (Mode 0010)
//! Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bit_buffer::BitBuffer;

const ALPHANUMERIC_TABLE: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Index of `byte` in the 45-character alphabet
pub fn char_value(byte: u8) -> Option<u32> {
    ALPHANUMERIC_TABLE
        .iter()
        .position(|&c| c == byte)
        .map(|i| i as u32)
}

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Append packed characters; every byte must be in the alphabet
    pub fn encode(data: &[u8], out: &mut BitBuffer) {
        for pair in data.chunks(2) {
            let values: Vec<u32> = pair.iter().filter_map(|&b| char_value(b)).collect();
            debug_assert_eq!(values.len(), pair.len(), "non-alphanumeric byte in segment");
            match values[..] {
                [first, second] => out.append_bits(first * 45 + second, 11),
                [single] => out.append_bits(single, 6),
                _ => {}
            }
        }
    }
}

/// Bits needed for `count` characters
pub fn payload_bits(count: usize) -> usize {
    count / 2 * 11 + (count % 2) * 6
}
