//! Numeric mode encoder (Mode 0001)
//! Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bit_buffer::BitBuffer;

/// Packs decimal digits three at a time
pub struct NumericEncoder;

impl NumericEncoder {
    /// Append packed digits; `digits` must be ASCII 0-9
    pub fn encode(digits: &[u8], out: &mut BitBuffer) {
        for group in digits.chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
            out.append_bits(value, group.len() * 3 + 1);
        }
    }
}

/// Bits needed for `count` digits
pub fn payload_bits(count: usize) -> usize {
    count / 3 * 10
        + match count % 3 {
            0 => 0,
            1 => 4,
            _ => 7,
        }
}
