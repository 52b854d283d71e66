//! Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bit_buffer::BitBuffer;

/// Raw octets, one per 8 bits
pub struct ByteEncoder;

impl ByteEncoder {
    /// Append `data` unchanged
    pub fn encode(data: &[u8], out: &mut BitBuffer) {
        for &byte in data {
            out.append_bits(byte as u32, 8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_encode() {
        // "HI" in ASCII = 72, 73
        let mut out = BitBuffer::new();
        ByteEncoder::encode(b"HI", &mut out);
        assert_eq!(out.to_bytes(), vec![0x48, 0x49]);
        assert_eq!(out.len(), 16);
    }
}
