//! Codeword construction: padding, block split, ECC and interleaving

use super::bit_buffer::BitBuffer;
use super::reed_solomon::ReedSolomonEncoder;
use super::segment::Segment;
use super::tables::{BlockLayout, block_layout, data_capacity_bits, total_codewords};
use crate::models::{ECLevel, Version};

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Data and ECC codewords of one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodewordBlock {
    /// Data codewords
    pub data: Vec<u8>,
    /// Reed-Solomon remainder for `data`
    pub ecc: Vec<u8>,
}

/// Serialize segments into exactly `data_codewords(version, ec_level)` bytes:
/// terminator (up to 4 zero bits), zero bits to a byte boundary, then
/// alternating 0xEC/0x11 pad bytes.
///
/// The caller guarantees the segments fit (see `version::select_version`).
pub fn build_data_codewords(segments: &[Segment], version: Version, ec_level: ECLevel) -> Vec<u8> {
    let capacity = data_capacity_bits(version, ec_level);
    let mut buffer = BitBuffer::with_capacity(capacity);
    for segment in segments {
        segment.write_to(version, &mut buffer);
    }
    debug_assert!(buffer.len() <= capacity, "segments exceed version capacity");

    let terminator = (capacity - buffer.len()).min(4);
    buffer.append_bits(0, terminator);
    let pad = (8 - buffer.len() % 8) % 8;
    buffer.append_bits(0, pad);

    let mut codewords = buffer.to_bytes();
    let mut pads = PAD_BYTES.iter().cycle();
    while codewords.len() < capacity / 8 {
        codewords.extend(pads.next());
    }
    codewords
}

/// Split data codewords into blocks and compute each block's ECC
pub fn split_blocks(data: &[u8], layout: &BlockLayout) -> Vec<CodewordBlock> {
    debug_assert_eq!(data.len(), layout.total_data());
    let encoder = ReedSolomonEncoder::new(layout.ecc_per_block);
    let mut blocks = Vec::with_capacity(layout.num_blocks);
    let mut offset = 0;
    for i in 0..layout.num_blocks {
        let len = layout.data_len(i);
        let block_data = data[offset..offset + len].to_vec();
        offset += len;
        let ecc = encoder.encode(&block_data);
        blocks.push(CodewordBlock {
            data: block_data,
            ecc,
        });
    }
    blocks
}

/// Column-wise interleave: codeword 0 of every block, then codeword 1, ...
/// (all data codewords first, then all ECC codewords)
pub fn interleave(blocks: &[CodewordBlock]) -> Vec<u8> {
    let total: usize = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();
    let mut result = Vec::with_capacity(total);

    let max_data = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    for i in 0..max_data {
        // short blocks simply have no codeword at the last index
        result.extend(blocks.iter().filter_map(|b| b.data.get(i)));
    }
    let max_ecc = blocks.iter().map(|b| b.ecc.len()).max().unwrap_or(0);
    for i in 0..max_ecc {
        result.extend(blocks.iter().filter_map(|b| b.ecc.get(i)));
    }
    result
}

/// Full codeword sequence to place into the grid
pub fn assemble_codewords(segments: &[Segment], version: Version, ec_level: ECLevel) -> Vec<u8> {
    let data = build_data_codewords(segments, version, ec_level);
    let layout = block_layout(version, ec_level);
    let blocks = split_blocks(&data, &layout);
    let codewords = interleave(&blocks);
    debug_assert_eq!(codewords.len(), total_codewords(version));
    codewords
}
