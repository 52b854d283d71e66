//! Capacity tables for QR Code Model 2
//!
//! Per (version, level) pair: total codewords, error correction block
//! count and ECC codewords per block. Block sizes derive from these with
//! the standard split: all blocks carry the same number of ECC codewords
//! and the last `total % blocks` blocks carry one extra data codeword.

use crate::models::{ECLevel, Version};

/// Total codewords (data + ECC) per version, index = version - 1
const TOTAL_CODEWORDS: [u16; 40] = [
    26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761,
    2876, 3034, 3196, 3362, 3532, 3706,
];

/// Index: [ec_level][version - 1]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 40]; 4] = [
    [
        7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28, 30,
        30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30, 30,
        30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24, 30,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 40]; 4] = [
    [
        1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12, 13,
        14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23,
        25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35,
        37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Block structure for one (version, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    /// Number of error correction blocks
    pub num_blocks: usize,
    /// ECC codewords appended to every block
    pub ecc_per_block: usize,
    /// Blocks holding `short_data_len` data codewords; the rest hold one more
    pub num_short_blocks: usize,
    /// Data codewords in a short block
    pub short_data_len: usize,
}

impl BlockLayout {
    /// Data codewords carried by block `index`
    pub fn data_len(&self, index: usize) -> usize {
        if index < self.num_short_blocks {
            self.short_data_len
        } else {
            self.short_data_len + 1
        }
    }

    /// Total data codewords across all blocks
    pub fn total_data(&self) -> usize {
        (0..self.num_blocks).map(|i| self.data_len(i)).sum()
    }

    /// Total ECC codewords across all blocks
    pub fn total_ecc(&self) -> usize {
        self.num_blocks * self.ecc_per_block
    }
}

/// Total codewords (data + ECC) the version's grid holds
pub fn total_codewords(version: Version) -> usize {
    TOTAL_CODEWORDS[version.number() as usize - 1] as usize
}

/// Number of error correction blocks
pub fn num_blocks(version: Version, ec_level: ECLevel) -> usize {
    NUM_ERROR_CORRECTION_BLOCKS[ec_level_index(ec_level)][version.number() as usize - 1] as usize
}

/// ECC codewords per block
pub fn ecc_per_block(version: Version, ec_level: ECLevel) -> usize {
    ECC_CODEWORDS_PER_BLOCK[ec_level_index(ec_level)][version.number() as usize - 1] as usize
}

/// Data codewords available for the message
pub fn data_codewords(version: Version, ec_level: ECLevel) -> usize {
    total_codewords(version) - num_blocks(version, ec_level) * ecc_per_block(version, ec_level)
}

/// Data capacity in bits
pub fn data_capacity_bits(version: Version, ec_level: ECLevel) -> usize {
    data_codewords(version, ec_level) * 8
}

/// Block split prescribed for (version, level)
pub fn block_layout(version: Version, ec_level: ECLevel) -> BlockLayout {
    let num_blocks = num_blocks(version, ec_level);
    let ecc_per_block = ecc_per_block(version, ec_level);
    let total = total_codewords(version);
    let short_block_len = total / num_blocks;
    BlockLayout {
        num_blocks,
        ecc_per_block,
        num_short_blocks: num_blocks - total % num_blocks,
        short_data_len: short_block_len - ecc_per_block,
    }
}

fn ec_level_index(ec_level: ECLevel) -> usize {
    match ec_level {
        ECLevel::L => 0,
        ECLevel::M => 1,
        ECLevel::Q => 2,
        ECLevel::H => 3,
    }
}
