//! QR code encoding modules
//!
//! This module contains all the logic for turning input into a symbol:
//! - Segmentation and data mode encoding (numeric, alphanumeric, byte)
//! - Version selection against the capacity tables
//! - Error correction (Reed-Solomon, BCH)
//! - Matrix construction, codeword placement and masking

/// BCH codes for format and version info
pub mod bch;
/// Big-endian bit accumulator
pub mod bit_buffer;
/// Zig-zag codeword placement
pub mod bitstream;
/// Padding, block split, ECC and interleaving
pub mod blocks;
/// Format information placement (mask pattern, EC level)
pub mod format;
/// Function pattern builder (finder/timing/alignment/format/version)
pub mod function_mask;
/// Mask application and penalty scoring
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// Input segmentation
pub mod segment;
/// QR capacity tables (ECC codewords/blocks)
pub mod tables;
/// Version selection and version information (versions 7-40)
pub mod version;
