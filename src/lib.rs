//! QR Forge - QR code encoding and rendering library
//!
//! Turns text or bytes into a QR Code Model 2 symbol (versions 1-40, error
//! correction L/M/Q/H) and renders it to an RGB pixel buffer. The pipeline
//! is stateless per call, so symbols can be generated in parallel freely.
//!
//! ```no_run
//! use qr_forge::{EncodeOptions, ECLevel, encode_text};
//!
//! let options = EncodeOptions::default().with_ec_level(ECLevel::M);
//! let img = encode_text("HELLO WORLD", &options).unwrap();
//! img.save("hello.png").unwrap();
//! ```

#![deny(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding and rendering options
pub mod config;
/// QR code encoding modules (segmentation, error correction, matrix, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Symbol, ModuleGrid, Version, etc.)
pub mod models;
/// Symbol to pixel/text rendering
pub mod render;
/// Helpers for binaries: saving, previews, statistics, capacity listing
pub mod tools;

pub use config::{Charset, EncodeOptions, RenderOptions, SegmentMode};
pub use encoder::modes::Mode;
pub use error::{EncodingError, Result};
pub use models::{Color, ECLevel, MaskPattern, Module, ModuleGrid, Symbol, Version};
pub use render::Renderer;

use encoder::qr_encoder::QrEncoder;
use encoder::segment::text_to_bytes;
use image::RgbImage;
use rayon::prelude::*;

/// Encode bytes into a rendered QR code image
///
/// # Arguments
/// * `data` - Payload bytes
/// * `options` - Error correction level, version constraints and rendering
///
/// # Returns
/// RGB image of side `(symbol size + 2 * border) * module_size`
pub fn encode(data: &[u8], options: &EncodeOptions) -> Result<RgbImage> {
    // Validate rendering before any symbol work
    let renderer = Renderer::new(options.render)?;
    let symbol = encode_symbol(data, options)?;
    Ok(renderer.render(&symbol))
}

/// Encode text, converted to bytes with `options.charset`
pub fn encode_text(text: &str, options: &EncodeOptions) -> Result<RgbImage> {
    let bytes = text_to_bytes(text, options.charset)?;
    encode(&bytes, options)
}

/// Encode bytes into a logical symbol without rendering it
pub fn encode_symbol(data: &[u8], options: &EncodeOptions) -> Result<Symbol> {
    QrEncoder::encode(data, options)
}

/// Encode many payloads in parallel
///
/// Results are returned in input order; one failing payload does not
/// affect the others.
pub fn encode_batch(payloads: &[&[u8]], options: &EncodeOptions) -> Vec<Result<RgbImage>> {
    payloads
        .par_iter()
        .map(|data| encode(data, options))
        .collect()
}

/// Encoder with a fixed set of options
#[derive(Debug, Clone)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create an encoder, validating the rendering options up front
    pub fn new(options: EncodeOptions) -> Result<Self> {
        Renderer::new(options.render)?;
        Ok(Self { options })
    }

    /// Options used for every call
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode bytes into an image
    pub fn encode(&self, data: &[u8]) -> Result<RgbImage> {
        encode(data, &self.options)
    }

    /// Encode text into an image
    pub fn encode_text(&self, text: &str) -> Result<RgbImage> {
        encode_text(text, &self.options)
    }

    /// Encode bytes into a symbol
    pub fn symbol(&self, data: &[u8]) -> Result<Symbol> {
        encode_symbol(data, &self.options)
    }

    /// Encode many payloads in parallel
    pub fn encode_batch(&self, payloads: &[&[u8]]) -> Vec<Result<RgbImage>> {
        encode_batch(payloads, &self.options)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            options: EncodeOptions::default(),
        }
    }
}
