//! Encoding and rendering options
//!
//! Defaults follow the calling application (level H, 10-pixel modules,
//! 4-module quiet zone, black on white). Module size, border and the
//! segmentation run threshold can be overridden process-wide through
//! `QR_MODULE_SIZE`, `QR_BORDER` and `QR_MIN_SEGMENT_RUN`.

use crate::encoder::modes::Mode;
use crate::models::{Color, ECLevel, MaskPattern, Version};
use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static DEFAULT_MODULE_SIZE: OnceLock<u32> = OnceLock::new();

pub(crate) fn default_module_size() -> u32 {
    *DEFAULT_MODULE_SIZE.get_or_init(|| parse_env_u32("QR_MODULE_SIZE", 10).max(1))
}

static DEFAULT_BORDER: OnceLock<u32> = OnceLock::new();

pub(crate) fn default_border() -> u32 {
    *DEFAULT_BORDER.get_or_init(|| parse_env_u32("QR_BORDER", 4))
}

static MIN_SEGMENT_RUN: OnceLock<usize> = OnceLock::new();

/// Shortest digit/alphanumeric run worth its own segment in mixed input
pub(crate) fn min_segment_run() -> usize {
    *MIN_SEGMENT_RUN.get_or_init(|| parse_env_usize("QR_MIN_SEGMENT_RUN", 20).clamp(1, 1024))
}

/// How input is split into segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentMode {
    /// Pick modes per run of characters
    #[default]
    Auto,
    /// Encode everything as one segment in the given mode
    Fixed(Mode),
}

/// Character set used to turn text into bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8 bytes, passed through unchanged
    #[default]
    Utf8,
    /// ISO-8859-1: one byte per char, chars above U+00FF are rejected
    Latin1,
}

/// Pixel rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module side
    pub module_size: u32,
    /// Quiet zone width in modules (4 or more for reliable scanning)
    pub border: u32,
    /// Color of dark modules
    pub foreground: Color,
    /// Color of light modules and the quiet zone
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_size: default_module_size(),
            border: default_border(),
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

/// Full set of parameters for one encode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Smallest version to consider (or the exact version when `fit` is false)
    pub version: Option<Version>,
    /// Grow past `version` when the data does not fit
    pub fit: bool,
    /// Use this mask instead of the lowest-penalty one
    pub mask: Option<MaskPattern>,
    /// How the input is split into segments
    pub segment_mode: SegmentMode,
    /// Text to bytes conversion used by `encode_text`
    pub charset: Charset,
    /// Pixel output settings
    pub render: RenderOptions,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::H,
            version: None,
            fit: true,
            mask: None,
            segment_mode: SegmentMode::Auto,
            charset: Charset::Utf8,
            render: RenderOptions::default(),
        }
    }
}

impl EncodeOptions {
    /// Same as `default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error correction level
    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Start the version search at `version`
    pub fn with_min_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self.fit = true;
        self
    }

    /// Use exactly `version`, failing if the data does not fit
    pub fn with_exact_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self.fit = false;
        self
    }

    /// Force a mask pattern
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Choose automatic or single-mode segmentation
    pub fn with_segment_mode(mut self, segment_mode: SegmentMode) -> Self {
        self.segment_mode = segment_mode;
        self
    }

    /// Choose the text encoding for `encode_text`
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Pixels per module side
    pub fn with_module_size(mut self, module_size: u32) -> Self {
        self.render.module_size = module_size;
        self
    }

    /// Quiet zone width in modules
    pub fn with_border(mut self, border: u32) -> Self {
        self.render.border = border;
        self
    }

    /// Dark and light module colors
    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.render.foreground = foreground;
        self.render.background = background;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EncodeOptions::default();
        assert_eq!(options.ec_level, ECLevel::H);
        assert!(options.fit);
        assert_eq!(options.version, None);
        assert_eq!(options.render.foreground, Color::BLACK);
        assert_eq!(options.render.background, Color::WHITE);
        assert!(options.render.module_size >= 1);
    }

    #[test]
    fn test_builder() {
        let v5 = Version::new(5).unwrap();
        let options = EncodeOptions::new()
            .with_ec_level(ECLevel::L)
            .with_exact_version(v5)
            .with_module_size(3)
            .with_border(0)
            .with_colors(Color::WHITE, Color::BLACK);
        assert_eq!(options.version, Some(v5));
        assert!(!options.fit);
        assert_eq!(options.render.module_size, 3);
        assert_eq!(options.render.border, 0);
        assert_eq!(options.render.foreground, Color::WHITE);

        let options = options.with_min_version(v5);
        assert!(options.fit);
    }
}
