//! Pixel and text rendering of finished symbols

use crate::config::RenderOptions;
use crate::error::{EncodingError, Result};
use crate::models::{Symbol, Version};
use image::{ImageBuffer, Rgb, RgbImage};

/// Smallest quiet zone scanners are required to handle
pub const MIN_QUIET_ZONE: u32 = 4;

/// Maps a symbol to an RGB pixel buffer
///
/// Each module becomes an exact `module_size` square; the quiet zone is
/// filled with the background color. No scaling or interpolation.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Validate the options.
    ///
    /// A module size of zero is rejected, as is any module size and border
    /// whose version 40 image would overflow the pixel buffer.
    pub fn new(options: RenderOptions) -> Result<Self> {
        if options.module_size == 0 {
            return Err(EncodingError::InvalidModuleSize(options.module_size));
        }
        let too_large = || EncodingError::ImageTooLarge {
            module_size: options.module_size,
            border: options.border,
        };
        let side = checked_side(Version::MAX.size(), &options).ok_or_else(too_large)?;
        (side as usize)
            .checked_mul(side as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or_else(too_large)?;
        Ok(Self { options })
    }

    /// Validated render options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Side length in pixels of the image `render` produces for `symbol`
    pub fn image_side(&self, symbol: &Symbol) -> u32 {
        // bounded by the version 40 check in `new`
        (symbol.size() as u32 + 2 * self.options.border) * self.options.module_size
    }

    /// Paint `symbol` into a square RGB buffer of `image_side` pixels
    pub fn render(&self, symbol: &Symbol) -> RgbImage {
        let RenderOptions {
            module_size,
            border,
            foreground,
            background,
        } = self.options;
        if border < MIN_QUIET_ZONE {
            tracing::warn!(border, "quiet zone narrower than {MIN_QUIET_ZONE} modules");
        }

        let fg: Rgb<u8> = foreground.into();
        let bg: Rgb<u8> = background.into();
        let side = self.image_side(symbol);
        ImageBuffer::from_fn(side, side, |px, py| {
            let (mx, my) = (px / module_size, py / module_size);
            match (mx.checked_sub(border), my.checked_sub(border)) {
                // is_dark is false outside the symbol, covering the far borders
                (Some(x), Some(y)) if symbol.is_dark(x as usize, y as usize) => fg,
                _ => bg,
            }
        })
    }

    /// Terminal preview, two characters per module so cells come out square
    pub fn render_text(symbol: &Symbol, border: usize) -> String {
        let side = symbol.size() + 2 * border;
        let mut out = String::with_capacity(side * (side * 2 * 3 + 1));
        for row in 0..side {
            for col in 0..side {
                let dark = match (col.checked_sub(border), row.checked_sub(border)) {
                    (Some(x), Some(y)) => symbol.is_dark(x, y),
                    _ => false,
                };
                out.push_str(if dark { "██" } else { "  " });
            }
            out.push('\n');
        }
        out
    }
}

/// Pixel side for a symbol of `modules` per side, or `None` on overflow
fn checked_side(modules: usize, options: &RenderOptions) -> Option<u32> {
    let modules = u32::try_from(modules).ok()?;
    options
        .border
        .checked_mul(2)?
        .checked_add(modules)?
        .checked_mul(options.module_size)
}
