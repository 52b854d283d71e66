//! Encoding pipeline from input bytes to a masked symbol

use crate::config::EncodeOptions;
use crate::encoder::bitstream::place_codewords;
use crate::encoder::blocks::assemble_codewords;
use crate::encoder::function_mask::FunctionPatterns;
use crate::encoder::mask::choose_mask;
use crate::encoder::segment::{Segment, make_segments};
use crate::encoder::version::select_version;
use crate::error::Result;
use crate::models::Symbol;

/// Runs the full pipeline: segments, version, codewords, matrix, mask
pub struct QrEncoder;

impl QrEncoder {
    /// Encode raw bytes into a finished symbol
    pub fn encode(data: &[u8], options: &EncodeOptions) -> Result<Symbol> {
        let segments = make_segments(data, options.segment_mode)?;
        Self::encode_segments(&segments, options)
    }

    /// Encode pre-built segments
    ///
    /// Every failure is reported before a grid is allocated.
    pub fn encode_segments(segments: &[Segment], options: &EncodeOptions) -> Result<Symbol> {
        let ec_level = options.ec_level;
        let version = select_version(segments, ec_level, options.version, options.fit)?;
        tracing::debug!(
            version = version.number(),
            ?ec_level,
            segments = segments.len(),
            "selected version"
        );

        let codewords = assemble_codewords(segments, version, ec_level);
        tracing::debug!(codewords = codewords.len(), "assembled codewords");

        let mut grid = FunctionPatterns::draw(version);
        place_codewords(&mut grid, &codewords);

        let (grid, mask) = choose_mask(&grid, version, ec_level, options.mask);
        Ok(Symbol::new(version, ec_level, mask, grid))
    }
}
