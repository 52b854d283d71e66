//! Segmentation of input bytes into mode-tagged runs
//!
//! Mixed input is split the way common encoders do it: long digit runs
//! become Numeric, long alphanumeric runs become Alphanumeric and the rest
//! is Byte. Short narrow runs are absorbed into the surrounding wider
//! segment, since every segment header costs 4 + count-indicator bits.

use super::bit_buffer::BitBuffer;
use super::modes::Mode;
use crate::config::{Charset, SegmentMode, min_segment_run};
use crate::error::{EncodingError, Result};
use crate::models::Version;

/// A run of input encoded in a single mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    char_count: usize,
    data: BitBuffer,
}

impl Segment {
    /// Build a segment, checking every byte against the mode
    pub fn new(mode: Mode, bytes: &[u8]) -> Result<Self> {
        if let Some(position) = bytes.iter().position(|&b| !mode.admits(b)) {
            return Err(EncodingError::UnsupportedCharacter {
                character: bytes[position] as char,
                position,
                mode,
            });
        }
        let mut data = BitBuffer::with_capacity(mode.payload_bits(bytes.len()));
        mode.encode_payload(bytes, &mut data);
        Ok(Self {
            mode,
            char_count: bytes.len(),
            data,
        })
    }

    /// Data mode of this segment
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Characters counted by the header (bytes in byte mode)
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Encoded payload without header
    pub fn data(&self) -> &BitBuffer {
        &self.data
    }

    /// Header plus payload length at `version`, or `None` if the character
    /// count overflows the count indicator
    pub fn bit_len(&self, version: Version) -> Option<usize> {
        let count_bits = self.mode.char_count_bits(version);
        if self.char_count >= 1 << count_bits {
            return None;
        }
        Some(4 + count_bits + self.data.len())
    }

    /// Append mode indicator, character count and payload
    pub fn write_to(&self, version: Version, out: &mut BitBuffer) {
        out.append_bits(self.mode.indicator(), 4);
        out.append_bits(self.char_count as u32, self.mode.char_count_bits(version));
        out.extend(&self.data);
    }
}

/// Total header plus payload bits of `segments` at `version`
pub fn total_bits(segments: &[Segment], version: Version) -> Option<usize> {
    segments
        .iter()
        .try_fold(0usize, |acc, seg| Some(acc + seg.bit_len(version)?))
}

/// Convert text to bytes under `charset`
pub fn text_to_bytes(text: &str, charset: Charset) -> Result<Vec<u8>> {
    match charset {
        Charset::Utf8 => Ok(text.as_bytes().to_vec()),
        Charset::Latin1 => text
            .chars()
            .enumerate()
            .map(|(position, character)| {
                u8::try_from(u32::from(character)).map_err(|_| {
                    EncodingError::UnsupportedCharacter {
                        character,
                        position,
                        mode: Mode::Byte,
                    }
                })
            })
            .collect(),
    }
}

/// Split `data` into segments according to `mode`
pub fn make_segments(data: &[u8], mode: SegmentMode) -> Result<Vec<Segment>> {
    match mode {
        SegmentMode::Fixed(mode) => Ok(vec![Segment::new(mode, data)?]),
        SegmentMode::Auto => auto_segments(data, min_segment_run()),
    }
}

/// Automatic segmentation with an explicit run threshold
pub fn auto_segments(data: &[u8], min_run: usize) -> Result<Vec<Segment>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    if data.len() <= min_run {
        let mode = data
            .iter()
            .map(|&b| Mode::narrowest_for(b))
            .max()
            .unwrap_or(Mode::Byte);
        return Ok(vec![Segment::new(mode, data)?]);
    }

    let mut segments = Vec::new();
    for (is_numeric, chunk) in split_runs(data, Mode::Numeric, min_run) {
        if is_numeric {
            segments.push(Segment::new(Mode::Numeric, chunk)?);
            continue;
        }
        for (is_alpha, sub_chunk) in split_runs(chunk, Mode::Alphanumeric, min_run) {
            let mode = if is_alpha {
                Mode::Alphanumeric
            } else {
                Mode::Byte
            };
            segments.push(Segment::new(mode, sub_chunk)?);
        }
    }
    Ok(segments)
}

/// Split into alternating chunks: runs of at least `min_run` bytes that
/// `mode` admits (tagged true) and everything in between (tagged false)
fn split_runs(data: &[u8], mode: Mode, min_run: usize) -> Vec<(bool, &[u8])> {
    let mut chunks = Vec::new();
    let mut chunk_start = 0;
    let mut i = 0;
    while i < data.len() {
        if !mode.admits(data[i]) {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < data.len() && mode.admits(data[i]) {
            i += 1;
        }
        if i - run_start >= min_run {
            if run_start > chunk_start {
                chunks.push((false, &data[chunk_start..run_start]));
            }
            chunks.push((true, &data[run_start..i]));
            chunk_start = i;
        }
    }
    if chunk_start < data.len() {
        chunks.push((false, &data[chunk_start..]));
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes(segments: &[Segment]) -> Vec<(Mode, usize)> {
        segments.iter().map(|s| (s.mode(), s.char_count())).collect()
    }

    #[test]
    fn test_short_input_single_segment() {
        let segments = auto_segments(b"HELLO WORLD", 20).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Alphanumeric, 11)]);

        let segments = auto_segments(b"0123456789", 20).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Numeric, 10)]);

        let segments = auto_segments(b"https://github.com", 20).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Byte, 18)]);
    }

    #[test]
    fn test_mixed_input_runs() {
        let data = b"order 12345678 for ITEM-ABCDEF";
        let segments = auto_segments(data, 6).unwrap();
        assert_eq!(
            modes(&segments),
            vec![
                (Mode::Byte, 6),
                (Mode::Numeric, 8),
                // the space before ITEM is alphanumeric too
                (Mode::Byte, 4),
                (Mode::Alphanumeric, 12),
            ]
        );
        let total: usize = segments.iter().map(|s| s.char_count()).sum();
        assert_eq!(total, data.len());
    }

    #[test]
    fn test_short_runs_absorbed() {
        let segments = auto_segments(b"abc123def456ghi789jkl", 4).unwrap();
        assert_eq!(modes(&segments), vec![(Mode::Byte, 21)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(auto_segments(b"", 20).unwrap().is_empty());
    }

    #[test]
    fn test_fixed_mode_rejects() {
        let err = make_segments(b"12a4", SegmentMode::Fixed(Mode::Numeric)).unwrap_err();
        assert_eq!(
            err,
            EncodingError::UnsupportedCharacter {
                character: 'a',
                position: 2,
                mode: Mode::Numeric
            }
        );
        assert!(make_segments(b"12a4", SegmentMode::Fixed(Mode::Byte)).is_ok());
    }

    #[test]
    fn test_bit_len() {
        let v1 = Version::MIN;
        let seg = Segment::new(Mode::Alphanumeric, b"HELLO WORLD").unwrap();
        assert_eq!(seg.bit_len(v1), Some(4 + 9 + 61));

        let mut out = BitBuffer::new();
        seg.write_to(v1, &mut out);
        assert_eq!(out.len(), 74);
        assert_eq!(out.to_bytes()[..2], [0b0010_0000, 0b0101_1011]);
    }

    #[test]
    fn test_count_overflow() {
        let seg = Segment::new(Mode::Byte, &[0u8; 256]).unwrap();
        assert_eq!(seg.bit_len(Version::new(9).unwrap()), None);
        assert_eq!(seg.bit_len(Version::new(10).unwrap()), Some(4 + 16 + 2048));
    }

    #[test]
    fn test_latin1() {
        assert_eq!(text_to_bytes("caf\u{e9}", Charset::Latin1).unwrap(), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(text_to_bytes("caf\u{e9}", Charset::Utf8).unwrap().len(), 5);
        let err = text_to_bytes("a\u{20ac}", Charset::Latin1).unwrap_err();
        assert_eq!(
            err,
            EncodingError::UnsupportedCharacter {
                character: '\u{20ac}',
                position: 1,
                mode: Mode::Byte
            }
        );
    }
}
