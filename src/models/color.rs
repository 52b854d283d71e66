//! Render colors

use crate::error::{EncodingError, Result};
use image::Rgb;
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Default foreground
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Default background
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || EncodingError::InvalidColor(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #abc expands to #aabbcc
            3 => Ok(Self::new(
                channel(&digits[0..1])? * 0x11,
                channel(&digits[1..2])? * 0x11,
                channel(&digits[2..3])? * 0x11,
            )),
            _ => Err(invalid()),
        }
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Complementary color
    pub fn inverted(&self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(rgb: Rgb<u8>) -> Self {
        Self::new(rgb.0[0], rgb.0[1], rgb.0[2])
    }
}

impl FromStr for Color {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#000000"), Ok(Color::BLACK));
        assert_eq!(Color::from_hex("FFFFFF"), Ok(Color::WHITE));
        assert_eq!(Color::from_hex("#f80"), Ok(Color::new(0xff, 0x88, 0x00)));
        assert_eq!(Color::from_hex("#4CAF50").unwrap().to_hex(), "#4caf50");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_rgb_conversion() {
        let rgb: Rgb<u8> = Color::new(1, 2, 3).into();
        assert_eq!(rgb, Rgb([1, 2, 3]));
        assert_eq!(Color::from(rgb), Color::new(1, 2, 3));
        assert_eq!(Color::BLACK.inverted(), Color::WHITE);
    }
}
