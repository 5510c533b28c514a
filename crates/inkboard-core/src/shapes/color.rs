//! Stroke colors and the board palette.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color must start with '#': {0}")]
    MissingHash(String),
    #[error("unsupported color length {len} in {input}")]
    InvalidLength { input: String, len: usize },
    #[error("invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let hex = input
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit(input.to_string()))
        };

        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = byte(&hex[0..1])? * 17;
                let g = byte(&hex[1..2])? * 17;
                let b = byte(&hex[2..3])? * 17;
                Ok(Self::new(r, g, b, 255))
            }
            6 => Ok(Self::new(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                255,
            )),
            8 => Ok(Self::new(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            len => Err(ColorParseError::InvalidLength {
                input: input.to_string(),
                len,
            }),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for SerializableColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for SerializableColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke colors offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palette {
    White,
    Red,
    Yellow,
    Green,
    Blueness,
    Blue,
    Purple,
    Black,
}

impl Palette {
    /// Hex string as shown in the toolbar swatches.
    pub fn hex(&self) -> &'static str {
        match self {
            Palette::White => "#fff",
            Palette::Red => "#f55a6c",
            Palette::Yellow => "#f7c825",
            Palette::Green => "#63d320",
            Palette::Blueness => "#4fe2c2",
            Palette::Blue => "#59b9fe",
            Palette::Purple => "#bd0fe0",
            Palette::Black => "#000",
        }
    }

    pub fn color(&self) -> SerializableColor {
        match self {
            Palette::White => SerializableColor::white(),
            Palette::Red => SerializableColor::new(0xf5, 0x5a, 0x6c, 255),
            Palette::Yellow => SerializableColor::new(0xf7, 0xc8, 0x25, 255),
            Palette::Green => SerializableColor::new(0x63, 0xd3, 0x20, 255),
            Palette::Blueness => SerializableColor::new(0x4f, 0xe2, 0xc2, 255),
            Palette::Blue => SerializableColor::new(0x59, 0xb9, 0xfe, 255),
            Palette::Purple => SerializableColor::new(0xbd, 0x0f, 0xe0, 255),
            Palette::Black => SerializableColor::black(),
        }
    }

    pub fn all() -> &'static [Palette] {
        &[
            Palette::White,
            Palette::Red,
            Palette::Yellow,
            Palette::Green,
            Palette::Blueness,
            Palette::Blue,
            Palette::Purple,
            Palette::Black,
        ]
    }
}

impl From<Palette> for SerializableColor {
    fn from(palette: Palette) -> Self {
        palette.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_hex() {
        let color = SerializableColor::from_hex("#fff").unwrap();
        assert_eq!(color, SerializableColor::white());
    }

    #[test]
    fn test_parse_long_hex() {
        let color: SerializableColor = "#f55a6c".parse().unwrap();
        assert_eq!(color, SerializableColor::new(0xf5, 0x5a, 0x6c, 255));
        assert_eq!(color.to_hex(), "#f55a6c");
    }

    #[test]
    fn test_parse_with_alpha() {
        let color = SerializableColor::from_hex("#00000080").unwrap();
        assert_eq!(color.a, 0x80);
        assert_eq!(color.to_hex(), "#00000080");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            SerializableColor::from_hex("fff"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            SerializableColor::from_hex("#ffff"),
            Err(ColorParseError::InvalidLength { len: 4, .. })
        ));
        assert!(matches!(
            SerializableColor::from_hex("#gg0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_palette_matches_hex() {
        for palette in Palette::all() {
            let parsed = SerializableColor::from_hex(palette.hex()).unwrap();
            assert_eq!(parsed, palette.color(), "{:?}", palette);
        }
    }

    #[test]
    fn test_peniko_conversion() {
        let color = Palette::Blue.color();
        let peniko_color: Color = color.into();
        let back: SerializableColor = peniko_color.into();
        assert_eq!(back, color);
    }
}
