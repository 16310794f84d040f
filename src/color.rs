use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when parsing a `#RRGGBB` color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("Color must have exactly 6 hex digits: {0:?}")]
    InvalidLength(String),

    #[error("Invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

/// An opaque RGB color as stored in a grid cell.
///
/// The textual form is `#RRGGBB`. Parsing accepts either case, formatting
/// always produces uppercase, which is also the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Background color; a white cell counts as empty.
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn is_background(self) -> bool {
        self == Self::WHITE
    }

    /// Uppercase `#RRGGBB` form
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn from_color32(color: egui::Color32) -> Self {
        Self::rgb(color.r(), color.g(), color.b())
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 0xFF])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_owned()))?;
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(s.to_owned()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_owned()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(s.to_owned()))?;
        Ok(Self::from_u32(value))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// The fixed palette offered next to the canvas.
pub const PALETTE: [Color; 18] = [
    Color::from_u32(0x000000),
    Color::from_u32(0xFFFFFF),
    Color::from_u32(0xFF0000),
    Color::from_u32(0x00FF00),
    Color::from_u32(0x0000FF),
    Color::from_u32(0xFFFF00),
    Color::from_u32(0xFF00FF),
    Color::from_u32(0x00FFFF),
    Color::from_u32(0xFFA500),
    Color::from_u32(0x800080),
    Color::from_u32(0xFFC0CB),
    Color::from_u32(0xA52A2A),
    Color::from_u32(0x808080),
    Color::from_u32(0x008000),
    Color::from_u32(0x000080),
    Color::from_u32(0x800000),
    Color::from_u32(0x008080),
    Color::from_u32(0xC0C0C0),
];

/// Normalizes text typed into the custom color field.
///
/// A missing leading `#` is added and the result is cut to `#RRGGBB` length.
/// The returned text is what the field should display; it is not
/// necessarily a valid color yet.
pub fn normalize_hex_input(raw: &str) -> String {
    let mut value = if raw.starts_with('#') {
        raw.to_owned()
    } else {
        format!("#{raw}")
    };
    if value.chars().count() > 7 {
        value = value.chars().take(7).collect();
    }
    value
}

/// Parses custom color text, returning a color only for a complete
/// `#RRGGBB` value.
pub fn parse_hex_input(raw: &str) -> Option<Color> {
    normalize_hex_input(raw).parse().ok()
}
