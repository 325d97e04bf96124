//! Color types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// RGBA Color (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    fn from_f32([r, g, b, a]: [f32; 4]) -> Self {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(channel(r), channel(g), channel(b), channel(a))
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Error parsing a hex color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color: {0:?}")]
pub struct ColorParseError(pub String);

/// Color, serialized as a hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub Rgba);

impl Color {
    pub const TRANSPARENT: Self = Self(Rgba::TRANSPARENT);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgba::rgb(r, g, b))
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(Rgba::new(r, g, b, a))
    }

    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`; the `#` is optional
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        let invalid = || ColorParseError(s.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let short = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
        let long = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);

        let rgba = match digits.len() {
            3 => (short(0), short(1), short(2), Ok(255)),
            4 => (short(0), short(1), short(2), short(3)),
            6 => (long(0), long(2), long(4), Ok(255)),
            8 => (long(0), long(2), long(4), long(6)),
            _ => return Err(invalid()),
        };

        match rgba {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::rgba(r, g, b, a)),
            _ => Err(invalid()),
        }
    }

    pub fn with_alpha(&self, a: u8) -> Self {
        let mut color = self.0;
        color.a = a;
        Self(color)
    }

    pub fn alpha(&self) -> u8 {
        self.0.a
    }

    /// Composites `self` over `base` ("source over" alpha blending)
    pub fn over(&self, base: Color) -> Self {
        let [tr, tg, tb, ta] = self.0.to_f32();
        let [br, bg, bb, ba] = base.0.to_f32();

        let alpha = ta + ba * (1.0 - ta);
        if alpha <= f32::EPSILON {
            return Self::TRANSPARENT;
        }

        let mix = |top: f32, bottom: f32| (top * ta + bottom * ba * (1.0 - ta)) / alpha;
        Self(Rgba::from_f32([mix(tr, br), mix(tg, bg), mix(tb, bb), alpha]))
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self(rgba)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0.to_hex()
    }
}
