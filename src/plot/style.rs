//! Marker colors and shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Steel blue, the color of the plain NSGA-II plot.
    pub const STEEL_BLUE: Color = Color::rgb(0x46, 0x82, 0xB4);
    /// Pink, the color of the SCH benchmark plot.
    pub const SCH_PINK: Color = Color::rgb(0xC2, 0x18, 0x5B);

    /// Create a color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Self::rgb(0, 0, 0),
            "white" => Self::rgb(255, 255, 255),
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "steelblue" => Self::STEEL_BLUE,
            _ => return None,
        };
        Some(color)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            },
            3 => {
                // #RGB expands each digit: #4AB -> #44AABB
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
            },
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => Self::named(&s.to_ascii_lowercase()),
        };

        parsed.ok_or_else(|| format!("unknown color '{s}', expected #RRGGBB or a color name"))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Glyph used for each plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MarkerShape {
    /// Filled circle (`o`).
    #[default]
    Circle,
    /// Filled square (`s`).
    Square,
    /// Filled upward triangle (`^`).
    Triangle,
    /// Diagonal cross (`x`).
    Cross,
}

impl MarkerShape {
    /// Get shape name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Cross => "cross",
        }
    }
}

impl FromStr for MarkerShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "o" | "circle" => Ok(Self::Circle),
            "s" | "square" => Ok(Self::Square),
            "^" | "triangle" => Ok(Self::Triangle),
            "x" | "cross" => Ok(Self::Cross),
            other => Err(format!(
                "unknown marker '{other}', expected one of: o, s, ^, x"
            )),
        }
    }
}

impl TryFrom<String> for MarkerShape {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MarkerShape> for String {
    fn from(shape: MarkerShape) -> Self {
        shape.name().to_string()
    }
}
