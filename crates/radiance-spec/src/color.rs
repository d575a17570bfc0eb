//! Color literals and HSL/RGB conversion.
//!
//! Accepts the three textual forms users pass to the configuration builder:
//! `#RRGGBB` (or `#RGB`), `rgb(r, g, b)` and `hsl(h, s%, l%)`. Commas or
//! spaces may separate channels, and percent signs on `hsl` are optional.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;

const HEX_PATTERN: &str = r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";
const RGB_PATTERN: &str =
    r"(?i)^rgb\(\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*\)$";
const HSL_PATTERN: &str = r"(?i)^hsl\(\s*(\d+(?:\.\d+)?)\s*[,\s]\s*(\d+(?:\.\d+)?)%?\s*[,\s]\s*(\d+(?:\.\d+)?)%?\s*\)$";

static HEX_REGEX: OnceLock<Regex> = OnceLock::new();
static RGB_REGEX: OnceLock<Regex> = OnceLock::new();
static HSL_REGEX: OnceLock<Regex> = OnceLock::new();

fn hex_regex() -> &'static Regex {
    HEX_REGEX.get_or_init(|| Regex::new(HEX_PATTERN).expect("invalid regex pattern"))
}

fn rgb_regex() -> &'static Regex {
    RGB_REGEX.get_or_init(|| Regex::new(RGB_PATTERN).expect("invalid regex pattern"))
}

fn hsl_regex() -> &'static Regex {
    HSL_REGEX.get_or_init(|| Regex::new(HSL_PATTERN).expect("invalid regex pattern"))
}

/// HSL triple: hue in degrees, saturation and lightness in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL triple.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to 8-bit RGB.
    ///
    /// Hue wraps into [0, 360); saturation and lightness are clamped to 0-100.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match hp.floor() as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [
            ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Convert to an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        rgb8_to_hex(self.to_rgb8())
    }
}

/// Formats 8-bit RGB as an uppercase `#RRGGBB` string.
pub fn rgb8_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Converts 8-bit RGB to HSL.
pub fn rgb8_to_hsl(rgb: [u8; 3]) -> Hsl {
    let r = rgb[0] as f64 / 255.0;
    let g = rgb[1] as f64 / 255.0;
    let b = rgb[2] as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta < 1e-10 {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());

    let h = if (r - max).abs() < 1e-10 {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (g - max).abs() < 1e-10 {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new((h * 60.0).rem_euclid(360.0), s * 100.0, l * 100.0)
}

/// A parsed color literal.
///
/// The original form is kept so that an HSL literal reports exactly the hue
/// it was written with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    /// Parsed from a hex or `rgb()` literal.
    Rgb([u8; 3]),
    /// Parsed from an `hsl()` literal.
    Hsl(Hsl),
}

impl ColorValue {
    /// Parses a color literal.
    ///
    /// # Example
    /// ```
    /// use radiance_spec::color::ColorValue;
    ///
    /// let color = ColorValue::parse("hsl(240, 100%, 50%)").unwrap();
    /// assert_eq!(color.to_hex(), "#0000FF");
    /// ```
    pub fn parse(literal: &str) -> Result<Self, ColorParseError> {
        let literal = literal.trim();

        if let Some(caps) = hex_regex().captures(literal) {
            return Ok(ColorValue::Rgb(parse_hex_digits(&caps[1])));
        }

        if let Some(caps) = rgb_regex().captures(literal) {
            let channel = |index: usize, name: &'static str| -> Result<u8, ColorParseError> {
                caps[index]
                    .parse::<u8>()
                    .map_err(|_| ColorParseError::ChannelOutOfRange {
                        channel: name,
                        value: caps[index].to_string(),
                    })
            };
            return Ok(ColorValue::Rgb([
                channel(1, "red")?,
                channel(2, "green")?,
                channel(3, "blue")?,
            ]));
        }

        if let Some(caps) = hsl_regex().captures(literal) {
            let channel = |index: usize, name: &'static str, max: f64| {
                let value: f64 = caps[index].parse().unwrap_or(f64::NAN);
                if (0.0..=max).contains(&value) {
                    Ok(value)
                } else {
                    Err(ColorParseError::ChannelOutOfRange {
                        channel: name,
                        value: caps[index].to_string(),
                    })
                }
            };
            let h = channel(1, "hue", f64::MAX)?;
            let s = channel(2, "saturation", 100.0)?;
            let l = channel(3, "lightness", 100.0)?;
            return Ok(ColorValue::Hsl(Hsl::new(h.rem_euclid(360.0), s, l)));
        }

        Err(ColorParseError::Unrecognized(literal.to_string()))
    }

    /// Returns the color as an HSL triple.
    pub fn to_hsl(&self) -> Hsl {
        match self {
            ColorValue::Rgb(rgb) => rgb8_to_hsl(*rgb),
            ColorValue::Hsl(hsl) => *hsl,
        }
    }

    /// Returns the color as 8-bit RGB.
    pub fn to_rgb8(&self) -> [u8; 3] {
        match self {
            ColorValue::Rgb(rgb) => *rgb,
            ColorValue::Hsl(hsl) => hsl.to_rgb8(),
        }
    }

    /// Returns the canonical uppercase `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        rgb8_to_hex(self.to_rgb8())
    }

    /// Returns the integer part of the hue in degrees.
    pub fn hue_degrees(&self) -> u32 {
        self.to_hsl().h.rem_euclid(360.0) as u32
    }
}

impl std::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for ColorValue {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorValue::parse(s)
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ColorValue::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex_digits(digits: &str) -> [u8; 3] {
    let nibble = |c: u8| (c as char).to_digit(16).unwrap_or(0) as u8;
    let bytes = digits.as_bytes();
    if bytes.len() == 3 {
        [
            nibble(bytes[0]) * 17,
            nibble(bytes[1]) * 17,
            nibble(bytes[2]) * 17,
        ]
    } else {
        [
            nibble(bytes[0]) * 16 + nibble(bytes[1]),
            nibble(bytes[2]) * 16 + nibble(bytes[3]),
            nibble(bytes[4]) * 16 + nibble(bytes[5]),
        ]
    }
}
