//! Color types and utilities

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Errors produced when parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string is not 3, 6 or 8 hex digits long
    #[error("invalid hex color length: {0:?}")]
    InvalidLength(String),

    /// The string contains a non-hex character
    #[error("invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional)
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let byte = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    *slot = v * 16 + v;
                }
                Ok(Self::from_rgba8(channels[0], channels[1], channels[2], 255))
            }
            6 => Ok(Self::from_rgba8(
                byte(&digits[0..2]),
                byte(&digits[2..4]),
                byte(&digits[4..6]),
                255,
            )),
            8 => Ok(Self::from_rgba8(
                byte(&digits[0..2]),
                byte(&digits[2..4]),
                byte(&digits[4..6]),
                byte(&digits[6..8]),
            )),
            _ => Err(ColorParseError::InvalidLength(input.to_string())),
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to u8 array [r, g, b, a], rounding each channel
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// The `0xRRGGBB` value of this color (alpha dropped)
    pub fn to_hex(&self) -> u32 {
        let [r, g, b, _] = self.to_rgba8();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Snap every channel to the nearest 8-bit value.
    ///
    /// Resolved style colors are always quantized so two resolutions that
    /// differ only by float noise compare equal.
    pub fn quantized(self) -> Self {
        let [r, g, b, a] = self.to_rgba8();
        Self::from_rgba8(r, g, b, a)
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Mix `weight` of `other` into this color
    pub fn mix(self, other: Color, weight: f32) -> Color {
        Color::lerp(&self, &other, weight)
    }

    // ========== HSL ==========

    /// Hue (degrees), saturation and lightness
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f32::EPSILON {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == self.r {
            (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };

        (h * 60.0, s, l)
    }

    /// Build an opaque color from hue (degrees), saturation and lightness
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Color {
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        if s <= f32::EPSILON {
            return Color::rgb(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h.rem_euclid(360.0) / 360.0;

        Color::rgb(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }

    /// HSL lightness in `[0, 1]`
    pub fn lightness(&self) -> f32 {
        self.to_hsl().2
    }

    /// Same hue and saturation with a new lightness (clamped to `[0, 1]`)
    pub fn with_lightness(self, lightness: f32) -> Color {
        let (h, s, _) = self.to_hsl();
        Color::from_hsl(h, s, lightness).with_alpha(self.a)
    }

    /// Shift HSL lightness by `delta`, clamped to the legal gamut
    pub fn shift_lightness(self, delta: f32) -> Color {
        let l = self.lightness();
        self.with_lightness((l + delta).clamp(0.0, 1.0))
    }

    // ========== Contrast ==========

    /// WCAG relative luminance
    pub fn relative_luminance(&self) -> f32 {
        fn channel(c: f32) -> f32 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// WCAG contrast ratio between two colors (order independent)
    pub fn contrast_ratio(&self, other: Color) -> f32 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let lighter = l1.max(l2);
        let darker = l1.min(l2);
        (lighter + 0.05) / (darker + 0.05)
    }
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let c = Color::from_hex(0x2780E3);
        assert_eq!(c.to_hex(), 0x2780E3);
        assert_eq!(c.to_hex_string(), "#2780e3");
        assert_eq!(Color::parse_hex("#2780E3").unwrap(), c);
    }

    #[test]
    fn test_parse_short_and_alpha_forms() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_hex("000").unwrap(), Color::BLACK);

        let translucent = Color::parse_hex("#ff000080").unwrap();
        assert_eq!(translucent.to_rgba8(), [255, 0, 0, 128]);
        assert_eq!(translucent.to_hex_string(), "#ff000080");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Color::parse_hex("#12345"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::parse_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_hsl_round_trip() {
        for hex in [0x2780E3, 0x375A7F, 0x3FB618, 0xFF7518, 0x222222] {
            let c = Color::from_hex(hex);
            let (h, s, l) = c.to_hsl();
            assert_eq!(Color::from_hsl(h, s, l).to_hex(), hex, "hex={hex:06x}");
        }
    }

    #[test]
    fn test_shift_lightness_clamps() {
        assert_eq!(Color::WHITE.shift_lightness(0.5).to_hex(), 0xFFFFFF);
        assert_eq!(Color::BLACK.shift_lightness(-0.5).to_hex(), 0x000000);

        let c = Color::from_hex(0x2780E3);
        assert!(c.shift_lightness(0.1).lightness() > c.lightness());
        assert!(c.shift_lightness(-0.1).lightness() < c.lightness());
    }

    #[test]
    fn test_contrast_ratio() {
        let ratio = Color::BLACK.contrast_ratio(Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);

        let same = Color::from_hex(0x808080);
        assert!((same.contrast_ratio(same) - 1.0).abs() < 0.001);

        let a = Color::from_hex(0x2780E3);
        assert!((a.contrast_ratio(Color::WHITE) - Color::WHITE.contrast_ratio(a)).abs() < 1e-6);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Color::from_hex(0x2780E3);
        assert_eq!(a.mix(Color::WHITE, 0.0).to_hex(), 0x2780E3);
        assert_eq!(a.mix(Color::WHITE, 1.0).to_hex(), 0xFFFFFF);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let c = Color::from_hex(0x375A7F);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#375a7f\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
