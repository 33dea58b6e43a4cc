//! Color tokens for theming

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Semantic color token keys.
///
/// The ten standard tokens are required in every theme. `Custom` tokens are
/// declared by individual themes and are only usable while every theme the
/// application switches to declares them too.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ColorToken {
    // Intent colors
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Danger,
    Light,
    Dark,

    // Surface colors
    Background,
    Foreground,

    /// Theme-declared token, always lowercase
    Custom(String),
}

impl ColorToken {
    /// Tokens every theme must define, in vocabulary order
    pub const STANDARD: [ColorToken; 10] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Success,
        ColorToken::Info,
        ColorToken::Warning,
        ColorToken::Danger,
        ColorToken::Light,
        ColorToken::Dark,
        ColorToken::Background,
        ColorToken::Foreground,
    ];

    /// Color used when a descriptor names no color or an unknown one
    pub const FALLBACK: ColorToken = ColorToken::Primary;

    /// Lowercase token name as written in descriptors
    pub fn name(&self) -> &str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Success => "success",
            ColorToken::Info => "info",
            ColorToken::Warning => "warning",
            ColorToken::Danger => "danger",
            ColorToken::Light => "light",
            ColorToken::Dark => "dark",
            ColorToken::Background => "background",
            ColorToken::Foreground => "foreground",
            ColorToken::Custom(name) => name,
        }
    }

    /// Look up a standard token by name (case-insensitive)
    pub fn standard(name: &str) -> Option<ColorToken> {
        let lower = name.to_ascii_lowercase();
        Self::STANDARD.into_iter().find(|t| t.name() == lower)
    }

    /// Standard token by name, otherwise a custom token with the lowercased name
    pub fn from_name(name: &str) -> ColorToken {
        Self::standard(name).unwrap_or_else(|| ColorToken::Custom(name.to_ascii_lowercase()))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ColorToken::Custom(_))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ColorToken::from_name(&s))
    }
}
