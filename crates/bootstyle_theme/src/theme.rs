//! Theme definitions and light/dark pairing

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Light or dark mode of a theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

/// Serializable description of a theme, as written in TOML theme files.
///
/// ```toml
/// name = "harbor"
/// mode = "dark"
/// elevation_step = 0.05
///
/// [colors]
/// primary = "#4c9be8"
/// background = "#2b3e50"
/// # ...
///
/// [custom]
/// teal = "#20c997"
/// ```
///
/// `bg` and `fg` are accepted as aliases for `background` and `foreground`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub name: String,
    #[serde(alias = "type", alias = "themetype")]
    pub mode: ColorScheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_step: Option<f32>,
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default)]
    pub custom: BTreeMap<String, String>,
}

impl ThemeDefinition {
    /// Default lightness shift per elevation unit
    pub const DEFAULT_ELEVATION_STEP: f32 = 0.04;

    pub fn new(name: impl Into<String>, mode: ColorScheme) -> Self {
        Self {
            name: name.into(),
            mode,
            border: None,
            elevation_step: None,
            colors: BTreeMap::new(),
            custom: BTreeMap::new(),
        }
    }

    /// Set a standard color (builder style)
    pub fn color(mut self, token: &str, hex: impl Into<String>) -> Self {
        self.colors.insert(token.to_string(), hex.into());
        self
    }

    /// Declare a custom color token (builder style)
    pub fn custom_color(mut self, token: &str, hex: impl Into<String>) -> Self {
        self.custom.insert(token.to_ascii_lowercase(), hex.into());
        self
    }

    pub fn border(mut self, hex: impl Into<String>) -> Self {
        self.border = Some(hex.into());
        self
    }

    pub fn elevation_step(mut self, step: f32) -> Self {
        self.elevation_step = Some(step);
        self
    }
}

/// The light/dark pair `toggle` flips between
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePair {
    pub light: String,
    pub dark: String,
}

impl ThemePair {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// Theme name for a scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &str {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self::new("cosmo", "darkly")
    }
}
