//! Validated, immutable theme palettes
//!
//! A [`ThemePalette`] is built once from a [`ThemeDefinition`] and then only
//! shared (as `Arc`). Shade ramps for every token are computed at load time so
//! `Shade(n)` lookups never do color math.

use crate::error::{Result, ThemeError};
use crate::theme::{ColorScheme, ThemeDefinition};
use crate::tokens::{ColorToken, ShadeRamp};
use bootstyle_core::Color;
use rustc_hash::FxHashMap;

// Border color when a theme does not declare one: foreground mixed into background.
const DERIVED_BORDER_WEIGHT: f32 = 0.2;

/// Concrete colors for one theme
#[derive(Clone, Debug)]
pub struct ThemePalette {
    name: String,
    scheme: ColorScheme,
    base_colors: FxHashMap<ColorToken, Color>,
    ramps: FxHashMap<ColorToken, ShadeRamp>,
    border: Color,
    elevation_step: f32,
}

impl ThemePalette {
    /// Validate a definition and precompute its shade ramps.
    ///
    /// Fails with [`ThemeError::PaletteMissingToken`] if any standard token is
    /// absent and [`ThemeError::InvalidColor`] for malformed hex values.
    pub fn from_definition(def: &ThemeDefinition) -> Result<Self> {
        let parse = |key: &str, value: &str| {
            Color::parse_hex(value)
                .map(Color::quantized)
                .map_err(|source| ThemeError::InvalidColor {
                    theme: def.name.clone(),
                    key: key.to_string(),
                    source,
                })
        };

        let mut base_colors = FxHashMap::default();
        for (key, value) in &def.colors {
            let token = match key.to_ascii_lowercase().as_str() {
                "bg" => ColorToken::Background,
                "fg" => ColorToken::Foreground,
                other => match ColorToken::standard(other) {
                    Some(token) => token,
                    None => {
                        tracing::debug!(
                            "theme {:?}: ignoring non-token color key {:?}",
                            def.name,
                            key
                        );
                        continue;
                    }
                },
            };
            base_colors.insert(token, parse(key, value)?);
        }

        for token in ColorToken::STANDARD {
            if !base_colors.contains_key(&token) {
                return Err(ThemeError::PaletteMissingToken {
                    theme: def.name.clone(),
                    token,
                });
            }
        }

        for (key, value) in &def.custom {
            let token = ColorToken::from_name(key);
            if !token.is_custom() {
                // A custom entry shadowing a standard token is treated as an override.
                tracing::debug!("theme {:?}: custom key {:?} is a standard token", def.name, key);
            }
            base_colors.insert(token, parse(key, value)?);
        }

        let elevation_step = def
            .elevation_step
            .unwrap_or(ThemeDefinition::DEFAULT_ELEVATION_STEP);
        if !(elevation_step > 0.0 && elevation_step <= 1.0) {
            return Err(ThemeError::InvalidElevationStep {
                theme: def.name.clone(),
                value: elevation_step,
            });
        }

        let background = base_colors[&ColorToken::Background];
        let foreground = base_colors[&ColorToken::Foreground];
        let border = match &def.border {
            Some(hex) => parse("border", hex)?,
            None => background.mix(foreground, DERIVED_BORDER_WEIGHT).quantized(),
        };

        let ramps = base_colors
            .iter()
            .map(|(token, color)| (token.clone(), ShadeRamp::generate(*color)))
            .collect();

        Ok(Self {
            name: def.name.clone(),
            scheme: def.mode,
            base_colors,
            ramps,
            border,
            elevation_step,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    /// Base color for a token, if the theme defines it
    pub fn base(&self, token: &ColorToken) -> Option<Color> {
        self.base_colors.get(token).copied()
    }

    /// Base color for a token, failing with `PaletteMissingToken`
    pub fn color(&self, token: &ColorToken) -> Result<Color> {
        self.base(token)
            .ok_or_else(|| ThemeError::PaletteMissingToken {
                theme: self.name.clone(),
                token: token.clone(),
            })
    }

    /// Shade ramp for a token
    pub fn ramp(&self, token: &ColorToken) -> Option<&ShadeRamp> {
        self.ramps.get(token)
    }

    pub fn contains(&self, token: &ColorToken) -> bool {
        self.base_colors.contains_key(token)
    }

    /// Check that every token in `required` is defined
    pub fn validate(&self, required: &[ColorToken]) -> Result<()> {
        match required.iter().find(|t| !self.contains(t)) {
            Some(token) => Err(ThemeError::PaletteMissingToken {
                theme: self.name.clone(),
                token: token.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Custom tokens declared by this theme, sorted
    pub fn custom_tokens(&self) -> Vec<ColorToken> {
        let mut tokens: Vec<ColorToken> = self
            .base_colors
            .keys()
            .filter(|t| t.is_custom())
            .cloned()
            .collect();
        tokens.sort();
        tokens
    }

    pub fn background(&self) -> Color {
        self.base_colors[&ColorToken::Background]
    }

    pub fn foreground(&self) -> Color {
        self.base_colors[&ColorToken::Foreground]
    }

    pub fn border(&self) -> Color {
        self.border
    }

    /// Lightness shift for one elevation unit
    pub fn elevation_step(&self) -> f32 {
        self.elevation_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::BuiltinTheme;

    #[test]
    fn test_builtin_palettes_validate() {
        for theme in BuiltinTheme::all() {
            let palette = ThemePalette::from_definition(&theme.definition())
                .unwrap_or_else(|e| panic!("{theme:?} failed: {e}"));
            assert_eq!(palette.scheme(), theme.scheme());
            for token in ColorToken::STANDARD {
                assert!(palette.ramp(&token).is_some(), "{theme:?} missing ramp {token}");
            }
        }
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let mut def = BuiltinTheme::Cosmo.definition();
        def.colors.remove("info");
        let err = ThemePalette::from_definition(&def).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::PaletteMissingToken { token: ColorToken::Info, .. }
        ));
    }

    #[test]
    fn test_invalid_color_is_fatal() {
        let def = BuiltinTheme::Cosmo.definition().color("danger", "#nothex");
        let err = ThemePalette::from_definition(&def).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { ref key, .. } if key == "danger"));
    }

    #[test]
    fn test_aliases_and_custom_tokens() {
        let mut def = BuiltinTheme::Cosmo.definition();
        let bg = def.colors.remove("background").unwrap();
        def.colors.insert("bg".to_string(), bg);
        let def = def.custom_color("Teal", "#20c997");

        let palette = ThemePalette::from_definition(&def).unwrap();
        assert_eq!(palette.background().to_hex(), 0xFFFFFF);
        assert_eq!(palette.custom_tokens(), vec![ColorToken::Custom("teal".into())]);
        assert!(palette
            .validate(&[ColorToken::Primary, ColorToken::Custom("teal".into())])
            .is_ok());
        assert!(palette
            .validate(&[ColorToken::Custom("coral".into())])
            .is_err());
    }

    #[test]
    fn test_elevation_step_bounds() {
        let def = BuiltinTheme::Darkly.definition().elevation_step(0.0);
        assert!(matches!(
            ThemePalette::from_definition(&def),
            Err(ThemeError::InvalidElevationStep { .. })
        ));
    }
}
