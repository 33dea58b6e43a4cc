//! Registry of loadable themes
//!
//! The catalog validates every definition when it is added, so anything that
//! can later be switched to is already known to be complete.

use crate::error::{Result, ThemeError};
use crate::palette::ThemePalette;
use crate::presets::BuiltinTheme;
use crate::theme::ThemeDefinition;
use crate::tokens::ColorToken;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A theme file holds either one definition or a `[[themes]]` array
#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeFile {
    Many { themes: Vec<ThemeDefinition> },
    One(ThemeDefinition),
}

/// Named, validated palettes in registration order
#[derive(Clone, Debug, Default)]
pub struct ThemeCatalog {
    palettes: IndexMap<String, Arc<ThemePalette>>,
}

impl ThemeCatalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding every [`BuiltinTheme`]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for theme in BuiltinTheme::all() {
            // Built-in definitions are covered by tests; a failure here is a bug.
            if let Err(e) = catalog.insert(theme.definition()) {
                tracing::error!("built-in theme {} failed validation: {}", theme.id(), e);
            }
        }
        catalog
    }

    /// Validate and register a definition.
    ///
    /// A definition with the same (case-insensitive) name replaces the
    /// previous one.
    pub fn insert(&mut self, def: ThemeDefinition) -> Result<Arc<ThemePalette>> {
        let palette = Arc::new(ThemePalette::from_definition(&def)?);
        let key = def.name.to_ascii_lowercase();
        if self.palettes.insert(key, palette.clone()).is_some() {
            tracing::debug!("theme {:?} replaced an existing definition", def.name);
        }
        Ok(palette)
    }

    /// Parse TOML theme definitions and register them all.
    ///
    /// Every definition is validated before any is registered, so a bad file
    /// leaves the catalog unchanged. Returns the registered names.
    pub fn load_toml_str(&mut self, content: &str, origin: &str) -> Result<Vec<String>> {
        let file: ThemeFile = toml::from_str(content).map_err(|source| ThemeError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        let defs = match file {
            ThemeFile::Many { themes } => themes,
            ThemeFile::One(def) => vec![def],
        };

        let mut staged = Vec::with_capacity(defs.len());
        for def in defs {
            let palette = ThemePalette::from_definition(&def)?;
            staged.push((def.name.to_ascii_lowercase(), Arc::new(palette)));
        }

        let names = staged.iter().map(|(name, _)| name.clone()).collect();
        for (name, palette) in staged {
            self.palettes.insert(name, palette);
        }
        tracing::debug!("loaded themes {:?} from {}", names, origin);
        Ok(names)
    }

    /// Load a `.toml` theme file, or every `.toml` file in a directory
    /// (sorted by file name).
    pub fn load_path(&mut self, path: &Path) -> Result<Vec<String>> {
        let io_err = |source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path.is_dir() {
            let mut files: Vec<_> = fs::read_dir(path)
                .map_err(io_err)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
                .collect();
            files.sort();

            let mut names = Vec::new();
            for file in files {
                names.extend(self.load_path(&file)?);
            }
            return Ok(names);
        }

        let content = fs::read_to_string(path).map_err(io_err)?;
        self.load_toml_str(&content, &path.display().to_string())
    }

    /// Palette by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<ThemePalette>> {
        self.palettes.get(&name.to_ascii_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.palettes.contains_key(&name.to_ascii_lowercase())
    }

    /// Registered theme names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }

    pub fn palettes(&self) -> impl Iterator<Item = &Arc<ThemePalette>> {
        self.palettes.values()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Union of custom tokens declared by any registered theme
    pub fn custom_tokens(&self) -> BTreeSet<ColorToken> {
        self.palettes
            .values()
            .flat_map(|p| p.custom_tokens())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HARBOR: &str = r##"
name = "Harbor"
mode = "dark"
elevation_step = 0.06

[colors]
primary = "#4c9be8"
secondary = "#4e5d6c"
success = "#5cb85c"
info = "#5bc0de"
warning = "#f0ad4e"
danger = "#d9534f"
light = "#abb6c2"
dark = "#20374c"
bg = "#2b3e50"
fg = "#ffffff"

[custom]
teal = "#20c997"
"##;

    #[test]
    fn test_builtin_catalog_has_every_theme() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.len(), BuiltinTheme::all().len());
        assert!(catalog.contains("COSMO"));
        assert_eq!(catalog.names().next(), Some("cosmo"));
    }

    #[test]
    fn test_load_single_definition() {
        let mut catalog = ThemeCatalog::new();
        let names = catalog.load_toml_str(HARBOR, "harbor.toml").unwrap();
        assert_eq!(names, vec!["harbor".to_string()]);

        let palette = catalog.get("harbor").unwrap();
        assert!(palette.is_dark());
        assert_eq!(palette.elevation_step(), 0.06);
        assert_eq!(
            catalog.custom_tokens().into_iter().collect::<Vec<_>>(),
            vec![ColorToken::Custom("teal".into())]
        );
    }

    #[test]
    fn test_load_array_is_all_or_nothing() {
        let content = r##"
[[themes]]
name = "one"
mode = "light"
colors = { primary = "#111111", secondary = "#222222", success = "#333333", info = "#444444", warning = "#555555", danger = "#666666", light = "#eeeeee", dark = "#111111", background = "#ffffff", foreground = "#000000" }

[[themes]]
name = "two"
mode = "light"
colors = { primary = "#111111" }
"##;
        let mut catalog = ThemeCatalog::new();
        let err = catalog.load_toml_str(content, "pair.toml").unwrap_err();
        assert!(matches!(err, ThemeError::PaletteMissingToken { .. }));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_toml_reports_origin() {
        let mut catalog = ThemeCatalog::new();
        let err = catalog.load_toml_str("name = ", "broken.toml").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
