//! Engine configuration (bootstyle.toml)
//!
//! ```toml
//! [theme]
//! light = "flatly"
//! dark = "superhero"
//! initial = "superhero"
//!
//! [themes]
//! paths = ["themes/"]
//! ```
//!
//! Every section is optional. Relative theme paths are resolved against the
//! directory of the config file.

use crate::error::{EngineError, Result};
use bootstyle_theme::{ThemeCatalog, ThemePair};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level engine configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub themes: ThemeSources,
    /// Directory relative theme paths are resolved against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Light/dark pair and startup theme
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_light")]
    pub light: String,
    #[serde(default = "default_dark")]
    pub dark: String,
    /// Defaults to `light`
    #[serde(default)]
    pub initial: Option<String>,
}

fn default_light() -> String {
    ThemePair::default().light
}

fn default_dark() -> String {
    ThemePair::default().dark
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light: default_light(),
            dark: default_dark(),
            initial: None,
        }
    }
}

/// Extra theme files loaded on top of the built-ins
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeSources {
    /// `.toml` files or directories of them
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

impl EngineConfig {
    /// Load from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content, &path.display().to_string())?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| EngineError::ConfigParse {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn pair(&self) -> ThemePair {
        ThemePair::new(&self.theme.light, &self.theme.dark)
    }

    /// Theme active at startup
    pub fn initial_theme(&self) -> &str {
        self.theme.initial.as_deref().unwrap_or(&self.theme.light)
    }

    /// Built-in themes plus everything under `themes.paths`
    pub fn build_catalog(&self) -> Result<ThemeCatalog> {
        let mut catalog = ThemeCatalog::builtin();
        for path in &self.themes.paths {
            let resolved = match &self.base_dir {
                Some(base) if path.is_relative() => base.join(path),
                _ => path.clone(),
            };
            let names = catalog.load_path(&resolved)?;
            tracing::debug!("EngineConfig - loaded {:?} from {}", names, resolved.display());
        }
        Ok(catalog)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
