//! Theme error types

use crate::tokens::ColorToken;
use bootstyle_core::ColorParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or switching themes.
///
/// All of these are fail-fast: a theme that produces one of them never
/// becomes active.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// No theme with this name is registered
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// The active theme cannot be redefined
    #[error("theme {0:?} is active and cannot be replaced")]
    ActiveTheme(String),

    /// A theme does not define a color the caller needs
    #[error("theme {theme:?} does not define color token `{token}`")]
    PaletteMissingToken { theme: String, token: ColorToken },

    /// A color value in a theme definition is not valid hex
    #[error("theme {theme:?}: invalid color for `{key}`")]
    InvalidColor {
        theme: String,
        key: String,
        #[source]
        source: ColorParseError,
    },

    /// Elevation step outside `(0, 1]`
    #[error("theme {theme:?}: elevation step {value} must be in (0, 1]")]
    InvalidElevationStep { theme: String, value: f32 },

    /// A theme file is not valid TOML or does not match the schema
    #[error("failed to parse themes from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// A theme file or directory could not be read
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
