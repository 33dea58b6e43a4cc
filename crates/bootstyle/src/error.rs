//! Engine errors

use bootstyle_theme::ThemeError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("failed to read config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}")]
    ConfigParse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}
