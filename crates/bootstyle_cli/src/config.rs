//! Locating and loading bootstyle.toml

use anyhow::{Context, Result};
use bootstyle::EngineConfig;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const CONFIG_FILE: &str = "bootstyle.toml";

/// Load the engine configuration.
///
/// An explicit path must exist. Without one, `bootstyle.toml` in the current
/// directory is used if present, otherwise the defaults.
pub fn load(explicit: Option<&Path>) -> Result<EngineConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file {} does not exist", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let local = PathBuf::from(CONFIG_FILE);
            if !local.is_file() {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(EngineConfig::default());
            }
            local
        }
    };

    let config = EngineConfig::load(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse a `key=value` extra
pub fn parse_extra(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in {raw:?}"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
