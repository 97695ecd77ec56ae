//! TOML configuration file loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::Config;

/// Load a TOML configuration file.
///
/// Missing keys and tables fall back to their defaults.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as TOML
/// * If a value is out of range
pub fn load_toml_config(path: &Path) -> Result<Config, ConfigError> {
    log::debug!("Loading TOML config from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    if config.download.timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: "download.timeoutSecs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.replace.line_ending.is_empty() {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: "replace.lineEnding",
            message: "must not be empty".to_string(),
        });
    }

    log::debug!("Loaded config: {config:?}");

    Ok(config)
}
