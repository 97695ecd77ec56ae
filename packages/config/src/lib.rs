//! Configuration loading for cabinet.
//!
//! Command defaults (overwrite policy, download timeout, hash algorithm,
//! line ending, size limit) can be set in a TOML file. Flags given on the
//! command line take precedence over anything loaded here.
//!
//! # Example
//!
//! ```rust,ignore
//! use cabinet_config::resolve_config;
//!
//! let loaded = resolve_config(None, &std::env::current_dir()?)?;
//! println!("timeout: {:?}", loaded.config.download.timeout());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod discovery;
mod error;
mod toml_loader;
mod types;

pub use discovery::{LOCAL_CONFIG_NAME, discover_config, user_config_path};
pub use error::ConfigError;
pub use toml_loader::load_toml_config;
pub use types::{
    Config, CopyConfig, DEFAULT_TIMEOUT_SECS, DownloadConfig, HashConfig, LoadedConfig,
    ReplaceConfig,
};

use std::path::Path;

/// Discover and load the configuration, falling back to defaults.
///
/// # Arguments
///
/// * `explicit` - Path given on the command line, if any
/// * `cwd` - Directory searched for a local `cabinet.toml`
///
/// # Errors
///
/// * If the chosen file cannot be read or parsed
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    let Some(path) = discover_config(explicit, cwd) else {
        log::debug!("No config file found, using defaults");
        return Ok(LoadedConfig::default());
    };

    let config = load_toml_config(&path)?;

    Ok(LoadedConfig {
        config,
        config_path: Some(path),
    })
}
