//! Configuration file discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_NAME: &str = "cabinet.toml";

/// Location of the per-user configuration file, if the platform has one.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cabinet").join("config.toml"))
}

/// Find the configuration file to load.
///
/// An explicit path always wins, even if it does not exist (loading it will
/// then fail). Otherwise `cabinet.toml` in `cwd` is used, then the per-user
/// file. Returns `None` when no file is found.
#[must_use]
pub fn discover_config(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = cwd.join(LOCAL_CONFIG_NAME);
    if local.is_file() {
        log::debug!("Found local config {}", local.display());
        return Some(local);
    }

    let user = user_config_path().filter(|path| path.is_file());
    if let Some(path) = &user {
        log::debug!("Found user config {}", path.display());
    }
    user
}
