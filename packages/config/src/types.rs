//! Configuration types for cabinet.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::time::Duration;

use cabinet_hash::HashAlgorithm;
use serde::{Deserialize, Serialize};

/// Default download timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Defaults for copy commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CopyConfig {
    /// Replace existing destination files.
    pub overwrite: bool,
}

/// Defaults for downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadConfig {
    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DownloadConfig {
    /// The timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Defaults for hashing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HashConfig {
    /// Algorithm used when none is given on the command line.
    pub algorithm: HashAlgorithm,
}

/// Defaults for line replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplaceConfig {
    /// Separator used to split files into lines.
    pub line_ending: String,
    /// Refuse files larger than this many bytes.
    pub max_file_size: Option<u64>,
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            line_ending: "\n".to_string(),
            max_file_size: None,
        }
    }
}

/// Cabinet configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Copy defaults.
    pub copy: CopyConfig,
    /// Download defaults.
    pub download: DownloadConfig,
    /// Hash defaults.
    pub hash: HashConfig,
    /// Line replacement defaults.
    pub replace: ReplaceConfig,
}

/// A resolved configuration with its origin.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: Config,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
}
