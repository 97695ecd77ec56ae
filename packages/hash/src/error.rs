//! Error types for file hashing.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while hashing a file.
#[derive(Debug, Error)]
pub enum HashError {
    /// Failed to open or read the file.
    #[error("Failed to read {} for hashing: {source}", path.display())]
    ReadError {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Unknown hash algorithm name.
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
