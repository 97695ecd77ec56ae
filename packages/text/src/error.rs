//! Error types for line replacement.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while replacing a line.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// The file's size exceeds the specified size.
    #[error("The size of {} ({size} bytes) exceeds the specified size of {max_size} bytes", path.display())]
    SizeExceeded {
        /// The file path.
        path: PathBuf,
        /// Actual file size.
        size: u64,
        /// Allowed maximum.
        max_size: u64,
    },

    /// The line ending used to split the file is empty.
    #[error("Line ending must not be empty")]
    InvalidLineEnding,

    /// Failed to stat or read the file.
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the file back.
    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
