//! Progress reporting for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Progress information for a copy operation.
///
/// Reported once after every file that lands in the destination.
#[derive(Debug, Clone)]
pub struct CopyProgress {
    /// Number of files copied so far.
    pub files_copied: u64,
    /// Number of bytes copied so far.
    pub bytes_copied: u64,
    /// Source path of the file that was just copied.
    pub current_file: PathBuf,
}

impl CopyProgress {
    /// Create a new progress report.
    #[must_use]
    pub fn new(files_copied: u64, bytes_copied: u64, current_file: &Path) -> Self {
        Self {
            files_copied,
            bytes_copied,
            current_file: current_file.to_path_buf(),
        }
    }
}
