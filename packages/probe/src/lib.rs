//! Existence and kind probes for filesystem paths.
//!
//! Every probe stats the path afresh; nothing is cached, so two probes of the
//! same path may disagree if the filesystem changes in between.
//!
//! A path whose metadata cannot be read for any reason other than "not found"
//! is reported as [`PathKind::Indeterminate`] and still counts as existing.
//!
//! # Example
//!
//! ```rust,ignore
//! use cabinet_probe::{PathKind, probe};
//!
//! match probe(path) {
//!     PathKind::Absent => println!("nothing there"),
//!     kind => println!("{kind}"),
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What a probe observed at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    Absent,
    /// A regular file (or anything that is not a directory).
    File,
    /// A directory.
    Directory,
    /// Metadata could not be read, but the path was not reported missing.
    Indeterminate,
}

impl PathKind {
    /// Whether something is (or may be) present at the path.
    #[must_use]
    pub const fn exists(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

/// Probe a path, following symbolic links.
#[must_use]
pub fn probe(path: &Path) -> PathKind {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => PathKind::Directory,
        Ok(_) => PathKind::File,
        Err(e) if e.kind() == ErrorKind::NotFound => PathKind::Absent,
        Err(e) => {
            log::debug!("Could not stat {}: {e}", path.display());
            PathKind::Indeterminate
        }
    }
}

/// Check if a file or directory exists.
#[must_use]
pub fn exists(path: &Path) -> bool {
    probe(path).exists()
}

/// Check if a file exists.
///
/// Returns `false` for directories. An unreadable path counts as a file.
#[must_use]
pub fn file_exists(path: &Path) -> bool {
    matches!(probe(path), PathKind::File | PathKind::Indeterminate)
}

/// Check if a directory exists.
///
/// Returns `false` for files. An unreadable path counts as a directory.
#[must_use]
pub fn directory_exists(path: &Path) -> bool {
    matches!(probe(path), PathKind::Directory | PathKind::Indeterminate)
}
