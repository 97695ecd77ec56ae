//! Recursive, suffix-filtered, overwrite-aware file copying.
//!
//! This crate provides synchronous copy operations:
//!
//! * Single files into a destination directory, keeping permission bits
//! * Whole directory trees, recreating their structure
//! * Only the files of a tree whose names end with a given suffix
//! * Fast file counting for sizing progress displays
//!
//! Files are staged in a temporary file, synced and renamed into place, so
//! an interrupted or failed copy never leaves a truncated destination file.
//! Every walk is fail-fast: the first error aborts the operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use cabinet_copy::{copy_files_with_suffix_and_progress, count_files};
//!
//! let total = count_files(source, Some(".env"));
//!
//! copy_files_with_suffix_and_progress(source, target, ".env", false, |progress| {
//!     println!("{}/{} files copied", progress.files_copied, total);
//! })?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod count;
mod error;
mod progress;
mod walk;

pub use copy::{CopySummary, copy_file, destination_path};
pub use count::count_files;
pub use error::CopyError;
pub use progress::CopyProgress;
pub use walk::{
    copy_directory, copy_directory_with_progress, copy_files_with_suffix,
    copy_files_with_suffix_and_progress, has_suffix,
};
