//! Fast file counting using jwalk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use crate::walk::has_suffix;

/// Count the files a copy of `path` would write.
///
/// - If path is a file: returns 1 when it matches `suffix`
/// - If path is a directory: returns count of matching non-directory entries recursively
/// - If path doesn't exist: returns 0
///
/// Symbolic links inside a directory are counted like files, since the
/// copiers copy their targets. Uses `jwalk` with sorting disabled for speed.
#[must_use]
pub fn count_files(path: &Path, suffix: Option<&str>) -> u64 {
    let matches =
        |name: &std::ffi::OsStr| suffix.is_none_or(|suffix| has_suffix(name, suffix));

    if path.is_file() {
        return u64::from(path.file_name().is_some_and(matches));
    }

    if !path.is_dir() {
        return 0;
    }

    jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| !e.file_type().is_dir() && matches(e.file_name()))
        .count() as u64
}
