//! Recursive directory copying.
//!
//! Both walkers traverse the source tree depth-first with an explicit work
//! stack, so arbitrarily deep trees cannot exhaust the call stack. Each
//! directory listing is read completely, closed and sorted by name before
//! any of its entries are handled.
//!
//! The first failing entry aborts the whole walk; its error is returned
//! unchanged and later siblings are never visited.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::copy::{CopySummary, copy_file, create_dir_all_like, source_metadata};
use crate::error::CopyError;
use crate::progress::CopyProgress;

/// Which files a walk copies.
#[derive(Debug, Clone, Copy)]
enum EntryFilter<'a> {
    /// Every file, with every directory recreated eagerly.
    All,
    /// Only files whose name ends with the suffix; directories are created
    /// when a matching file is copied into them.
    Suffix(&'a str),
}

impl EntryFilter<'_> {
    fn matches(self, name: &OsStr) -> bool {
        match self {
            Self::All => true,
            Self::Suffix(suffix) => has_suffix(name, suffix),
        }
    }

    const fn creates_directories(self) -> bool {
        matches!(self, Self::All)
    }
}

/// Whether a file name ends with `suffix`.
///
/// Compares raw bytes, so names that are not valid UTF-8 still match on
/// their trailing bytes. The comparison is case-sensitive.
#[must_use]
pub fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// A directory entry captured while listing the source.
#[derive(Debug)]
struct SourceEntry {
    path: PathBuf,
    name: OsString,
    is_dir: bool,
}

/// A directory whose entries are still being copied.
struct Frame {
    entries: std::vec::IntoIter<SourceEntry>,
    destination: PathBuf,
}

/// Recursively copy a directory's contents into a destination directory.
///
/// Given a source of `/home/user1` and a destination of `/tmp/junk`, the
/// contents of `/home/user1` end up directly inside `/tmp/junk`. Every
/// source directory, including empty ones, is recreated.
///
/// # Arguments
///
/// * `source` - Source directory path
/// * `destination` - Destination directory path
/// * `overwrite` - Whether existing destination files may be replaced
///
/// # Errors
///
/// * If the source does not exist or is not a directory
/// * If any entry fails to copy (fail-fast behavior)
pub fn copy_directory(
    source: &Path,
    destination: &Path,
    overwrite: bool,
) -> Result<CopySummary, CopyError> {
    copy_directory_with_progress(source, destination, overwrite, |_| {})
}

/// Recursively copy a directory with a per-file progress callback.
///
/// # Errors
///
/// * If the source does not exist or is not a directory
/// * If any entry fails to copy (fail-fast behavior)
pub fn copy_directory_with_progress<F>(
    source: &Path,
    destination: &Path,
    overwrite: bool,
    on_progress: F,
) -> Result<CopySummary, CopyError>
where
    F: FnMut(&CopyProgress),
{
    log::debug!(
        "Copying directory: {} -> {}",
        source.display(),
        destination.display()
    );

    walk(source, destination, overwrite, EntryFilter::All, on_progress)
}

/// Recursively copy every file whose name ends with `suffix`.
///
/// The match is an exact, case-sensitive tail match on the file name.
/// Subdirectories are always searched, but a destination directory is only
/// created once a matching file is copied into it.
///
/// # Arguments
///
/// * `source` - Source directory path
/// * `destination` - Destination directory path
/// * `suffix` - Required file name suffix
/// * `overwrite` - Whether existing destination files may be replaced
///
/// # Errors
///
/// * If the source does not exist or is not a directory
/// * If any matching file fails to copy (fail-fast behavior)
pub fn copy_files_with_suffix(
    source: &Path,
    destination: &Path,
    suffix: &str,
    overwrite: bool,
) -> Result<CopySummary, CopyError> {
    copy_files_with_suffix_and_progress(source, destination, suffix, overwrite, |_| {})
}

/// Recursively copy files ending with `suffix`, with a per-file progress callback.
///
/// # Errors
///
/// * If the source does not exist or is not a directory
/// * If any matching file fails to copy (fail-fast behavior)
pub fn copy_files_with_suffix_and_progress<F>(
    source: &Path,
    destination: &Path,
    suffix: &str,
    overwrite: bool,
    on_progress: F,
) -> Result<CopySummary, CopyError>
where
    F: FnMut(&CopyProgress),
{
    log::debug!(
        "Copying files ending with {suffix:?}: {} -> {}",
        source.display(),
        destination.display()
    );

    walk(
        source,
        destination,
        overwrite,
        EntryFilter::Suffix(suffix),
        on_progress,
    )
}

fn walk<F>(
    source: &Path,
    destination: &Path,
    overwrite: bool,
    filter: EntryFilter<'_>,
    mut on_progress: F,
) -> Result<CopySummary, CopyError>
where
    F: FnMut(&CopyProgress),
{
    if !source_metadata(source)?.is_dir() {
        return Err(CopyError::NotADirectory {
            path: source.to_path_buf(),
        });
    }

    let root_entries = read_sorted(source)?;
    if filter.creates_directories() {
        create_dir_all_like(source, destination)?;
    }

    let mut summary = CopySummary::default();
    let mut stack = vec![Frame {
        entries: root_entries.into_iter(),
        destination: destination.to_path_buf(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(entry) = frame.entries.next() else {
            stack.pop();
            continue;
        };

        if entry.is_dir {
            let child_destination = frame.destination.join(&entry.name);
            let children = read_sorted(&entry.path)?;
            if filter.creates_directories() {
                create_dir_all_like(&entry.path, &child_destination)?;
            }
            stack.push(Frame {
                entries: children.into_iter(),
                destination: child_destination,
            });
        } else if filter.matches(&entry.name) {
            summary.add(copy_file(&entry.path, &frame.destination, overwrite)?);
            on_progress(&CopyProgress::new(
                summary.files_copied,
                summary.bytes_copied,
                &entry.path,
            ));
        } else {
            log::trace!("Skipping {}", entry.path.display());
        }
    }

    log::debug!(
        "Copied {} files ({} bytes)",
        summary.files_copied,
        summary.bytes_copied
    );

    Ok(summary)
}

/// List a directory's immediate children, sorted by name.
fn read_sorted(dir: &Path) -> Result<Vec<SourceEntry>, CopyError> {
    let read_error = |e: std::io::Error| CopyError::ReadDirError {
        path: dir.to_path_buf(),
        io_error: e,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_error)?
        .map(|entry| {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            Ok(SourceEntry {
                path: entry.path(),
                name: entry.file_name(),
                is_dir,
            })
        })
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_error)?;

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
