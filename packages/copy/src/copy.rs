//! Single-file copying.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, File, Permissions};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::CopyError;

/// Totals for a finished copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    /// Number of files copied.
    pub files_copied: u64,
    /// Number of bytes written to destination files.
    pub bytes_copied: u64,
}

impl CopySummary {
    pub(crate) const fn add(&mut self, other: Self) {
        self.files_copied += other.files_copied;
        self.bytes_copied += other.bytes_copied;
    }
}

/// Copy a file into a destination directory.
///
/// The copy keeps the source's file name, so copying `/home/user/junk.txt`
/// into `/tmp/test` produces `/tmp/test/junk.txt`. Missing destination
/// directories are created with the mode of the source file's parent.
///
/// Bytes are streamed into a temporary file next to the destination, the
/// source's permission bits are applied, the data is synced to disk and the
/// temporary is then renamed into place. A failed copy leaves nothing behind.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `destination_dir` - Directory to copy the file into
/// * `overwrite` - Whether an existing destination file may be replaced
///
/// # Errors
///
/// * If the source does not exist or is a directory
/// * If the destination exists and `overwrite` is `false`
/// * If creating directories, copying, setting permissions or syncing fails
pub fn copy_file(
    source: &Path,
    destination_dir: &Path,
    overwrite: bool,
) -> Result<CopySummary, CopyError> {
    log::debug!(
        "Copying file: {} -> {}",
        source.display(),
        destination_dir.display()
    );

    let metadata = source_metadata(source)?;
    if metadata.is_dir() {
        return Err(CopyError::NotAFile {
            path: source.to_path_buf(),
        });
    }

    let file_name = source.file_name().ok_or_else(|| CopyError::NotAFile {
        path: source.to_path_buf(),
    })?;
    let target = destination_dir.join(file_name);
    let already_exists = || CopyError::AlreadyExists {
        file_name: file_name.to_string_lossy().into_owned(),
        destination_dir: destination_dir.to_path_buf(),
    };

    if !overwrite && cabinet_probe::exists(&target) {
        log::debug!("Target already exists");
        return Err(already_exists());
    }

    create_dir_all_like(parent_or_current(source), destination_dir)?;

    let bytes_copied = stage_and_persist(
        source,
        destination_dir,
        &target,
        metadata.permissions(),
        overwrite,
    )
    .map_err(|e| match e {
        StageError::Clobbered => already_exists(),
        StageError::Copy(e) => e,
    })?;

    log::trace!(
        "Copied {} -> {} ({bytes_copied} bytes)",
        source.display(),
        target.display()
    );

    Ok(CopySummary {
        files_copied: 1,
        bytes_copied,
    })
}

enum StageError {
    /// The target appeared while the copy was staged.
    Clobbered,
    Copy(CopyError),
}

impl From<CopyError> for StageError {
    fn from(value: CopyError) -> Self {
        Self::Copy(value)
    }
}

/// Stream `source` into a temporary file in `destination_dir` and rename it to `target`.
fn stage_and_persist(
    source: &Path,
    destination_dir: &Path,
    target: &Path,
    permissions: Permissions,
    overwrite: bool,
) -> Result<u64, StageError> {
    let copy_error = |e: io::Error| CopyError::FileCopyError {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        io_error: e,
    };

    let mut reader = File::open(source).map_err(copy_error)?;
    let mut staged = tempfile::Builder::new()
        .prefix(".cabinet-")
        .tempfile_in(destination_dir)
        .map_err(copy_error)?;

    let bytes_copied = io::copy(&mut reader, staged.as_file_mut()).map_err(copy_error)?;
    drop(reader);

    staged
        .as_file()
        .set_permissions(permissions)
        .map_err(|e| CopyError::PermissionsError {
            path: target.to_path_buf(),
            io_error: e,
        })?;

    staged
        .as_file()
        .sync_all()
        .map_err(|e| CopyError::SyncError {
            path: target.to_path_buf(),
            io_error: e,
        })?;

    let persisted = if overwrite {
        staged.persist(target)
    } else {
        staged.persist_noclobber(target)
    };

    match persisted {
        Ok(_) => Ok(bytes_copied),
        Err(e) if !overwrite && e.error.kind() == io::ErrorKind::AlreadyExists => {
            Err(StageError::Clobbered)
        }
        Err(e) => Err(CopyError::PersistError {
            path: target.to_path_buf(),
            io_error: e.error,
        }
        .into()),
    }
}

/// Read a source path's metadata, mapping "not found" to [`CopyError::NotFound`].
pub(crate) fn source_metadata(path: &Path) -> Result<fs::Metadata, CopyError> {
    fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            CopyError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CopyError::MetadataError {
                path: path.to_path_buf(),
                io_error: e,
            }
        }
    })
}

/// Create `dir` and any missing ancestors using the permission mode of `template`.
pub(crate) fn create_dir_all_like(template: &Path, dir: &Path) -> Result<(), CopyError> {
    let metadata = fs::metadata(template).map_err(|e| CopyError::MetadataError {
        path: template.to_path_buf(),
        io_error: e,
    })?;

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
        builder.mode(metadata.permissions().mode() & 0o7777);
    }
    #[cfg(not(unix))]
    let _ = metadata;

    builder.create(dir).map_err(|e| CopyError::CreateDirError {
        path: dir.to_path_buf(),
        io_error: e,
    })
}

fn parent_or_current(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Path a file named like `source` would get inside `destination_dir`.
#[must_use]
pub fn destination_path(source: &Path, destination_dir: &Path) -> Option<PathBuf> {
    source.file_name().map(|name| destination_dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_copy_file_creates_new() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target_dir = dir.path().join("out");
        fs::create_dir(&target_dir).unwrap();

        fs::write(&source, "hello world").unwrap();

        let summary = copy_file(&source, &target_dir, false).unwrap();

        assert_eq!(
            summary,
            CopySummary {
                files_copied: 1,
                bytes_copied: 11
            }
        );
        assert_eq!(
            fs::read_to_string(target_dir.join("source.txt")).unwrap(),
            "hello world"
        );
        assert_eq!(dir_names(&target_dir), vec!["source.txt"]);
    }

    #[test]
    fn test_copy_file_creates_missing_destination_dirs() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target_dir = dir.path().join("a/b/c");

        fs::write(&source, "nested").unwrap();

        copy_file(&source, &target_dir, false).unwrap();

        assert!(target_dir.is_dir());
        assert_eq!(
            fs::read_to_string(target_dir.join("source.txt")).unwrap(),
            "nested"
        );
    }

    #[test]
    fn test_copy_file_twice_without_overwrite() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target_dir = dir.path().join("out");

        fs::write(&source, "first").unwrap();
        copy_file(&source, &target_dir, false).unwrap();

        fs::write(&source, "second").unwrap();
        let result = copy_file(&source, &target_dir, false);

        match result {
            Err(CopyError::AlreadyExists {
                file_name,
                destination_dir,
            }) => {
                assert_eq!(file_name, "source.txt");
                assert_eq!(destination_dir, target_dir);
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
        assert_eq!(
            fs::read_to_string(target_dir.join("source.txt")).unwrap(),
            "first"
        );
        assert_eq!(dir_names(&target_dir), vec!["source.txt"]);
    }

    #[test]
    fn test_copy_file_overwrite() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target_dir = dir.path().join("out");
        fs::create_dir(&target_dir).unwrap();

        fs::write(&source, "new content").unwrap();
        fs::write(target_dir.join("source.txt"), "old content").unwrap();

        copy_file(&source, &target_dir, true).unwrap();

        assert_eq!(
            fs::read_to_string(target_dir.join("source.txt")).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_copy_file_binary_content() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("blob.bin");
        let target_dir = dir.path().join("out");

        let content: Vec<u8> = (0..=255u8).cycle().take(200_000).collect();
        fs::write(&source, &content).unwrap();

        let summary = copy_file(&source, &target_dir, false).unwrap();

        assert_eq!(summary.bytes_copied, 200_000);
        assert_eq!(fs::read(target_dir.join("blob.bin")).unwrap(), content);
    }

    #[test]
    fn test_copy_file_empty() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("empty");
        let target_dir = dir.path().join("out");

        fs::write(&source, "").unwrap();

        let summary = copy_file(&source, &target_dir, false).unwrap();

        assert_eq!(summary.bytes_copied, 0);
        assert!(target_dir.join("empty").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_file_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let target_dir = dir.path().join("out");

        for mode in [0o640, 0o755, 0o444] {
            let source = dir.path().join(format!("file_{mode:o}"));
            fs::write(&source, "mode").unwrap();
            fs::set_permissions(&source, Permissions::from_mode(mode)).unwrap();

            copy_file(&source, &target_dir, false).unwrap();

            let copied = fs::metadata(target_dir.join(format!("file_{mode:o}"))).unwrap();
            assert_eq!(copied.permissions().mode() & 0o777, mode);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_file_overwrites_read_only_target() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let source = dir.path().join("config");
        let target_dir = dir.path().join("out");
        fs::create_dir(&target_dir).unwrap();

        fs::write(&source, "fresh").unwrap();
        let existing = target_dir.join("config");
        fs::write(&existing, "stale").unwrap();
        fs::set_permissions(&existing, Permissions::from_mode(0o444)).unwrap();

        copy_file(&source, &target_dir, true).unwrap();

        assert_eq!(fs::read_to_string(&existing).unwrap(), "fresh");
    }

    #[test]
    fn test_copy_file_source_not_found() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("nonexistent.txt");
        let target_dir = dir.path().join("out");

        let result = copy_file(&source, &target_dir, false);

        assert!(matches!(result, Err(CopyError::NotFound { path }) if path == source));
        assert!(!target_dir.exists());
    }

    #[test]
    fn test_copy_file_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("subdir");
        fs::create_dir(&source).unwrap();

        let result = copy_file(&source, &dir.path().join("out"), true);

        assert!(matches!(result, Err(CopyError::NotAFile { .. })));
    }

    #[test]
    fn test_destination_path() {
        assert_eq!(
            destination_path(Path::new("/home/user/junk.txt"), Path::new("/tmp/test")),
            Some(PathBuf::from("/tmp/test/junk.txt"))
        );
        assert_eq!(destination_path(Path::new("/"), Path::new("/tmp")), None);
    }
}
