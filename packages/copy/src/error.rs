//! Error types for copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Errors that can occur during copy operations.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// A required source path does not exist.
    #[error("Source {} does not exist", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// A path expected to be a directory is not one.
    #[error("Failed to copy directory, {} is not a directory", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A path expected to be a file is a directory.
    #[error("Failed to copy file, {} is a directory", path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// The destination file exists and overwriting was not allowed.
    #[error("File '{file_name}' already exists in destination directory {}", destination_dir.display())]
    AlreadyExists {
        /// Name of the file being copied.
        file_name: String,
        /// The destination directory.
        destination_dir: PathBuf,
    },

    /// Failed to read source directory.
    #[error("Failed to read directory {}: {io_error}", path.display())]
    ReadDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to create target directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to get file metadata.
    #[error("Failed to get metadata for {}: {io_error}", path.display())]
    MetadataError {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to copy file contents.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    FileCopyError {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to apply permission bits to the copied file.
    #[error("Failed to set permissions on {}: {io_error}", path.display())]
    PermissionsError {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to commit the copied file to stable storage.
    #[error("Failed to sync {}: {io_error}", path.display())]
    SyncError {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to move the finished copy into place.
    #[error("Failed to move copied file into {}: {io_error}", path.display())]
    PersistError {
        /// The final destination path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },
}
