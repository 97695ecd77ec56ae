//! Streaming file content hashing.
//!
//! File bytes are streamed through any [`digest::Digest`] implementation and
//! the result is returned as a lowercase hex string.
//!
//! # Example
//!
//! ```rust,ignore
//! use cabinet_hash::file_hash;
//! use sha2::Sha256;
//!
//! let digest = file_hash(Path::new("/path/to/file"), Sha256::default())?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod algorithm;
mod error;

pub use algorithm::HashAlgorithm;
pub use digest::Digest;
pub use error::HashError;

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 64 * 1024;

/// Hash a file's contents with the given hasher.
///
/// # Errors
///
/// * If the file cannot be opened or read
pub fn file_hash<D: Digest>(path: &Path, mut hasher: D) -> Result<String, HashError> {
    log::debug!("Hashing {}", path.display());

    let read_error = |e: std::io::Error| HashError::ReadError {
        path: path.to_path_buf(),
        source: e,
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(read_error(e)),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Hash a file's contents with a named algorithm.
///
/// # Errors
///
/// * If the file cannot be opened or read
pub fn file_hash_with(path: &Path, algorithm: HashAlgorithm) -> Result<String, HashError> {
    match algorithm {
        HashAlgorithm::Md5 => file_hash(path, md5::Md5::new()),
        HashAlgorithm::Sha1 => file_hash(path, sha1::Sha1::new()),
        HashAlgorithm::Sha256 => file_hash(path, sha2::Sha256::new()),
        HashAlgorithm::Sha512 => file_hash(path, sha2::Sha512::new()),
    }
}
