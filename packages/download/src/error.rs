//! Error types for downloads.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while downloading a file.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The request could not be completed (DNS, connect, TLS, timeout).
    #[error("Request failed: {source}")]
    RequestError {
        /// The requested URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: Box<ureq::Transport>,
    },

    /// The connection failed while the response body was being read.
    #[error("Failed to read response body from {url}: {source}")]
    BodyError {
        /// The requested URL.
        url: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The server answered with an error status.
    #[error("Request to {url} failed with HTTP status {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Failed to create or write the destination file.
    #[error("Failed to write download to {}: {source}", path.display())]
    WriteError {
        /// The destination file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
