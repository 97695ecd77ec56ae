//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use cabinet_download::Url;
use cabinet_hash::HashAlgorithm;
use clap::{Parser, Subcommand};

/// CLI arguments for cabinet.
#[derive(Debug, Parser)]
#[command(
    name = "cabinet",
    about = "Filesystem and network convenience helpers",
    version
)]
pub struct Args {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of the discovered one.
    #[arg(long = "config", short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Disable progress bars (useful for CI environments).
    #[arg(long = "no-progress", global = true)]
    pub no_progress: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report whether a path exists and whether it is a file or directory.
    Probe {
        /// Path to probe.
        path: PathBuf,
    },

    /// Copy a file or a directory tree into a destination directory.
    Copy {
        /// Source file or directory.
        source: PathBuf,

        /// Destination directory.
        destination: PathBuf,

        /// Only copy files whose name ends with this suffix (case-sensitive).
        #[arg(long)]
        suffix: Option<String>,

        /// Replace files that already exist in the destination.
        #[arg(long)]
        overwrite: bool,

        /// Never replace existing files (overrides config).
        #[arg(long = "no-overwrite", conflicts_with = "overwrite")]
        no_overwrite: bool,
    },

    /// Download a URL to a local file.
    Download {
        /// URL to fetch.
        url: Url,

        /// Destination file path.
        destination: PathBuf,

        /// Overall timeout in seconds.
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// Print the hex digest of one or more files.
    Hash {
        /// Files to hash.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Hash algorithm (md5, sha1, sha256, sha512).
        #[arg(long, short = 'a')]
        algorithm: Option<HashAlgorithm>,
    },

    /// Replace the first line containing a substring.
    ReplaceLine {
        /// File to edit.
        path: PathBuf,

        /// Substring identifying the line to replace.
        #[arg(value_name = "MATCH")]
        matching: String,

        /// The new line.
        replacement: String,

        /// Line ending: `lf`, `crlf`, `cr`, or a literal using `\n`/`\r` escapes.
        #[arg(long, value_parser = parse_line_ending)]
        line_ending: Option<String>,

        /// Refuse files larger than this many bytes.
        #[arg(long)]
        max_size: Option<u64>,
    },
}

impl Args {
    /// Determine if we should show progress bars.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}

/// Resolve the overwrite policy from flags and the configured default.
#[must_use]
pub const fn resolve_overwrite(overwrite: bool, no_overwrite: bool, configured: bool) -> bool {
    overwrite || (!no_overwrite && configured)
}

/// Parse a line ending given by name or as an escaped literal.
fn parse_line_ending(value: &str) -> Result<String, String> {
    let ending = match value.to_ascii_lowercase().as_str() {
        "lf" => "\n".to_string(),
        "crlf" => "\r\n".to_string(),
        "cr" => "\r".to_string(),
        _ => value.replace("\\r", "\r").replace("\\n", "\n"),
    };

    if ending.is_empty() {
        Err("line ending must not be empty".to_string())
    } else {
        Ok(ending)
    }
}
