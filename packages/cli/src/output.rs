//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use cabinet_probe::PathKind;
use colored::Colorize;

/// Print the outcome of a probe.
pub fn print_probe(path: &Path, kind: PathKind) {
    let label = kind.to_string();
    let label = match kind {
        PathKind::Absent => label.red(),
        PathKind::File | PathKind::Directory => label.green(),
        PathKind::Indeterminate => label.yellow(),
    };
    println!("{} {}", path.display().to_string().cyan(), label);
}

/// Print a digest in the familiar `<digest>  <path>` layout.
pub fn print_digest(digest: &str, path: &Path) {
    println!("{}  {}", digest, path.display());
}

/// Print the location a config was loaded from.
pub fn print_config_source(path: &Path) {
    println!("{} {}", "Config:".dimmed(), path.display().to_string().yellow());
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
