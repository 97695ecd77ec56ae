//! Progress bar utilities for the CLI.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for long-running commands.
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    /// Create a new progress manager.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a progress bar for a directory copy operation.
    ///
    /// Returns a `ProgressBar` that shows file count progress.
    /// If progress is disabled, returns a hidden progress bar.
    #[must_use]
    pub fn create_file_bar(&self, label: &str, total: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {prefix:<30} [{bar:25.green/dim}] {pos}/{len} files {msg:.dim}")
                .expect("Invalid progress bar template")
                .progress_chars("━━─"),
        );
        pb.set_prefix(label.to_string());
        pb
    }

    /// Create a spinner for an operation of unknown length.
    ///
    /// If progress is disabled, returns a hidden progress bar.
    #[must_use]
    pub fn create_spinner(&self, message: &str) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.green} {msg}")
                .expect("Invalid spinner template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Print a completed operation result line.
    ///
    /// Shows a checkmark for success, bullet for no change.
    pub fn print_result(&self, label: &str, result: &str, is_success: bool) {
        if is_success {
            println!("{} {:<30} {}", "✓".green(), label, result.dimmed());
        } else {
            println!("{} {:<30} {}", "•".dimmed(), label, result.dimmed());
        }
        // Flush to ensure output appears immediately
        let _ = std::io::stdout().flush();
    }

    /// Print a result with file count for directory operations.
    pub fn print_result_with_count(&self, label: &str, result: &str, file_count: u64) {
        println!(
            "{} {:<30} {} ({} files)",
            "✓".green(),
            label,
            result.dimmed(),
            file_count
        );
        let _ = std::io::stdout().flush();
    }
}
