//! cabinet CLI entry point.
//!
//! Exposes the cabinet helpers (probing, copying, downloading, hashing and
//! line replacement) as subcommands.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod progress;

use std::env;
use std::path::Path;
use std::time::Duration;

use clap::Parser;

use args::{Args, Command, resolve_overwrite};
use cabinet_config::{Config, resolve_config};
use cabinet_copy::{
    copy_directory_with_progress, copy_file, copy_files_with_suffix_and_progress, count_files,
    destination_path, has_suffix,
};
use cabinet_probe::{PathKind, probe};
use progress::ProgressManager;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    let loaded = resolve_config(args.config.as_deref(), &cwd)?;
    match &loaded.config_path {
        Some(path) => {
            log::debug!("Using config {}", path.display());
            if args.verbose {
                output::print_config_source(path);
            }
        }
        None => log::debug!("No config file found, using defaults"),
    }

    let config = loaded.config;
    let progress_mgr = ProgressManager::new(args.should_show_progress());

    match args.command {
        Command::Probe { path } => {
            output::print_probe(&path, probe(&path));
        }
        Command::Copy {
            source,
            destination,
            suffix,
            overwrite,
            no_overwrite,
        } => {
            let overwrite = resolve_overwrite(overwrite, no_overwrite, config.copy.overwrite);
            run_copy(
                &progress_mgr,
                &source,
                &destination,
                suffix.as_deref(),
                overwrite,
            )?;
        }
        Command::Download {
            url,
            destination,
            timeout,
        } => {
            let timeout = timeout.map_or_else(|| config.download.timeout(), Duration::from_secs);
            let spinner = progress_mgr.create_spinner(&format!("Downloading {url}"));
            let result = cabinet_download::download(&url, &destination, timeout);
            spinner.finish_and_clear();

            let bytes = result?;
            progress_mgr.print_result(
                &destination.display().to_string(),
                &format!("downloaded ({bytes} bytes)"),
                true,
            );
        }
        Command::Hash { paths, algorithm } => {
            let algorithm = algorithm.unwrap_or(config.hash.algorithm);
            for path in &paths {
                let digest = cabinet_hash::file_hash_with(path, algorithm)?;
                output::print_digest(&digest, path);
            }
        }
        Command::ReplaceLine {
            path,
            matching,
            replacement,
            line_ending,
            max_size,
        } => {
            run_replace_line(
                &progress_mgr,
                &config,
                &path,
                &matching,
                &replacement,
                line_ending.as_deref(),
                max_size,
            )?;
        }
    }

    Ok(())
}

/// Copy a file or directory, showing a progress bar for directories.
fn run_copy(
    progress_mgr: &ProgressManager,
    source: &Path,
    destination: &Path,
    suffix: Option<&str>,
    overwrite: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let label = source.display().to_string();

    if probe(source) == PathKind::Directory {
        let total = count_files(source, suffix);
        let bar = progress_mgr.create_file_bar(&label, total);
        let on_progress = |p: &cabinet_copy::CopyProgress| {
            bar.set_position(p.files_copied);
            if let Some(name) = p.current_file.file_name() {
                bar.set_message(name.to_string_lossy().into_owned());
            }
        };

        let result = match suffix {
            Some(suffix) => copy_files_with_suffix_and_progress(
                source,
                destination,
                suffix,
                overwrite,
                on_progress,
            ),
            None => copy_directory_with_progress(source, destination, overwrite, on_progress),
        };
        bar.finish_and_clear();

        let summary = result?;
        progress_mgr.print_result_with_count(&label, "copied", summary.files_copied);
        return Ok(());
    }

    if let Some(suffix) = suffix {
        // A single file only qualifies if it carries the suffix.
        let matches = source
            .file_name()
            .is_some_and(|name| has_suffix(name, suffix));
        if !matches {
            progress_mgr.print_result(&label, "skipped (suffix)", false);
            return Ok(());
        }
    }

    copy_file(source, destination, overwrite)?;
    let target = destination_path(source, destination).unwrap_or_else(|| destination.into());
    progress_mgr.print_result(&label, &format!("copied to {}", target.display()), true);

    Ok(())
}

fn run_replace_line(
    progress_mgr: &ProgressManager,
    config: &Config,
    path: &Path,
    matching: &str,
    replacement: &str,
    line_ending: Option<&str>,
    max_size: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let line_ending = line_ending.unwrap_or(config.replace.line_ending.as_str());
    let max_size = max_size.or(config.replace.max_file_size);

    let replaced = cabinet_text::replace_line(path, matching, replacement, line_ending, max_size)?;

    let label = path.display().to_string();
    if replaced {
        progress_mgr.print_result(&label, "replaced", true);
    } else {
        progress_mgr.print_result(&label, "unchanged", false);
    }

    Ok(())
}
