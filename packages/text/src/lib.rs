//! In-place line replacement for text files.
//!
//! The whole file is read into memory, split on a caller-chosen line ending,
//! edited and written back. Use `max_size` to refuse files that are too large
//! to load.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;

pub use error::ReplaceError;

use std::fs;
use std::path::Path;

/// Replace the first line containing `matching` with `replacement`.
///
/// Nothing is written when some line already equals `replacement`
/// (ignoring case) or when no line contains `matching`. The file keeps its
/// permission bits.
///
/// Returns whether the file was rewritten.
///
/// # Arguments
///
/// * `path` - File to edit
/// * `matching` - Substring identifying the line to replace
/// * `replacement` - The new line, without a line ending
/// * `line_ending` - Separator used to split and rejoin the file
/// * `max_size` - Refuse files larger than this many bytes
///
/// # Errors
///
/// * If `line_ending` is empty
/// * If the file is larger than `max_size`
/// * If the file cannot be read as UTF-8 or written back
pub fn replace_line(
    path: &Path,
    matching: &str,
    replacement: &str,
    line_ending: &str,
    max_size: Option<u64>,
) -> Result<bool, ReplaceError> {
    log::debug!("Replacing line matching {matching:?} in {}", path.display());

    if line_ending.is_empty() {
        return Err(ReplaceError::InvalidLineEnding);
    }

    let read_error = |e: std::io::Error| ReplaceError::ReadError {
        path: path.to_path_buf(),
        source: e,
    };

    let size = fs::metadata(path).map_err(read_error)?.len();
    if let Some(max_size) = max_size {
        if size > max_size {
            return Err(ReplaceError::SizeExceeded {
                path: path.to_path_buf(),
                size,
                max_size,
            });
        }
    }

    let contents = fs::read_to_string(path).map_err(read_error)?;
    let mut lines: Vec<&str> = contents.split(line_ending).collect();

    if lines.iter().any(|line| equal_fold(line, replacement)) {
        log::debug!("Replacement already present");
        return Ok(false);
    }

    let Some(index) = lines.iter().position(|line| line.contains(matching)) else {
        log::debug!("No line matches");
        return Ok(false);
    };
    lines[index] = replacement;

    fs::write(path, lines.join(line_ending)).map_err(|e| ReplaceError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::trace!("Replaced line {} of {}", index + 1, path.display());

    Ok(true)
}

/// Case-insensitive equality under simple, one-to-one case folding.
///
/// Characters are compared pairwise, so context-sensitive mappings such as
/// the Greek final sigma cannot make equal strings differ, and characters
/// whose case mapping expands to several characters only match themselves.
fn equal_fold(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y || simple_lower(x) == simple_lower(y) || simple_upper(x) == simple_upper(y)
        })
}

fn simple_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_replace_first_matching_line() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("hosts");
        fs::write(&file, "a=1\nport=80\nb=2\nport=81\n").unwrap();

        let replaced = replace_line(&file, "port=", "port=8080", "\n", None).unwrap();

        assert!(replaced);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "a=1\nport=8080\nb=2\nport=81\n"
        );
    }

    #[test]
    fn test_replace_noop_when_replacement_present() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config");
        fs::write(&file, "PORT=8080\nport=80").unwrap();

        let replaced = replace_line(&file, "port=", "port=8080", "\n", None).unwrap();

        assert!(!replaced);
        assert_eq!(fs::read_to_string(&file).unwrap(), "PORT=8080\nport=80");
    }

    #[test]
    fn test_replace_noop_ignores_final_sigma() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config");
        fs::write(&file, "ΣΑΣ\nkey=old").unwrap();

        let replaced = replace_line(&file, "key=", "σασ", "\n", None).unwrap();

        assert!(!replaced);
        assert_eq!(fs::read_to_string(&file).unwrap(), "ΣΑΣ\nkey=old");
    }

    #[test]
    fn test_equal_fold() {
        assert!(equal_fold("Port=8080", "pORT=8080"));
        assert!(equal_fold("ας", "ΑΣ"));
        assert!(equal_fold("ας", "ασ"));
        assert!(!equal_fold("port", "ports"));
        assert!(!equal_fold("straße", "STRASSE"));
    }

    #[test]
    fn test_replace_no_match() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config");
        fs::write(&file, "a=1\nb=2").unwrap();

        let replaced = replace_line(&file, "c=", "c=3", "\n", None).unwrap();

        assert!(!replaced);
        assert_eq!(fs::read_to_string(&file).unwrap(), "a=1\nb=2");
    }

    #[test]
    fn test_replace_with_crlf() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("win.ini");
        fs::write(&file, "[core]\r\nname=old\r\n").unwrap();

        let replaced = replace_line(&file, "name=", "name=new", "\r\n", None).unwrap();

        assert!(replaced);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "[core]\r\nname=new\r\n"
        );
    }

    #[test]
    fn test_replace_size_exceeded() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("big");
        fs::write(&file, "0123456789").unwrap();

        let result = replace_line(&file, "0", "x", "\n", Some(9));

        assert!(matches!(
            result,
            Err(ReplaceError::SizeExceeded {
                size: 10,
                max_size: 9,
                ..
            })
        ));
        assert_eq!(fs::read_to_string(&file).unwrap(), "0123456789");

        assert!(replace_line(&file, "0", "x", "\n", Some(10)).unwrap());
    }

    #[test]
    fn test_replace_empty_line_ending() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config");
        fs::write(&file, "a").unwrap();

        let result = replace_line(&file, "a", "b", "", None);

        assert!(matches!(result, Err(ReplaceError::InvalidLineEnding)));
    }

    #[test]
    fn test_replace_missing_file() {
        let dir = TempDir::new().unwrap();

        let result = replace_line(&dir.path().join("missing"), "a", "b", "\n", None);

        assert!(matches!(result, Err(ReplaceError::ReadError { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_replace_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("script.sh");
        fs::write(&file, "#!/bin/sh\necho old\n").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o750)).unwrap();

        replace_line(&file, "echo", "echo new", "\n", None).unwrap();

        let mode = fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o750);
    }
}
