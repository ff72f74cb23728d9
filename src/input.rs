//! Locating, reading and writing the documents the indexer works on.

use crate::error::{IndexerError, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Check that `path` is an existing file whose extension is one of `extensions`.
///
/// Extensions compare case-insensitively and may be given with or without a leading dot.
///
/// # Errors
///
/// Returns `NotFound` if the file does not exist and `NotMarkdown` if its extension is not
/// accepted.
pub fn validate_source(path: &Path, extensions: &[String]) -> Result<()> {
    if !path.is_file() {
        return Err(IndexerError::NotFound(path.to_path_buf()));
    }
    let accepted = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
        });
    if accepted {
        Ok(())
    } else {
        Err(IndexerError::NotMarkdown(path.to_path_buf()))
    }
}

/// Output path beside `source`: the source stem plus `suffix`, keeping the extension.
///
/// `notes/guide.md` with suffix `-indexed` becomes `notes/guide-indexed.md`.
#[must_use]
pub fn default_output_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();
    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = source.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    source.with_file_name(name)
}

/// Read the whole source document as UTF-8.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write the finished document, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
