//! Errors raised by the file-handling side of the indexer.
//!
//! The heading pipeline itself is total; only reading, writing and configuring can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndexerError>;

#[derive(Error, Debug)]
/// Failure while locating, reading, configuring or writing a document.
pub enum IndexerError {
    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source path is not an existing file.
    #[error("The file '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    /// The source path lacks an accepted Markdown extension.
    #[error("The file '{}' is not a Markdown (.md) file.", .0.display())]
    NotMarkdown(PathBuf),

    /// The preferences file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// The JSON report could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
