//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a markdown-indexer.toml, and if present we load settings from
//! there. This provides the index title, output naming and anchor preferences.

use crate::error::{IndexerError, Result};
use facet::Facet;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Preferences file looked up in the working directory.
pub const CONFIG_FILE: &str = "markdown-indexer.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from markdown-indexer.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "Index".to_string())]
    /// Title of the generated index section.
    pub index_title: String,
    #[facet(default = "-indexed".to_string())]
    /// Appended to the source file stem to name the default output file.
    pub output_suffix: String,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes accepted as Markdown sources.
    pub file_extensions: Vec<String>,
    #[facet(default = false)]
    /// Suffix repeated anchors so every index link points somewhere distinct.
    pub unique_anchors: bool,
}

impl Config {
    /// Parse preferences from TOML text; absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this struct.
    pub fn from_toml(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| IndexerError::Config(e.to_string()))
    }

    /// Load configuration from `path` if given, otherwise from markdown-indexer.toml if present.
    ///
    /// A broken markdown-indexer.toml is reported and ignored; a broken file named
    /// explicitly is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let contents = fs::read_to_string(path).map_err(|e| {
                IndexerError::Config(format!("cannot read {}: {e}", path.display()))
            })?;
            debug!("Loaded config from {}", path.display());
            return Self::from_toml(&contents);
        }

        if let Ok(contents) = fs::read_to_string(CONFIG_FILE) {
            match Self::from_toml(&contents) {
                Ok(config) => {
                    debug!("Loaded config from {CONFIG_FILE}");
                    return Ok(config);
                }
                Err(err) => warn!("Ignoring {CONFIG_FILE}: {err}"),
            }
        }
        Self::from_toml("")
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
