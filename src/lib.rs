//! markdown-indexer: number the headings of a Markdown document and prepend a linked index.
//!
//! The pipeline is four pure stages over the document's lines:
//!
//! 1. [`extract`] finds headings outside fenced blocks
//! 2. [`numbering`] assigns hierarchical numbers like `1.` and `1.2.1`
//! 3. [`render`] rewrites each heading line to carry its number
//! 4. [`index`] builds the indented list of links
//!
//! [`document`] strings the stages together and splices the result into the source text.

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod formats;
pub mod heading;
pub mod index;
pub mod input;
pub mod numbering;
pub mod render;

pub use error::{IndexerError, Result};
