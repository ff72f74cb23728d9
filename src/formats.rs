//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over the heading syntax of a
//! document format: which character marks a heading, which pattern recognises a heading
//! line, and which marker fences off literal blocks where headings are ignored.

use regex::Regex;

pub mod markdown;

/// Heading and fence syntax for one document format.
pub trait Format {
    /// Character repeated at the start of a heading line to denote its level.
    fn heading_marker(&self) -> char;
    /// Pattern whose first capture is the marker run and second capture the heading text.
    fn heading_pattern(&self) -> &Regex;
    /// Substring that opens or closes a literal block wherever it occurs on a line.
    fn fence_marker(&self) -> &str;
}
