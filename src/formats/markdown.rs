//! Markdown format implementation for ATX-style headings (# syntax).
//!
//! Only the line-level shape of a heading matters here: one to six `#` characters,
//! at least one whitespace character, then the heading text. Setext headings are not
//! recognised.

use crate::formats::Format;
use once_cell::sync::Lazy;
use regex::Regex;

/// One to six markers, mandatory whitespace, then the rest of the line.
static ATX_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());

/// Heading syntax for Markdown documents with triple-backtick code fences.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn heading_marker(&self) -> char {
        '#'
    }

    fn heading_pattern(&self) -> &Regex {
        &ATX_HEADING
    }

    fn fence_marker(&self) -> &'static str {
        "```"
    }
}
