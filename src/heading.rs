//! Heading records for each stage of the indexing pipeline.
//!
//! A heading is extracted once and then wrapped by each later stage rather than mutated:
//! [`Heading`] carries what the extractor found, [`NumberedHeading`] adds the hierarchical
//! number, and [`RenderedHeading`] adds the rewritten heading line. A renderer can only be
//! handed headings that have already been numbered.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Heading as found in the source document.
pub struct Heading {
    /// 1-based line position in the source document.
    pub location: usize,
    /// Nesting depth, the number of leading markers (1 to 6).
    pub level: usize,
    /// Heading text without markers or surrounding whitespace.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Heading with its position in the numbering hierarchy.
pub struct NumberedHeading {
    #[serde(flatten)]
    /// The extracted heading.
    pub heading: Heading,
    /// Dot-separated number such as `1.` or `1.2.1`, empty for level 1.
    pub number: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Numbered heading with the line that replaces it in the output document.
pub struct RenderedHeading {
    #[serde(flatten)]
    /// The numbered heading this line was rendered from.
    pub heading: NumberedHeading,
    /// Markers, number and text joined into the final heading line.
    pub rendered_text: String,
}

impl NumberedHeading {
    /// Text shown for this heading in the index: number and text, trimmed.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("{} {}", self.number, self.heading.text)
            .trim()
            .to_string()
    }
}
