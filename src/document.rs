//! Assembly of the indexed document from its source text.
//!
//! Runs the heading pipeline (extract, number, render, index) and splices the results back
//! into the source: each heading line is overwritten in place by its rendered form, and an
//! index section is inserted after the first line of the document.

use crate::config::Config;
use crate::extract::scan_headings;
use crate::formats::markdown::MarkdownFormat;
use crate::heading::{Heading, RenderedHeading};
use crate::index::{build_index, build_unique_index};
use crate::numbering::assign_numbers;
use crate::render::render_headings;
use log::{debug, warn};
use serde::Serialize;

#[derive(Clone, Debug)]
/// Choices that shape the generated index.
pub struct Options {
    /// Title of the index section heading.
    pub index_title: String,
    /// Disambiguate repeated anchors instead of letting links collide.
    pub unique_anchors: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            index_title: "Index".to_string(),
            unique_anchors: false,
        }
    }
}

impl From<&Config> for Options {
    fn from(cfg: &Config) -> Self {
        Self {
            index_title: cfg.index_title.clone(),
            unique_anchors: cfg.unique_anchors,
        }
    }
}

#[derive(Debug, Serialize)]
/// Everything one indexing run produced.
pub struct IndexedDocument {
    /// Headings in document order with their numbers and rewritten lines.
    pub headings: Vec<RenderedHeading>,
    /// Index entries in document order.
    pub index: Vec<String>,
    /// Whether the source ended inside a fenced block, hiding any later headings.
    pub unclosed_fence: bool,
    #[serde(skip)]
    /// Full text of the output document.
    pub text: String,
}

/// Number the headings of `source`, build its index and assemble the output document.
#[must_use]
pub fn index_document(source: &str, options: &Options) -> IndexedDocument {
    let mut scanner = scan_headings(source.lines(), &MarkdownFormat);
    let headings: Vec<Heading> = scanner.by_ref().collect();
    let unclosed_fence = scanner.in_fence();
    if unclosed_fence {
        warn!("Document ends inside a fenced block; headings after the last fence were skipped");
    }
    debug!("Extracted {} headings", headings.len());

    let numbered = assign_numbers(headings);
    let index = if options.unique_anchors {
        build_unique_index(&numbered)
    } else {
        build_index(&numbered)
    };
    let headings = render_headings(numbered);
    let text = assemble(source, &headings, &index, &options.index_title);

    IndexedDocument {
        headings,
        index,
        unclosed_fence,
        text,
    }
}

/// Splice rendered headings into `source` and insert the index after its first line.
///
/// The output keeps a trailing newline if the source had one. Headings whose location is
/// outside the document are ignored.
#[must_use]
pub fn assemble(
    source: &str,
    headings: &[RenderedHeading],
    index: &[String],
    index_title: &str,
) -> String {
    let mut lines: Vec<&str> = source.lines().collect();
    for rendered in headings {
        let slot = rendered
            .heading
            .heading
            .location
            .checked_sub(1)
            .and_then(|i| lines.get_mut(i));
        if let Some(line) = slot {
            *line = rendered.rendered_text.as_str();
        }
    }

    let index_heading = format!("## {index_title}");
    let mut rest = lines.iter().copied();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + index.len() + 4);
    if let Some(first) = rest.next() {
        out.push(first);
        out.push("");
    }
    out.push(&index_heading);
    out.push("");
    out.extend(index.iter().map(String::as_str));
    if rest.len() > 0 {
        out.push("");
        out.extend(rest);
    }

    let mut text = out.join("\n");
    if source.is_empty() || source.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
