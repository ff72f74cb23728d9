//! Index (table of contents) generation from numbered headings.
//!
//! Each heading becomes one list item linking to an anchor derived from its display text.
//! Anchors follow the usual Markdown heading-slug rules:
//!
//! 1. lowercase the text
//! 2. drop everything except word characters, whitespace and hyphens
//! 3. trim, then turn each space into a hyphen
//! 4. squash runs of hyphens
//!
//! A slug that ends up empty becomes [`FALLBACK_ANCHOR`]. Two headings with the same slug
//! produce colliding links unless a [`Slugger`] is used to disambiguate them.

use crate::heading::NumberedHeading;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Anchor used when a heading's text has no sluggable characters.
pub const FALLBACK_ANCHOR: &str = "header";

/// Convert heading display text to a link anchor.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = kept.trim().replace(' ', "-");
    let slug = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    if slug.is_empty() {
        FALLBACK_ANCHOR.to_string()
    } else {
        slug.into_owned()
    }
}

#[derive(Default)]
/// Stateful slug generator that suffixes repeated anchors with `-1`, `-2`, ...
///
/// The first occurrence of a slug is left unchanged.
pub struct Slugger {
    counts: HashMap<String, usize>,
    emitted: HashSet<String>,
}

impl Slugger {
    /// Slugify `text`, disambiguating against every anchor handed out so far.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.counts.entry(base.clone()).or_insert(0);
        let mut candidate = base.clone();
        while !self.emitted.insert(candidate.clone()) {
            *count += 1;
            candidate = format!("{base}-{count}");
        }
        candidate
    }
}

/// Format one index entry, indented two spaces per level below 1.
#[must_use]
pub fn index_line(heading: &NumberedHeading, anchor: &str) -> String {
    let indent = "  ".repeat(heading.heading.level.saturating_sub(1));
    format!("{indent}- [{}](#{anchor})", heading.display_text())
}

fn build_with<F>(headings: &[NumberedHeading], mut anchor_for: F) -> Vec<String>
where
    F: FnMut(&str) -> String,
{
    headings
        .iter()
        .map(|heading| {
            let anchor = anchor_for(&heading.display_text());
            index_line(heading, &anchor)
        })
        .collect()
}

/// Build the index lines in document order. Duplicate anchors are kept as they are.
#[must_use]
pub fn build_index(headings: &[NumberedHeading]) -> Vec<String> {
    build_with(headings, slugify)
}

/// Build the index lines with repeated anchors disambiguated by a [`Slugger`].
#[must_use]
pub fn build_unique_index(headings: &[NumberedHeading]) -> Vec<String> {
    let mut slugger = Slugger::default();
    build_with(headings, |text| slugger.slug(text))
}

#[cfg(test)]
#[path = "tests/index.rs"]
mod tests;
