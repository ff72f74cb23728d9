use super::{build_index, build_unique_index, index_line, slugify, Slugger, FALLBACK_ANCHOR};
use crate::extract::extract_headings;
use crate::heading::{Heading, NumberedHeading};
use crate::numbering::assign_numbers;

fn numbered(level: usize, number: &str, text: &str) -> NumberedHeading {
    NumberedHeading {
        heading: Heading {
            location: 1,
            level,
            text: text.to_string(),
        },
        number: number.to_string(),
    }
}

#[test]
fn test_slugify_strips_punctuation() {
    let heading = numbered(2, "1.", "Title: with special chars!!!");
    assert_eq!(heading.display_text(), "1. Title: with special chars!!!");
    assert_eq!(slugify(&heading.display_text()), "1-title-with-special-chars");
}

#[test]
fn test_slugify_punctuation_only_falls_back() {
    let heading = numbered(1, "", "***");
    assert_eq!(slugify(&heading.display_text()), FALLBACK_ANCHOR);
    assert_eq!(FALLBACK_ANCHOR, "header");
}

#[test]
fn test_slugify_collapses_hyphens() {
    assert_eq!(slugify("a - b -- c"), "a-b-c");
    assert_eq!(slugify("  spaced   out  "), "spaced-out");
}

#[test]
fn test_slugify_keeps_digits_hyphens_and_unicode_letters() {
    assert_eq!(slugify("1.2.1 Pre-flight"), "121-pre-flight");
    assert_eq!(slugify("Über Café"), "über-café");
}

#[test]
fn test_index_line_format_and_indent() {
    assert_eq!(
        index_line(&numbered(1, "", "Intro"), "intro"),
        "- [Intro](#intro)"
    );
    assert_eq!(
        index_line(&numbered(2, "1.", "Setup"), "1-setup"),
        "  - [1. Setup](#1-setup)"
    );
    assert_eq!(
        index_line(&numbered(4, "1.1", "Deep"), "11-deep"),
        "      - [1.1 Deep](#11-deep)"
    );
}

#[test]
fn test_build_index_in_document_order() {
    let headings = assign_numbers(extract_headings("# Intro\n## Setup\n### Steps\n## Usage"));
    assert_eq!(
        build_index(&headings),
        vec![
            "- [Intro](#intro)",
            "  - [1. Setup](#1-setup)",
            "    - [1.1 Steps](#11-steps)",
            "  - [2. Usage](#2-usage)",
        ]
    );
}

#[test]
fn test_build_index_keeps_colliding_anchors() {
    let headings = vec![numbered(1, "", "Notes"), numbered(1, "", "Notes")];
    assert_eq!(
        build_index(&headings),
        vec!["- [Notes](#notes)", "- [Notes](#notes)"]
    );
}

#[test]
fn test_unique_index_suffixes_repeats() {
    let headings = vec![
        numbered(1, "", "Notes"),
        numbered(1, "", "Notes"),
        numbered(1, "", "Notes"),
    ];
    assert_eq!(
        build_unique_index(&headings),
        vec![
            "- [Notes](#notes)",
            "- [Notes](#notes-1)",
            "- [Notes](#notes-2)",
        ]
    );
}

#[test]
fn test_slugger_skips_suffixes_already_taken() {
    let mut slugger = Slugger::default();
    assert_eq!(slugger.slug("Notes 1"), "notes-1");
    assert_eq!(slugger.slug("Notes"), "notes");
    assert_eq!(slugger.slug("Notes"), "notes-2");
}

#[test]
fn test_slugger_disambiguates_fallback_anchor() {
    let mut slugger = Slugger::default();
    assert_eq!(slugger.slug("***"), "header");
    assert_eq!(slugger.slug("!!!"), "header-1");
}
