//! End-to-end runs of the markdown-indexer binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const DOC: &str = "# Intro\n## Setup\n### Steps\n## Usage\n";

#[allow(deprecated)]
fn indexer() -> Command {
    Command::cargo_bin("markdown-indexer").expect("binary")
}

#[test]
fn writes_default_output_next_to_source() {
    let temp = tempdir().unwrap();
    let source = temp.path().join("doc.md");
    fs::write(&source, DOC).unwrap();

    indexer()
        .current_dir(temp.path())
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed file created:"))
        .stdout(predicate::str::contains("doc-indexed.md"));

    let output = fs::read_to_string(temp.path().join("doc-indexed.md")).unwrap();
    assert_eq!(
        output,
        "# Intro\n\n## Index\n\n- [Intro](#intro)\n  - [1. Setup](#1-setup)\n    - [1.1 Steps](#11-steps)\n  - [2. Usage](#2-usage)\n\n## 1. Setup\n### 1.1 Steps\n## 2. Usage\n"
    );
    assert_eq!(fs::read_to_string(&source).unwrap(), DOC);
}

#[test]
fn honours_explicit_output_path() {
    let temp = tempdir().unwrap();
    let source = temp.path().join("doc.md");
    let target = temp.path().join("out.md");
    fs::write(&source, DOC).unwrap();

    indexer()
        .current_dir(temp.path())
        .arg(&source)
        .arg("-o")
        .arg(&target)
        .assert()
        .success();

    assert!(target.is_file());
    assert!(!temp.path().join("doc-indexed.md").exists());
}

#[test]
fn missing_source_fails() {
    let temp = tempdir().unwrap();

    indexer()
        .current_dir(temp.path())
        .arg("absent.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn non_markdown_source_fails() {
    let temp = tempdir().unwrap();
    let source = temp.path().join("notes.txt");
    fs::write(&source, DOC).unwrap();

    indexer()
        .current_dir(temp.path())
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a Markdown"));
}

#[test]
fn json_report_lists_headings() {
    let temp = tempdir().unwrap();
    let source = temp.path().join("doc.md");
    fs::write(&source, DOC).unwrap();

    let output = indexer()
        .current_dir(temp.path())
        .arg(&source)
        .arg("--json")
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let headings = body["headings"].as_array().expect("headings array");
    assert_eq!(headings.len(), 4);
    assert_eq!(headings[2]["number"], "1.1");
    assert_eq!(headings[2]["location"], 3);
    assert_eq!(headings[2]["rendered_text"], "### 1.1 Steps");
    assert_eq!(body["index"][3], "  - [2. Usage](#2-usage)");
}

#[test]
fn config_file_and_flags_shape_the_index() {
    let temp = tempdir().unwrap();
    let source = temp.path().join("doc.md");
    fs::write(&source, "# Notes\n# Notes\n").unwrap();
    fs::write(
        temp.path().join("markdown-indexer.toml"),
        "index_title = \"Contents\"\noutput_suffix = \"-toc\"\n",
    )
    .unwrap();

    indexer()
        .current_dir(temp.path())
        .arg("doc.md")
        .arg("--unique-anchors")
        .assert()
        .success();

    let output = fs::read_to_string(temp.path().join("doc-toc.md")).unwrap();
    assert!(output.contains("## Contents\n"));
    assert!(output.contains("- [Notes](#notes-1)"));
}
