//! markdown-indexer: number Markdown headings and prepend a linked index.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use markdown_indexer::config::Config;
use markdown_indexer::document::{self, IndexedDocument, Options};
use markdown_indexer::{input, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "markdown-indexer")]
#[command(
    about = "Generate an index from a markdown file, number its headings, and save a new indexed version",
    long_about = None
)]
struct Args {
    /// Path to the Markdown file to be indexed
    #[arg(value_name = "MARKDOWN_FILE")]
    markdown_file: PathBuf,

    /// Output path; defaults to `<input>-indexed.md`
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Suffix repeated anchors so every index link is unique
    #[arg(long)]
    unique_anchors: bool,

    /// Print the numbered headings and index as JSON
    #[arg(long)]
    json: bool,

    /// Load preferences from this file instead of markdown-indexer.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log each pipeline stage
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    output: &'a Path,
    #[serde(flatten)]
    document: &'a IndexedDocument,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(args: Args) -> Result<()> {
    let mut cfg = Config::load(args.config.as_deref())?;

    // Override config with command line args
    if args.unique_anchors {
        cfg.unique_anchors = true;
    }

    input::validate_source(&args.markdown_file, &cfg.file_extensions)?;
    let output = args
        .output
        .unwrap_or_else(|| input::default_output_path(&args.markdown_file, &cfg.output_suffix));

    let source = input::read_source(&args.markdown_file)?;
    let indexed = document::index_document(&source, &Options::from(&cfg));
    input::write_output(&output, &indexed.text)?;
    log::info!(
        "Wrote {} headings and index to {}",
        indexed.headings.len(),
        output.display()
    );

    if args.json {
        let report = Report {
            output: &output,
            document: &indexed,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Indexed file created: {}", output.display());
    }
    Ok(())
}
