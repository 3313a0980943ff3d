//! # topn
//!
//! Report the directories with the most files, the directories whose
//! immediate files take the most space, or the largest files under a tree.
//!
//! Only the top N results are kept while walking, so memory use does not grow
//! with the size of the tree.
//!
//! ## Usage
//!
//! ```bash
//! # Ten directories with the most files directly inside them
//! topn counts 10 ~/Projects
//!
//! # Five directories whose own files take the most space
//! topn dirs 5 /var/log
//!
//! # Twenty largest files (1 MB and up), as JSON
//! topn files 20 ~ --json
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use log::LevelFilter;
use std::process::exit;
use topn::{
    Config, ScanReport, Scanner,
    output::{JsonOutput, summary_lines, table_header, table_rows},
};

/// Entry point for the topn application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parse arguments, run the scan, then print the table (and optional summary)
/// or the JSON document.
///
/// # Errors
///
/// Returns configuration errors (missing start directory, invalid count) and
/// JSON serialization errors.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    init_logging(args.verbosity());

    let config = args.config()?;
    let scanner = Scanner::new(config, args.scan_options());
    let report = scanner.scan()?;

    if args.json() {
        return print_json(scanner.config(), &report);
    }

    print_table(scanner.config(), &report);

    if args.summary() {
        println!();
        for line in summary_lines(&report.stats) {
            println!("{}", line.bright_white());
        }
    }

    Ok(())
}

/// Install a stderr logger whose level comes from `-v` only.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 | 1 => LevelFilter::Warn,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Print the header and one row per retained entry.
fn print_table(config: &Config, report: &ScanReport) {
    println!("{}", table_header(config.metric).bold());

    for row in table_rows(&report.entries, config.metric) {
        println!("{row}");
    }
}

/// Print the whole result as a single JSON document.
fn print_json(config: &Config, report: &ScanReport) -> Result<()> {
    let output = JsonOutput::from_report(config, report);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
