//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library. Each subcommand is one of the
//! three top-N tools and fixes the metric; all of them take `<COUNT> <START_DIR>`.
//!
//! Helper methods on [`Cli`] turn the parsed arguments into the library's
//! [`Config`] and [`ScanOptions`].

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use topn::{
    ConfigError,
    config::{Config, MetricKind, ScanOptions, parse_count},
};

/// Positional arguments shared by every tool.
#[derive(Args, Debug)]
pub struct ToolArgs {
    /// How many entries to report (a positive integer)
    ///
    /// Kept as text and checked by [`Cli::config`], so a bad value is
    /// reported like any other configuration error.
    count: String,

    /// Directory to start the walk from
    start_dir: PathBuf,
}

/// Top-level subcommands, one per metric.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Directories with the most files directly inside them
    #[command(allow_negative_numbers = true)]
    Counts(ToolArgs),

    /// Directories whose immediate files take the most space (MB)
    #[command(allow_negative_numbers = true)]
    Dirs(ToolArgs),

    /// Largest individual files of at least 1 MB
    #[command(allow_negative_numbers = true)]
    Files(ToolArgs),
}

/// Command-line arguments controlling how results are printed.
#[derive(Args, Debug)]
struct OutputArgs {
    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, the table, the summary and the progress spinner are
    /// suppressed and a single JSON document is printed to stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Print a summary footer after the table
    ///
    /// Shows how many directories were scanned, how many measurements were
    /// taken, the total bytes measured, and how many entries were skipped.
    #[arg(long, global = true)]
    summary: bool,

    /// Hide the progress spinner
    #[arg(short = 'q', long, global = true)]
    quiet: bool,
}

/// Command-line arguments for controlling directory scanning behavior.
#[derive(Args, Debug)]
struct ScanningArgs {
    /// Show access errors that occur while scanning (repeat for debug logs)
    ///
    /// `-v` prints unreadable directories and files to stderr.
    /// `-vv` additionally enables debug logging, `-vvv` trace logging.
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory names to skip during scanning
    ///
    /// Matching directories are neither measured nor descended into. Can be
    /// specified multiple times.
    #[arg(long, action = clap::ArgAction::Append, global = true)]
    skip: Vec<PathBuf>,

    /// Maximum directory depth to scan
    ///
    /// The start directory is depth 0. A value of 1 scans the start directory
    /// and its immediate subdirectories. When not set, the scan is unlimited.
    #[arg(long, global = true)]
    max_depth: Option<usize>,
}

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "topn")]
#[command(about = "Report the top N directories by file count or size, or the top N largest files")]
#[command(version)]
pub struct Cli {
    /// Which tool to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Metric fixed by the chosen subcommand.
    #[must_use]
    pub const fn metric(&self) -> MetricKind {
        match self.command {
            Commands::Counts(_) => MetricKind::DirectCount,
            Commands::Dirs(_) => MetricKind::DirectSize,
            Commands::Files(_) => MetricKind::FileSize,
        }
    }

    const fn tool_args(&self) -> &ToolArgs {
        match &self.command {
            Commands::Counts(args) | Commands::Dirs(args) | Commands::Files(args) => args,
        }
    }

    /// Build the scan configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCount`] if `COUNT` is not a positive
    /// integer.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use clap::Parser;
    /// # mod cli { include!("cli.rs"); }
    /// # use cli::Cli;
    /// let args = Cli::parse_from(["topn", "dirs", "10", "/var"]);
    /// let config = args.config()?;
    /// assert_eq!(config.count, 10);
    /// # Ok::<(), topn::ConfigError>(())
    /// ```
    pub fn config(&self) -> Result<Config, ConfigError> {
        let tool = self.tool_args();
        let count = parse_count(&tool.count)?;
        Ok(Config::new(count, tool.start_dir.clone(), self.metric()))
    }

    /// Extract scanning options.
    ///
    /// JSON mode implies `quiet` so that only the JSON document is printed.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            verbose: self.scanning.verbose > 0 && !self.output.json,
            quiet: self.output.quiet || self.output.json,
            skip: self.scanning.skip.clone(),
            max_depth: self.scanning.max_depth,
        }
    }

    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.output.json
    }

    /// Whether to print the summary footer.
    #[must_use]
    pub const fn summary(&self) -> bool {
        self.output.summary
    }

    /// How many times `-v` was given.
    #[must_use]
    pub const fn verbosity(&self) -> u8 {
        self.scanning.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_subcommands_fix_the_metric() {
        let counts = Cli::parse_from(["topn", "counts", "5", "/tmp"]);
        let dirs = Cli::parse_from(["topn", "dirs", "5", "/tmp"]);
        let files = Cli::parse_from(["topn", "files", "5", "/tmp"]);

        assert_eq!(counts.metric(), MetricKind::DirectCount);
        assert_eq!(dirs.metric(), MetricKind::DirectSize);
        assert_eq!(files.metric(), MetricKind::FileSize);
    }

    #[test]
    fn test_config_from_positionals() {
        let args = Cli::parse_from(["topn", "files", "25", "/srv/data"]);
        let config = args.config().unwrap();

        assert_eq!(config.count, 25);
        assert_eq!(config.start_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.metric, MetricKind::FileSize);
    }

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["topn", "dirs", "3", "."]);
        let options = args.scan_options();

        assert!(!args.json());
        assert!(!args.summary());
        assert_eq!(args.verbosity(), 0);
        assert!(!options.verbose);
        assert!(!options.quiet);
        assert!(options.skip.is_empty());
        assert_eq!(options.max_depth, None);
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        let missing_dir = Cli::try_parse_from(["topn", "dirs", "3"]);
        assert_eq!(
            missing_dir.unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );

        let extra = Cli::try_parse_from(["topn", "dirs", "3", "/a", "/b"]);
        assert!(extra.is_err());

        let no_tool = Cli::try_parse_from(["topn"]);
        assert!(no_tool.is_err());
    }

    #[test]
    fn test_invalid_counts_are_config_errors() {
        for count in ["0", "-2", "many", "2.5"] {
            let args = Cli::try_parse_from(["topn", "counts", count, "/tmp"])
                .unwrap_or_else(|err| panic!("count {count} should parse: {err}"));

            assert!(
                matches!(args.config(), Err(ConfigError::InvalidCount(ref raw)) if raw == count),
                "count {count}"
            );
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Cli::parse_from([
            "topn",
            "files",
            "10",
            "/data",
            "--json",
            "--summary",
            "-vv",
            "--skip",
            ".git",
            "--skip",
            "node_modules",
            "--max-depth",
            "4",
        ]);
        let options = args.scan_options();

        assert!(args.json());
        assert!(args.summary());
        assert_eq!(args.verbosity(), 2);
        assert_eq!(
            options.skip,
            vec![PathBuf::from(".git"), PathBuf::from("node_modules")]
        );
        assert_eq!(options.max_depth, Some(4));
    }

    #[test]
    fn test_json_implies_quiet_and_silences_warnings() {
        let args = Cli::parse_from(["topn", "dirs", "1", ".", "--json", "-v"]);
        let options = args.scan_options();

        assert!(options.quiet);
        assert!(!options.verbose);
    }

    #[test]
    fn test_quiet_and_verbose() {
        let args = Cli::parse_from(["topn", "-q", "-v", "counts", "1", "."]);
        let options = args.scan_options();

        assert!(options.quiet);
        assert!(options.verbose);
    }
}
