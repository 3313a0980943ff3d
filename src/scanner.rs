//! Scan orchestration.
//!
//! The [`Scanner`] ties the pieces together: it validates the [`Config`],
//! walks the tree with a [`Traverser`], turns each visited directory into
//! measurements with [`measure`], and offers every measurement to a fresh
//! [`TopKSelector`]. Failures on individual directories or files are recorded
//! as warnings and never abort the walk.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{
    config::{Config, ScanOptions},
    error::{ConfigError, EntryError},
    metric::measure,
    selector::{Measurement, TopKSelector},
    traverser::Traverser,
};

/// Counters collected during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Directories successfully listed
    pub directories: usize,

    /// Measurements offered to the selector
    pub measurements: usize,

    /// Files that vanished between listing and measuring
    pub vanished: usize,

    /// Warnings recorded (unreadable directories, other I/O errors)
    pub warnings: usize,

    /// Total bytes of the regular files that were measured
    pub bytes: u64,
}

/// Outcome of a completed scan.
#[derive(Debug)]
pub struct ScanReport {
    /// The retained measurements, largest first
    pub entries: Vec<Measurement>,

    /// Recoverable failures encountered along the way, in walk order
    pub warnings: Vec<EntryError>,

    /// Counters collected during the walk
    pub stats: ScanStats,
}

impl ScanReport {
    fn record(&mut self, err: EntryError) {
        if err.is_warning() {
            log::debug!("{err}");
            self.stats.warnings += 1;
            self.warnings.push(err);
        } else {
            log::trace!("{err}");
            self.stats.vanished += 1;
        }
    }
}

/// Bounded top-K scanner over a directory tree.
#[derive(Debug)]
pub struct Scanner {
    /// What to scan and how many results to keep
    config: Config,

    /// Traversal and reporting options
    scan_options: ScanOptions,
}

impl Scanner {
    /// Create a new scanner.
    ///
    /// Nothing touches the filesystem until [`Scanner::scan`] is called.
    #[must_use]
    pub const fn new(config: Config, scan_options: ScanOptions) -> Self {
        Self {
            config,
            scan_options,
        }
    }

    /// The configuration this scanner runs with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Walk the tree and return the top-K measurements.
    ///
    /// Runs synchronously on the calling thread. Unreadable directories are
    /// skipped with their subtrees, unreadable files are left out of their
    /// metric, and both are reported in [`ScanReport::warnings`]. The walk
    /// itself never fails once it has started.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] before any traversal if the count is zero or
    /// the start directory is missing or not a directory.
    pub fn scan(&self) -> Result<ScanReport, ConfigError> {
        self.config.validate()?;

        let progress = self.progress_bar();
        let mut selector = TopKSelector::new(self.config.count);
        let mut report = ScanReport {
            entries: Vec::new(),
            warnings: Vec::new(),
            stats: ScanStats::default(),
        };

        let traverser = Traverser::new(&self.config.start_dir)
            .with_skip(self.scan_options.skip.clone())
            .with_max_depth(self.scan_options.max_depth);

        for visited in traverser {
            let entry = match visited {
                Ok(entry) => entry,
                Err(err) => {
                    report.record(err);
                    continue;
                }
            };

            report.stats.directories += 1;
            log::trace!("visiting {} (depth {})", entry.path.display(), entry.depth);

            let metrics = measure(&entry, self.config.metric);
            report.stats.bytes += metrics.bytes;

            for measurement in metrics.measurements {
                report.stats.measurements += 1;
                selector.offer(measurement);
            }

            for err in entry.errors.into_iter().chain(metrics.errors) {
                report.record(err);
            }

            progress.set_message(format!(
                "Scanning... {} directories",
                report.stats.directories
            ));
        }

        progress.finish_and_clear();

        log::debug!(
            "scanned {} directories, {} measurements, {} warnings",
            report.stats.directories,
            report.stats.measurements,
            report.stats.warnings
        );

        if self.scan_options.verbose {
            for warning in &report.warnings {
                eprintln!("{}", warning.to_string().red());
            }
        }

        report.entries = selector.into_result();
        Ok(report)
    }

    fn progress_bar(&self) -> ProgressBar {
        if self.scan_options.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scanning...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}
