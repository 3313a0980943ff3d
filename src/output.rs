//! Rendering scan results.
//!
//! Two formats are supported:
//!
//! - a fixed-width table: a header row, then one 1-indexed row per retained
//!   entry (`Index`, metric, path), optionally followed by a summary footer;
//! - a single JSON document, emitted when `--json` is passed, replacing all
//!   human-readable output.

use chrono::Local;
use serde::Serialize;

use crate::{
    config::{Config, MetricKind},
    error::EntryError,
    scanner::{ScanReport, ScanStats},
    selector::Measurement,
    utils::{format_bytes, format_metric},
};

/// Width of the index column.
const INDEX_WIDTH: usize = 5;

/// Header row of the result table.
#[must_use]
pub fn table_header(metric: MetricKind) -> String {
    format!(
        "{:>INDEX_WIDTH$} {:>width$}  {}",
        "Index",
        metric.metric_label(),
        metric.subject_label(),
        width = metric.column_width()
    )
}

/// One row of the result table; `index` is 1-based.
#[must_use]
pub fn table_row(index: usize, measurement: &Measurement, metric: MetricKind) -> String {
    format!(
        "{index:>INDEX_WIDTH$} {}  {}",
        format_metric(
            measurement.metric,
            metric.column_width(),
            metric.precision()
        ),
        measurement.path.display()
    )
}

/// All data rows of the result table, best first.
#[must_use]
pub fn table_rows(entries: &[Measurement], metric: MetricKind) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, measurement)| table_row(i + 1, measurement, metric))
        .collect()
}

/// Footer lines describing how the scan went.
#[must_use]
pub fn summary_lines(stats: &ScanStats) -> Vec<String> {
    vec![
        format!("Directories scanned: {}", stats.directories),
        format!("Measurements:        {}", stats.measurements),
        format!("Bytes measured:      {}", format_bytes(stats.bytes)),
        format!(
            "Skipped:             {} vanished, {} warnings",
            stats.vanished, stats.warnings
        ),
    ]
}

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize)]
pub struct JsonOutput {
    /// The metric that was measured.
    pub metric: MetricKind,

    /// The requested number of results (K).
    pub count: usize,

    /// Root of the walk.
    pub start_dir: String,

    /// RFC 3339 timestamp of when the output was produced.
    pub generated_at: String,

    /// Retained entries, largest first.
    pub entries: Vec<JsonEntry>,

    /// Scan counters.
    pub summary: JsonSummary,

    /// Warnings recorded during the scan, in walk order.
    pub warnings: Vec<JsonWarning>,
}

/// A single ranked entry in the JSON output.
#[derive(Serialize)]
pub struct JsonEntry {
    /// 1-based rank.
    pub index: usize,

    /// Measured value (count, or size in megabytes).
    pub metric: f64,

    /// Directory or file path.
    pub path: String,
}

/// A directory or file that could not be used, in the JSON output.
#[derive(Serialize)]
pub struct JsonWarning {
    /// Path the failure refers to.
    pub path: String,

    /// Human-readable description of the failure.
    pub message: String,
}

/// Scan counters in the JSON output.
#[derive(Serialize)]
pub struct JsonSummary {
    /// Raw counters.
    #[serde(flatten)]
    pub stats: ScanStats,

    /// Human-readable formatted byte total.
    pub bytes_formatted: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a finished scan.
    #[must_use]
    pub fn from_report(config: &Config, report: &ScanReport) -> Self {
        Self {
            metric: config.metric,
            count: config.count,
            start_dir: config.start_dir.display().to_string(),
            generated_at: Local::now().to_rfc3339(),
            entries: report
                .entries
                .iter()
                .enumerate()
                .map(|(i, m)| JsonEntry::from_measurement(i + 1, m))
                .collect(),
            summary: JsonSummary {
                stats: report.stats,
                bytes_formatted: format_bytes(report.stats.bytes),
            },
            warnings: report.warnings.iter().map(JsonWarning::from_error).collect(),
        }
    }
}

impl JsonEntry {
    /// Convert a ranked `Measurement` into a `JsonEntry`.
    #[must_use]
    pub fn from_measurement(index: usize, measurement: &Measurement) -> Self {
        Self {
            index,
            metric: measurement.metric,
            path: measurement.path.display().to_string(),
        }
    }
}

impl JsonWarning {
    /// Convert a recorded `EntryError` into a `JsonWarning`.
    #[must_use]
    pub fn from_error(err: &EntryError) -> Self {
        Self {
            path: err.path().display().to_string(),
            message: err.to_string(),
        }
    }
}
