//! Metric selection for a scan.
//!
//! The scanner core is shared by all three tools; the [`MetricKind`] decides
//! what gets measured and how the result table is labelled.

use serde::Serialize;

/// Size floor, in megabytes, below which files are never reported in
/// [`MetricKind::FileSize`] mode.
pub const MIN_FILE_SIZE_MB: f64 = 1.0;

/// What the scanner measures for each visited directory.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Number of non-directory entries directly inside each directory
    DirectCount,

    /// Total size (MB) of the regular files directly inside each directory
    DirectSize,

    /// Size (MB) of every regular file of at least [`MIN_FILE_SIZE_MB`]
    FileSize,
}

impl MetricKind {
    /// Header for the metric column.
    #[must_use]
    pub const fn metric_label(self) -> &'static str {
        match self {
            Self::DirectCount => "Count",
            Self::DirectSize | Self::FileSize => "Size (MB)",
        }
    }

    /// Header for the path column.
    #[must_use]
    pub const fn subject_label(self) -> &'static str {
        match self {
            Self::DirectCount | Self::DirectSize => "Directory",
            Self::FileSize => "Filename",
        }
    }

    /// Right-aligned width of the metric column.
    #[must_use]
    pub const fn column_width(self) -> usize {
        match self {
            Self::DirectCount => 7,
            Self::DirectSize | Self::FileSize => 10,
        }
    }

    /// Decimal places shown for the metric.
    #[must_use]
    pub const fn precision(self) -> usize {
        match self {
            Self::DirectCount => 0,
            Self::DirectSize | Self::FileSize => 1,
        }
    }
}
