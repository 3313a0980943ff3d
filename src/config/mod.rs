//! Configuration for a scan.
//!
//! - [`Config`] names the tree, the metric, and how many results to keep.
//! - [`ScanOptions`] tunes traversal and reporting.
//! - [`MetricKind`] selects one of the three measurements.

pub mod metric;
pub mod scan;

pub use metric::{MIN_FILE_SIZE_MB, MetricKind};
pub use scan::{Config, ScanOptions, parse_count};
