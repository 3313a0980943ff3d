//! Size conversion and formatting utilities.
//!
//! Sizes are measured in bytes and reported in binary megabytes
//! (1 MB = 1024 × 1024 bytes).

use humansize::{BINARY, format_size};

/// Number of bytes in one (binary) megabyte.
pub const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Convert a byte count to megabytes.
///
/// # Examples
///
/// ```
/// # use topn::utils::bytes_to_megabytes;
/// assert_eq!(bytes_to_megabytes(3 * 1024 * 1024), 3.0);
/// assert_eq!(bytes_to_megabytes(512 * 1024), 0.5);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn bytes_to_megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MEGABYTE as f64
}

/// Format a byte count for humans, e.g. `"1.50 GiB"`.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Format a metric value with a fixed number of decimals, right-aligned.
#[must_use]
pub fn format_metric(value: f64, width: usize, precision: usize) -> String {
    format!("{value:>width$.precision$}")
}
