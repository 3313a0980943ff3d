//! Utility functions and helpers.
//!
//! This module contains utility functions used throughout the application,
//! such as size conversion and formatting helpers.

pub mod size;

pub use size::{BYTES_PER_MEGABYTE, bytes_to_megabytes, format_bytes, format_metric};
