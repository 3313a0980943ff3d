//! Scanning configuration for directory traversal.
//!
//! This module defines the validated [`Config`] every scan starts from and
//! the [`ScanOptions`] that control how directories are traversed and how
//! much is reported along the way.

use std::{fs, path::PathBuf};

use crate::config::MetricKind;
use crate::error::ConfigError;

/// What to scan and how many results to keep.
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of results to retain (K)
    pub count: usize,

    /// Root of the walk
    pub start_dir: PathBuf,

    /// Metric measured for each entry
    pub metric: MetricKind,
}

impl Config {
    #[must_use]
    pub const fn new(count: usize, start_dir: PathBuf, metric: MetricKind) -> Self {
        Self {
            count,
            start_dir,
            metric,
        }
    }

    /// Check the configuration before any traversal happens.
    ///
    /// The start directory itself may be a symlink to a directory; symlinks
    /// below it are never followed.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidCount`] if `count` is zero
    /// - [`ConfigError::MissingStartDirectory`] if `start_dir` cannot be found
    /// - [`ConfigError::NotADirectory`] if `start_dir` is not a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount(self.count.to_string()));
        }

        let metadata = fs::metadata(&self.start_dir)
            .map_err(|_| ConfigError::MissingStartDirectory(self.start_dir.clone()))?;

        if !metadata.is_dir() {
            return Err(ConfigError::NotADirectory(self.start_dir.clone()));
        }

        Ok(())
    }
}

/// Configuration for directory scanning behavior.
///
/// This struct contains options that control how directories are traversed
/// and what is reported during the scanning process.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Whether to print warnings (unreadable directories, I/O errors)
    pub verbose: bool,

    /// Whether to hide the progress spinner
    pub quiet: bool,

    /// Directory names that are neither measured nor descended into
    pub skip: Vec<PathBuf>,

    /// Maximum directory depth to scan (None = unlimited, root = 0)
    pub max_depth: Option<usize>,
}

/// Parse a result count given on the command line.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidCount`] unless `raw` is a positive integer.
pub fn parse_count(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ConfigError::InvalidCount(raw.to_string())),
    }
}
