//! # topn
//!
//! Bounded top-K scans over a directory tree.
//!
//! A scan walks a tree depth-first, measures every visited directory (or
//! every file in it) and keeps only the K largest results in a bounded
//! selector, so memory stays proportional to K rather than to the tree.
//!
//! Three metrics are available:
//!
//! - [`MetricKind::DirectCount`]: how many files sit directly in a directory
//! - [`MetricKind::DirectSize`]: how many megabytes those files take
//! - [`MetricKind::FileSize`]: how large each file of at least 1 MB is
//!
//! ```no_run
//! use std::path::PathBuf;
//! use topn::{Config, MetricKind};
//!
//! let config = Config::new(10, PathBuf::from("/var/log"), MetricKind::DirectSize);
//! let report = topn::scan(&config)?;
//! for entry in &report.entries {
//!     println!("{:>10.1}  {}", entry.metric, entry.path.display());
//! }
//! # Ok::<(), topn::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod metric;
pub mod output;
pub mod scanner;
pub mod selector;
pub mod traverser;
pub mod utils;

pub use config::{Config, MetricKind, ScanOptions};
pub use error::{ConfigError, EntryError};
pub use scanner::{ScanReport, ScanStats, Scanner};
pub use selector::{Measurement, TopKSelector};
pub use traverser::{DirectoryEntry, Traverser};

/// Scan with default options and no progress output.
///
/// # Errors
///
/// Returns a [`ConfigError`] if `config` fails validation; see
/// [`Scanner::scan`].
pub fn scan(config: &Config) -> Result<ScanReport, ConfigError> {
    let options = ScanOptions {
        quiet: true,
        ..ScanOptions::default()
    };

    Scanner::new(config.clone(), options).scan()
}
