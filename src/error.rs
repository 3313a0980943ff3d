//! Error types for configuration and per-entry scan failures.
//!
//! Two families of failures exist:
//!
//! - [`ConfigError`] is fatal. It is returned before any traversal starts.
//! - [`EntryError`] is recoverable. It describes one directory or file the
//!   scanner could not use; the scan records it and keeps going.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Invalid input detected before a scan begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested result count was not a positive integer.
    #[error("count must be a positive integer, got `{0}`")]
    InvalidCount(String),

    /// The start directory does not exist.
    #[error("start directory does not exist: {}", .0.display())]
    MissingStartDirectory(PathBuf),

    /// The start path exists but is not a directory.
    #[error("start path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// A failure confined to a single directory or file during a walk.
#[derive(Debug, Error)]
pub enum EntryError {
    /// The file was listed but disappeared before it could be measured.
    #[error("{} vanished before it could be measured", .path.display())]
    Vanished { path: PathBuf },

    /// A directory could not be listed. Its subtree is skipped.
    #[error("cannot read directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure while inspecting an entry.
    #[error("cannot inspect {}: {source}", .path.display())]
    UnexpectedIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EntryError {
    /// Classify a failed `stat` of `path`.
    ///
    /// `NotFound` means the file raced with a concurrent deletion and maps to
    /// [`EntryError::Vanished`]; everything else is unexpected.
    #[must_use]
    pub fn from_stat(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::Vanished { path }
        } else {
            Self::UnexpectedIo { path, source }
        }
    }

    /// The path the failure refers to.
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        match self {
            Self::Vanished { path }
            | Self::DirectoryAccess { path, .. }
            | Self::UnexpectedIo { path, .. } => path,
        }
    }

    /// Whether this failure should be surfaced to the user as a warning.
    ///
    /// Vanished files are an expected race on a live filesystem and are only
    /// counted, never reported.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        !matches!(self, Self::Vanished { .. })
    }
}
