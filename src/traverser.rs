//! Depth-first directory traversal.
//!
//! [`Traverser`] is a pull-based iterator that yields one [`DirectoryEntry`]
//! per visited directory, in pre-order: a directory is yielded before any of
//! its subdirectories are listed. Children are listed in file-name order, so
//! walking an unchanged tree twice gives the same sequence.
//!
//! Symlinks are never followed. A symlink is reported as a file name of its
//! parent directory, whatever it points at.
//!
//! A directory that cannot be listed is yielded as an
//! [`EntryError::DirectoryAccess`] and its subtree is skipped; the walk goes
//! on with the next pending directory.

use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::error::EntryError;

/// One visited directory and its direct children.
#[derive(Debug)]
pub struct DirectoryEntry {
    /// Path of the directory
    pub path: PathBuf,

    /// Depth below the walk root (root = 0)
    pub depth: usize,

    /// Names of the non-directory children, in file-name order
    pub file_names: Vec<OsString>,

    /// Direct subdirectories, in file-name order
    pub subdirs: Vec<PathBuf>,

    /// Children that could not be read while listing this directory
    pub errors: Vec<EntryError>,
}

impl DirectoryEntry {
    /// Full paths of the non-directory children.
    pub fn file_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.file_names.iter().map(|name| self.path.join(name))
    }
}

/// Pre-order, depth-first walk over a directory tree.
///
/// The walk is not rewindable; build a new `Traverser` from the same root to
/// start over.
#[derive(Debug)]
pub struct Traverser {
    /// Directories still to visit, with their depth; the last one is next
    pending: Vec<(PathBuf, usize)>,

    /// Directory names that are neither yielded nor descended into
    skip: Vec<PathBuf>,

    /// Deepest level whose directories are still visited
    max_depth: Option<usize>,
}

impl Traverser {
    /// Start a walk at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            pending: vec![(root.into(), 0)],
            skip: Vec::new(),
            max_depth: None,
        }
    }

    /// Never visit directories with one of these names.
    #[must_use]
    pub fn with_skip(mut self, skip: Vec<PathBuf>) -> Self {
        self.skip = skip;
        self
    }

    /// Stop descending below `max_depth` (root = 0).
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check if a directory name is in the skip list
    fn is_skipped(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.skip.iter().any(|skip| skip.as_os_str() == name))
    }

    fn should_descend(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }

    /// List the direct children of `path`.
    ///
    /// Fails only when the directory itself cannot be opened. Errors on
    /// individual children are kept on the returned entry.
    fn list(path: &Path, depth: usize) -> Result<DirectoryEntry, EntryError> {
        let mut entry = DirectoryEntry {
            path: path.to_path_buf(),
            depth,
            file_names: Vec::new(),
            subdirs: Vec::new(),
            errors: Vec::new(),
        };

        let children = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for child in children {
            match child {
                Ok(child) if child.file_type().is_dir() => {
                    entry.subdirs.push(child.into_path());
                }
                Ok(child) => entry.file_names.push(child.file_name().to_os_string()),
                Err(err) if err.depth() == 0 => {
                    return Err(EntryError::DirectoryAccess {
                        path: path.to_path_buf(),
                        source: into_io_error(err),
                    });
                }
                Err(err) => {
                    let child_path = err.path().unwrap_or(path).to_path_buf();
                    entry.errors.push(EntryError::UnexpectedIo {
                        path: child_path,
                        source: into_io_error(err),
                    });
                }
            }
        }

        Ok(entry)
    }
}

impl Iterator for Traverser {
    type Item = Result<DirectoryEntry, EntryError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, depth) = self.pending.pop()?;

        let entry = match Self::list(&path, depth) {
            Ok(entry) => entry,
            Err(err) => return Some(Err(err)),
        };

        if self.should_descend(entry.depth) {
            // Reversed so the first subdirectory is popped next.
            let subdirs: Vec<_> = entry
                .subdirs
                .iter()
                .rev()
                .filter(|subdir| !self.is_skipped(subdir))
                .map(|subdir| (subdir.clone(), entry.depth + 1))
                .collect();
            self.pending.extend(subdirs);
        }

        Some(Ok(entry))
    }
}

fn into_io_error(err: walkdir::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other(message))
}
