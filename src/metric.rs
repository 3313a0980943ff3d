//! Turning a visited directory into measurements.
//!
//! [`measure`] applies one [`MetricKind`] to a [`DirectoryEntry`]:
//!
//! - `DirectCount` and `DirectSize` yield exactly one measurement for the
//!   directory itself, computed from its direct children only.
//! - `FileSize` yields one measurement per regular file of at least
//!   [`MIN_FILE_SIZE_MB`].
//!
//! File sizes are read with `symlink_metadata`, so symlinks are never
//! followed and contribute no size. A file that disappeared between listing
//! and `stat` is skipped quietly; any other failure excludes that file and is
//! returned as an [`EntryError`] next to the measurements.

use std::{fs, path::Path};

use crate::{
    config::{MIN_FILE_SIZE_MB, MetricKind},
    error::EntryError,
    selector::Measurement,
    traverser::DirectoryEntry,
    utils::bytes_to_megabytes,
};

/// Measurements produced for one directory.
#[derive(Debug, Default)]
pub struct DirectoryMetrics {
    /// Measurements to offer to the selector
    pub measurements: Vec<Measurement>,

    /// Bytes of the regular files that were measured
    pub bytes: u64,

    /// Files that could not be measured
    pub errors: Vec<EntryError>,
}

/// Compute the measurements for `entry` under `kind`.
#[must_use]
pub fn measure(entry: &DirectoryEntry, kind: MetricKind) -> DirectoryMetrics {
    match kind {
        MetricKind::DirectCount => direct_count(entry),
        MetricKind::DirectSize => direct_size(entry),
        MetricKind::FileSize => file_sizes(entry),
    }
}

#[allow(clippy::cast_precision_loss)]
fn direct_count(entry: &DirectoryEntry) -> DirectoryMetrics {
    DirectoryMetrics {
        measurements: vec![Measurement::new(
            entry.file_names.len() as f64,
            entry.path.clone(),
        )],
        ..DirectoryMetrics::default()
    }
}

fn direct_size(entry: &DirectoryEntry) -> DirectoryMetrics {
    let mut metrics = DirectoryMetrics::default();

    for path in entry.file_paths() {
        match regular_file_size(&path) {
            Ok(Some(bytes)) => metrics.bytes += bytes,
            Ok(None) => {}
            Err(err) => metrics.errors.push(err),
        }
    }

    metrics.measurements.push(Measurement::new(
        bytes_to_megabytes(metrics.bytes),
        entry.path.clone(),
    ));
    metrics
}

fn file_sizes(entry: &DirectoryEntry) -> DirectoryMetrics {
    let mut metrics = DirectoryMetrics::default();

    for path in entry.file_paths() {
        match regular_file_size(&path) {
            Ok(Some(bytes)) => {
                metrics.bytes += bytes;
                let megabytes = bytes_to_megabytes(bytes);
                if megabytes >= MIN_FILE_SIZE_MB {
                    metrics.measurements.push(Measurement::new(megabytes, path));
                }
            }
            Ok(None) => {}
            Err(err) => metrics.errors.push(err),
        }
    }

    metrics
}

/// Size in bytes of `path` if it is a regular file, `None` for anything else.
///
/// # Errors
///
/// [`EntryError::Vanished`] if the file no longer exists, otherwise
/// [`EntryError::UnexpectedIo`].
pub fn regular_file_size(path: &Path) -> Result<Option<u64>, EntryError> {
    let metadata =
        fs::symlink_metadata(path).map_err(|err| EntryError::from_stat(path.to_path_buf(), err))?;

    Ok(metadata.is_file().then(|| metadata.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::BYTES_PER_MEGABYTE;
    use std::{ffi::OsString, fs::File, path::PathBuf};
    use tempfile::TempDir;

    /// Create a (sparse) file of exactly `bytes` bytes.
    fn create_sized_file(path: &Path, bytes: u64) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap().set_len(bytes).unwrap();
    }

    fn entry_for(dir: &Path, names: &[&str]) -> DirectoryEntry {
        DirectoryEntry {
            path: dir.to_path_buf(),
            depth: 0,
            file_names: names.iter().map(OsString::from).collect(),
            subdirs: Vec::new(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_direct_count() {
        let tmp = TempDir::new().unwrap();
        let entry = entry_for(tmp.path(), &["a", "b", "c"]);

        let metrics = measure(&entry, MetricKind::DirectCount);

        assert_eq!(metrics.measurements, vec![Measurement::new(3.0, tmp.path())]);
        assert!(metrics.errors.is_empty());
    }

    #[test]
    fn test_direct_count_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let metrics = measure(&entry_for(tmp.path(), &[]), MetricKind::DirectCount);

        assert_eq!(metrics.measurements, vec![Measurement::new(0.0, tmp.path())]);
    }

    #[test]
    fn test_direct_size_excludes_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        create_sized_file(&dir.join("two"), 2 * BYTES_PER_MEGABYTE);
        create_sized_file(&dir.join("three"), 3 * BYTES_PER_MEGABYTE);
        create_sized_file(&dir.join("sub/huge"), 100 * BYTES_PER_MEGABYTE);

        let metrics = measure(&entry_for(dir, &["three", "two"]), MetricKind::DirectSize);

        assert_eq!(metrics.measurements, vec![Measurement::new(5.0, dir)]);
        assert_eq!(metrics.bytes, 5 * BYTES_PER_MEGABYTE);
    }

    #[test]
    fn test_direct_size_skips_vanished_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        create_sized_file(&dir.join("present"), BYTES_PER_MEGABYTE);

        let metrics = measure(&entry_for(dir, &["gone", "present"]), MetricKind::DirectSize);

        assert_eq!(metrics.measurements, vec![Measurement::new(1.0, dir)]);
        assert_eq!(metrics.errors.len(), 1);
        assert!(matches!(metrics.errors[0], EntryError::Vanished { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_direct_size_leaves_out_unstatable_files() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        create_sized_file(&dir.join("readable"), 2 * BYTES_PER_MEGABYTE);
        create_sized_file(&dir.join("locked/hidden"), 3 * BYTES_PER_MEGABYTE);
        let locked = dir.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits; nothing to observe in that case.
        if fs::symlink_metadata(locked.join("hidden")).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let metrics = measure(
            &entry_for(dir, &["locked/hidden", "readable"]),
            MetricKind::DirectSize,
        );
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(metrics.measurements, vec![Measurement::new(2.0, dir)]);
        assert_eq!(metrics.bytes, 2 * BYTES_PER_MEGABYTE);
        assert_eq!(metrics.errors.len(), 1);
        assert!(matches!(
            &metrics.errors[0],
            EntryError::UnexpectedIo { path, .. } if path == &locked.join("hidden")
        ));
        assert!(metrics.errors[0].is_warning());
    }

    #[test]
    fn test_file_size_floor() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        create_sized_file(&dir.join("small"), BYTES_PER_MEGABYTE * 9 / 10);
        create_sized_file(&dir.join("exact"), BYTES_PER_MEGABYTE);
        create_sized_file(&dir.join("large"), 4 * BYTES_PER_MEGABYTE);

        let metrics = measure(
            &entry_for(dir, &["exact", "large", "small"]),
            MetricKind::FileSize,
        );

        assert_eq!(
            metrics.measurements,
            vec![
                Measurement::new(1.0, dir.join("exact")),
                Measurement::new(4.0, dir.join("large")),
            ]
        );
    }

    #[test]
    fn test_file_size_vanished_file_is_not_measured() {
        let tmp = TempDir::new().unwrap();
        let metrics = measure(&entry_for(tmp.path(), &["ghost"]), MetricKind::FileSize);

        assert!(metrics.measurements.is_empty());
        assert!(metrics.errors.iter().all(|e| !e.is_warning()));
    }

    #[test]
    fn test_regular_file_size() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("data.bin");
        create_sized_file(&file, 1234);

        assert_eq!(regular_file_size(&file).unwrap(), Some(1234));
        assert_eq!(regular_file_size(tmp.path()).unwrap(), None);
        assert!(matches!(
            regular_file_size(&PathBuf::from("/does/not/exist")),
            Err(EntryError::Vanished { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_contribute_no_size() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        create_sized_file(&dir.join("target/big"), 8 * BYTES_PER_MEGABYTE);
        std::os::unix::fs::symlink(dir.join("target/big"), dir.join("alias")).unwrap();

        let size = measure(&entry_for(dir, &["alias"]), MetricKind::DirectSize);
        assert_eq!(size.measurements, vec![Measurement::new(0.0, dir)]);

        let files = measure(&entry_for(dir, &["alias"]), MetricKind::FileSize);
        assert!(files.measurements.is_empty());

        let count = measure(&entry_for(dir, &["alias"]), MetricKind::DirectCount);
        assert_eq!(count.measurements, vec![Measurement::new(1.0, dir)]);
    }
}
