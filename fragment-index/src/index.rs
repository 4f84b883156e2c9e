//! Per-request directory indexing

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs_err as fs;

use crate::mapping::fragment_name;

/// Snapshot of one file taken at scan time.
#[derive(Clone, Debug, PartialEq)]
pub struct FileEntry {
    /// Bare file name, unique within the scanned directory.
    pub file_name: String,
    /// Exact size in bytes. Display-unit rounding happens at the edge.
    pub size_bytes: u64,
    /// Creation timestamp, when the filesystem can report one.
    pub created: Option<DateTime<Utc>>,
    pub modified: DateTime<Utc>,
}

/// Result of scanning one directory: per-file records plus aggregates.
///
/// `total_size_bytes` is the exact sum of raw byte sizes. Summing happens
/// before any display rounding, so aggregates carry no cumulative rounding
/// error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryListing {
    /// Matching files, sorted by file name ascending.
    pub entries: Vec<FileEntry>,
    pub total_size_bytes: u64,
}

impl DirectoryListing {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Fragment counterpart status for a single source file.
///
/// The mapped name is always computed; whether a counterpart exists is
/// decided solely by a stat of that name in the fragment directory at query
/// time.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentStatus {
    /// The fragment file name the source maps to.
    pub fragment_file: String,
    /// Exact byte size of the fragment, present iff the counterpart exists.
    pub size_bytes: Option<u64>,
}

impl FragmentStatus {
    pub fn exists(&self) -> bool {
        self.size_bytes.is_some()
    }
}

/// Indexes one directory of files sharing an extension.
///
/// Stateless beyond its configuration: every query hits the filesystem
/// directly, so concurrent use needs no locking and observes whatever the
/// directory contains at that moment.
#[derive(Clone, Debug)]
pub struct DirectoryIndex {
    dir: PathBuf,
    /// File extension without the leading dot, e.g. `frag`.
    extension: String,
}

impl DirectoryIndex {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Scans the directory and returns all matching files with metadata.
    ///
    /// A missing directory yields an empty listing, not an error. An entry
    /// whose metadata cannot be read (for example a file deleted between
    /// enumeration and stat, or a dangling symlink) is skipped with a debug
    /// log; a partial failure never aborts the listing.
    pub fn scan(&self) -> DirectoryListing {
        let mut entries = Vec::new();

        for path in self.matches() {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::debug!(path = %path.display(), "skipping entry with non-utf8 file name");
                continue;
            };

            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            let modified = match metadata.modified() {
                Ok(time) => DateTime::<Utc>::from(time),
                Err(err) => {
                    tracing::debug!(error = %err, file = file_name, "skipping entry without modification time");
                    continue;
                }
            };

            entries.push(FileEntry {
                file_name: file_name.to_string(),
                size_bytes: metadata.len(),
                created: metadata.created().ok().map(DateTime::<Utc>::from),
                modified,
            });
        }

        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        let total_size_bytes = entries.iter().map(|e| e.size_bytes).sum();

        DirectoryListing {
            entries,
            total_size_bytes,
        }
    }

    /// Number of files currently matching the extension pattern.
    ///
    /// Counts enumerated matches without statting each one; the per-file
    /// listing is the authoritative per-file view.
    pub fn count(&self) -> usize {
        self.matches().count()
    }

    /// Exact byte size of `file_name` within this directory, if it exists as
    /// a regular file. A stat failure reads as absence.
    pub fn size_of(&self, file_name: &str) -> Option<u64> {
        let metadata = fs::metadata(self.dir.join(file_name)).ok()?;
        metadata.is_file().then(|| metadata.len())
    }

    /// Correlates a source file name from another directory against this
    /// fragment directory.
    ///
    /// The expected fragment name is derived from `source_name` by the name
    /// mapping rule, then checked for existence here. Nothing is stored; the
    /// relationship is recomputed on every call.
    pub fn fragment_status(&self, source_name: &str, source_ext: &str) -> FragmentStatus {
        let fragment_file = fragment_name(source_name, source_ext, &self.extension);
        let size_bytes = self.size_of(&fragment_file);
        FragmentStatus {
            fragment_file,
            size_bytes,
        }
    }

    fn matches(&self) -> impl Iterator<Item = PathBuf> {
        let pattern = format!("{}/*.{}", self.dir.display(), self.extension);
        let paths = match glob::glob(&pattern) {
            Ok(paths) => Some(paths),
            Err(err) => {
                tracing::warn!(pattern = %pattern, error = %err, "invalid listing pattern");
                None
            }
        };
        paths.into_iter().flatten().filter_map(|path| match path {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable directory entry");
                None
            }
        })
    }
}
