// src/models/insight.rs
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Snapshot of one scanned directory.
///
/// Built once during the walk and never mutated afterwards; the classifier
/// returns an updated copy instead of writing through shared state. Nothing
/// here survives the run.
#[derive(Debug, Clone)]
pub struct DirInsight {
    /// Absolute path of the directory.
    pub path: PathBuf,
    /// Path relative to the scan root it was found under.
    pub rel_path: PathBuf,
    /// True iff the directory has zero direct children (files or
    /// subdirectories). A directory holding only empty subdirectories is
    /// itself non-empty; each subdirectory is its own candidate.
    pub is_empty: bool,
    /// Newest modification time of any file in the subtree, or the
    /// directory's own mtime when no file exists below it.
    pub last_modified: DateTime<Utc>,
    /// Levels below the scan root; direct children of a root are 1.
    pub depth: usize,
    /// Non-empty and untouched for longer than the staleness threshold.
    pub is_zombie: bool,
    /// Referenced by tracked file contents but absent from the index.
    pub is_ghost: bool,
}

impl DirInsight {
    #[must_use]
    pub const fn new(
        path: PathBuf,
        rel_path: PathBuf,
        is_empty: bool,
        last_modified: DateTime<Utc>,
        depth: usize,
    ) -> Self {
        Self {
            path,
            rel_path,
            is_empty,
            last_modified,
            depth,
            is_zombie: false,
            is_ghost: false,
        }
    }
}
