// src/core/scanner.rs
use crate::core::exclude::ExcludeSet;
use crate::models::{DirInsight, RunError};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Lazy directory stream over one or more roots.
///
/// Unreadable directories surface as `Err` items and their subtrees are
/// skipped; iteration always continues with the next sibling or root. The
/// roots themselves are not emitted.
pub struct Scan<'a> {
    excludes: &'a ExcludeSet,
    roots: std::vec::IntoIter<PathBuf>,
    current: Option<(PathBuf, walkdir::IntoIter)>,
    /// Canonical paths already emitted, so symlink aliases and overlapping
    /// roots never report a directory twice.
    visited: HashSet<PathBuf>,
}

/// Walks `roots` depth-first and yields one [`DirInsight`] per directory.
///
/// Symlinked directories are followed but deduplicated by canonical path.
/// Excluded and hidden directories are pruned without being entered.
#[must_use]
pub fn scan<'a>(roots: &[PathBuf], excludes: &'a ExcludeSet) -> Scan<'a> {
    Scan {
        excludes,
        roots: roots.to_vec().into_iter(),
        current: None,
        visited: HashSet::new(),
    }
}

impl Iterator for Scan<'_> {
    type Item = Result<DirInsight, RunError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_none() {
                let root = self.roots.next()?;
                let walker = WalkDir::new(&root).follow_links(true).into_iter();
                self.current = Some((root, walker));
            }
            let Some((root, walker)) = self.current.as_mut() else {
                continue;
            };

            let Some(entry) = walker.next() else {
                self.current = None;
                continue;
            };

            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let fallback = root.clone();
                    return Some(Err(unreadable(err, fallback)));
                }
            };

            // Roots are the frame of reference, not findings.
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let rel_path = entry
                .path()
                .strip_prefix(&*root)
                .unwrap_or_else(|_| entry.path())
                .to_path_buf();

            if self.excludes.matches(&name, &rel_path) {
                debug!(path = %entry.path().display(), "excluded, pruning subtree");
                walker.skip_current_dir();
                continue;
            }

            match entry.path().canonicalize() {
                Ok(real) => {
                    if !self.visited.insert(real) {
                        debug!(path = %entry.path().display(), "already visited via another route");
                        walker.skip_current_dir();
                        continue;
                    }
                }
                Err(source) => {
                    walker.skip_current_dir();
                    return Some(Err(RunError::Unreadable {
                        path: entry.path().to_path_buf(),
                        source,
                    }));
                }
            }

            match build_insight(&entry, rel_path) {
                Ok(insight) => return Some(Ok(insight)),
                Err(err) => {
                    walker.skip_current_dir();
                    return Some(Err(err));
                }
            }
        }
    }
}

fn build_insight(entry: &walkdir::DirEntry, rel_path: PathBuf) -> Result<DirInsight, RunError> {
    let path = entry.path();
    let mut children = fs::read_dir(path).map_err(|source| RunError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let is_empty = children.next().is_none();
    let last_modified = subtree_last_modified(path)?;

    Ok(DirInsight::new(
        path.to_path_buf(),
        rel_path,
        is_empty,
        last_modified,
        entry.depth(),
    ))
}

/// Most recent modification time over the files in the subtree, or the
/// directory's own mtime when no file exists below it. Entries that cannot
/// be inspected simply do not advance the clock.
fn subtree_last_modified(path: &Path) -> Result<DateTime<Utc>, RunError> {
    let mut latest: Option<DateTime<Utc>> = None;

    for entry in WalkDir::new(path).min_depth(1).into_iter().flatten() {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(meta) = entry.metadata() {
            if let Ok(modified) = meta.modified() {
                let modified = DateTime::<Utc>::from(modified);
                if latest.is_none_or(|seen| modified > seen) {
                    latest = Some(modified);
                }
            }
        }
    }

    if let Some(latest) = latest {
        return Ok(latest);
    }
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(DateTime::<Utc>::from)
        .map_err(|source| RunError::Unreadable {
            path: path.to_path_buf(),
            source,
        })
}

fn unreadable(err: walkdir::Error, fallback: PathBuf) -> RunError {
    let path = err.path().map_or(fallback, Path::to_path_buf);
    if let Some(ancestor) = err.loop_ancestor() {
        let detail = format!("symlink loop back to {}", ancestor.display());
        return RunError::Unreadable {
            path,
            source: io::Error::other(detail),
        };
    }
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("walk failed"));
    RunError::Unreadable { path, source }
}
