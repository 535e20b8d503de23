// src/models/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that are reported but never abort the run.
///
/// Errors local to one directory must not stop the scan of its siblings;
/// they are collected here and surface in the report and the exit code.
/// Only an unusable root argument is allowed to kill the run outright.
#[derive(Debug, Error)]
pub enum RunError {
    /// Directory could not be read during the walk; it is skipped and its
    /// subtree is not descended into.
    #[error("cannot read {}: {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    /// A placeholder or ignore-file write failed; remaining directories
    /// still get theirs.
    #[error("cannot write {}: {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },

    /// git is missing or erroring; tracked and ghost checks degrade to
    /// "unknown" for the whole run.
    #[error("version control unavailable: {0}")]
    VcsUnavailable(String),
}
