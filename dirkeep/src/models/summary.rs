// src/models/summary.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Counters accumulated over a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Directories visited by the scanner.
    pub scanned: u64,
    /// Directories with no direct children at all.
    pub empty: u64,
    /// Placeholders written this run.
    pub created: u64,
    /// Placeholders removed this run.
    pub removed: u64,
    /// Directories left holding a generated placeholder: those that already
    /// had one at plan time, plus the placeholders created during apply.
    pub kept: u64,
    pub zombies: u64,
    pub ghosts: u64,
    /// Directories skipped because they could not be read.
    pub skipped: u64,
    /// Actions that failed to apply.
    pub failures: u64,
}

impl RunSummary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scanned: 0,
            empty: 0,
            created: 0,
            removed: 0,
            kept: 0,
            zombies: 0,
            ghosts: 0,
            skipped: 0,
            failures: 0,
        }
    }

    /// True when every directory was reached and every action applied.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.skipped == 0 && self.failures == 0
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// One applied (or attempted) mutation, timestamped for the run log.
#[derive(Debug, Clone)]
pub struct ApplyEvent {
    pub at: DateTime<Utc>,
    /// "create", "remove", "left" or "excepted".
    pub verb: &'static str,
    pub path: PathBuf,
    /// Extra context, e.g. why a file was left untouched.
    pub detail: Option<String>,
}
