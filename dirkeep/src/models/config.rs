// src/models/config.rs
use chrono::Duration;
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Days without a modification before a non-empty directory counts as a
/// zombie, unless overridden on the command line.
pub const DEFAULT_STALE_DAYS: i64 = 180;

/// What gets written into an empty directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlaceholderMode {
    /// Minimal `.gitkeep` marker file.
    Gitkeep,
    /// `README.md` with a generic explanation.
    Readme,
    /// `README.md` with a purpose guessed from the directory name.
    Ai,
}

impl fmt::Display for PlaceholderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gitkeep => write!(f, "gitkeep"),
            Self::Readme => write!(f, "readme"),
            Self::Ai => write!(f, "ai"),
        }
    }
}

/// Everything a run needs to know, assembled by the CLI layer and read-only
/// from then on.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Canonicalized scan roots, in the order given on the command line.
    pub roots: Vec<PathBuf>,
    /// Extra exclusion globs, matched against directory names and
    /// root-relative paths on top of the built-in exclusions.
    pub exclude: Vec<String>,
    /// Staleness threshold for the zombie flag.
    pub zombie_threshold: Duration,
    pub mode: PlaceholderMode,
    /// When false, obsolete placeholders are reported but left in place.
    pub cleanup: bool,
    /// Skip the confirmation prompt before applying the plan.
    pub zen: bool,
    /// Write a tree diagram of the scanned directories.
    pub diagram: bool,
    /// Run log location; defaults to `.dirkeep.log` under the first root.
    pub log_file: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            exclude: Vec::new(),
            zombie_threshold: Duration::days(DEFAULT_STALE_DAYS),
            mode: PlaceholderMode::Gitkeep,
            cleanup: true,
            zen: false,
            diagram: false,
            log_file: None,
        }
    }
}
