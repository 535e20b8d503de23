// src/lib.rs
//! Scans directory trees and keeps empty, stale and unreferenced directories
//! visible to git by writing placeholder files and `.gitignore` exceptions.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod logging;
pub mod models;
pub mod report;
pub mod utils;
pub mod vcs;

pub use crate::cli::{Args, run};
pub use crate::core::classifier::classify;
pub use crate::core::exclude::ExcludeSet;
pub use crate::core::ignore_file::ensure_exception;
pub use crate::core::pipeline::{RunPlan, apply, decide, plan};
pub use crate::core::placeholder::{generate, is_generated, probe};
pub use crate::core::scanner::scan;
pub use crate::models::{
    Action, DirInsight, DirRecord, PlaceholderMode, PlaceholderProbe, RunError, RunSummary,
    ScanConfig,
};
