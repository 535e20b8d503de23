// src/core/classifier.rs
use crate::models::DirInsight;
use crate::vcs::Vcs;
use chrono::{DateTime, Duration, Utc};
use std::path::Path;

/// Stamps zombie and ghost status onto a scanned directory.
///
/// A zombie is a populated directory whose whole subtree went quiet for
/// longer than `threshold`. A ghost is a directory version control does not
/// track even though the codebase mentions its path. Empty directories are
/// never zombies; the reference check is skipped for tracked directories.
#[must_use]
pub fn classify(
    mut insight: DirInsight,
    now: DateTime<Utc>,
    threshold: Duration,
    vcs: &dyn Vcs,
) -> DirInsight {
    insight.is_zombie =
        !insight.is_empty && now.signed_duration_since(insight.last_modified) > threshold;
    insight.is_ghost = !vcs.is_tracked(&insight.path)
        && !vcs.find_references(&reference_needle(&insight.rel_path)).is_empty();
    insight
}

/// The path string the codebase would use to mention this directory.
fn reference_needle(rel_path: &Path) -> String {
    let raw = rel_path.to_string_lossy();
    if cfg!(windows) {
        raw.replace('\\', "/")
    } else {
        raw.into_owned()
    }
}
