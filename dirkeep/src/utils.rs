// src/utils.rs
use std::path::{Path, PathBuf};

/// Longest configured root that contains `path`. Paths are compared as
/// given, so roots and scanned paths must share the same canonical form.
#[must_use]
pub fn owning_root<'a>(roots: &'a [PathBuf], path: &Path) -> Option<&'a PathBuf> {
    roots
        .iter()
        .filter(|root| path.starts_with(root))
        .max_by_key(|root| root.components().count())
}

/// Final component of a path, for display and placeholder titles.
#[must_use]
pub fn dir_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
