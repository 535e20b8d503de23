// src/core/exclude.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::Path;

/// Directory names that are never worth keeping alive. Hidden directories
/// are skipped separately.
pub const DEFAULT_EXCLUDE_NAMES: &[&str] =
    &["node_modules", "target", "__pycache__", ".cache", ".git"];

/// Compiled exclusion rules applied to every directory the scanner visits.
#[derive(Debug, Default)]
pub struct ExcludeSet {
    patterns: Vec<Pattern>,
}

impl ExcludeSet {
    /// Compiles user-supplied glob patterns on top of the built-in names.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not valid glob syntax.
    pub fn from_globs(globs: &[String]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(globs.len());
        for raw in globs {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let compiled =
                Pattern::new(raw).with_context(|| format!("invalid exclude pattern: {raw}"))?;
            patterns.push(compiled);
        }
        Ok(Self { patterns })
    }

    /// Whether a directory should be skipped entirely, subtree included.
    ///
    /// `name` is the directory's own name, `rel_path` its path relative to
    /// the scan root. Hidden directories and the built-in names always
    /// match; user globs are tried against both the name and the relative
    /// path.
    #[must_use]
    pub fn matches(&self, name: &str, rel_path: &Path) -> bool {
        if name.starts_with('.') {
            return true;
        }
        if DEFAULT_EXCLUDE_NAMES.contains(&name) {
            return true;
        }
        self.patterns
            .iter()
            .any(|p| p.matches(name) || p.matches_path(rel_path))
    }
}
