// src/core/placeholder.rs
use crate::models::{PlaceholderMode, PlaceholderProbe};
use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::Path;

pub const GITKEEP_FILE: &str = ".gitkeep";
pub const README_FILE: &str = "README.md";

/// Marker every generated placeholder carries. Recognition ignores the
/// version and timestamp that follow it, so placeholders written by older
/// releases are still ours.
const TRAILER_TAG: &str = "generated-by: dirkeep";

/// Keyword groups tried in order against the directory name; the first
/// match supplies the description for `ai` mode placeholders.
const CATEGORIES: &[(&[&str], &str)] = &[
    (
        &["image", "img", "asset", "media", "static"],
        "Static assets such as images and media files live here.",
    ),
    (&["log"], "Runtime log output is written here."),
    (
        &["test", "spec", "fixture"],
        "Test fixtures and supporting files live here.",
    ),
    (&["doc"], "Project documentation lives here."),
    (
        &["config", "conf", "setting"],
        "Configuration files live here.",
    ),
    (
        &["cache", "tmp", "temp"],
        "Scratch space for cached and temporary files.",
    ),
    (&["data", "db"], "Data files and datasets live here."),
    (
        &["build", "dist", "output", "artifact"],
        "Build artifacts are produced here.",
    ),
    (&["script"], "Helper scripts live here."),
];

const FALLBACK_DESCRIPTION: &str = "This directory is reserved for content that has not landed yet.";

/// File name a placeholder uses under the given mode.
#[must_use]
pub const fn filename(mode: PlaceholderMode) -> &'static str {
    match mode {
        PlaceholderMode::Gitkeep => GITKEEP_FILE,
        PlaceholderMode::Readme | PlaceholderMode::Ai => README_FILE,
    }
}

/// Renders placeholder contents for a directory.
#[must_use]
pub fn generate(dir_name: &str, mode: PlaceholderMode, now: DateTime<Utc>) -> String {
    match mode {
        PlaceholderMode::Gitkeep => format!(
            "# Keeps this directory under version control.\n# {}\n",
            trailer(now)
        ),
        PlaceholderMode::Readme => format!(
            "# {dir_name}\n\nThis directory is intentionally kept under version control even \
             while empty.\n\n<!-- {} -->\n",
            trailer(now)
        ),
        PlaceholderMode::Ai => format!(
            "# {dir_name}\n\n{}\n\n<!-- {} -->\n",
            describe(dir_name),
            trailer(now)
        ),
    }
}

/// Whether file contents were written by this tool (any version).
#[must_use]
pub fn is_generated(contents: &str) -> bool {
    contents.lines().any(|line| line.contains(TRAILER_TAG))
}

/// Looks at a directory's direct children and separates our own placeholder
/// from everything else.
///
/// A file named like a placeholder but lacking the trailer is user content:
/// it counts as a real entry and is flagged foreign so it is never touched.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read.
pub fn probe(dir: &Path) -> io::Result<PlaceholderProbe> {
    let mut result = PlaceholderProbe::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let is_candidate = name == GITKEEP_FILE || name == README_FILE;

        if is_candidate && entry.file_type()?.is_file() {
            if let Ok(contents) = fs::read_to_string(entry.path()) {
                if is_generated(&contents) {
                    result.generated = Some(entry.path());
                    continue;
                }
            }
            result.foreign = true;
        }

        result.real_entries = result.real_entries.saturating_add(1);
    }

    Ok(result)
}

fn trailer(now: DateTime<Utc>) -> String {
    format!(
        "{TRAILER_TAG} v{} at {}",
        env!("CARGO_PKG_VERSION"),
        now.to_rfc3339()
    )
}

fn describe(dir_name: &str) -> &'static str {
    let lowered = dir_name.to_lowercase();
    for (keywords, description) in CATEGORIES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return description;
        }
    }
    FALLBACK_DESCRIPTION
}
