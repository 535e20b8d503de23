// src/core/ignore_file.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Makes sure `ignore_path` carries a negation line for the placeholder
/// filename, so placeholders inside ignored directories still reach version
/// control. Returns whether the file changed.
///
/// The file is rewritten whole; existing lines are never reordered or
/// dropped. A missing file counts as empty. Calling this again with the
/// same arguments leaves the file byte-identical.
///
/// # Errors
///
/// Returns an error if the ignore file exists but cannot be read, or if it
/// cannot be written.
pub fn ensure_exception(ignore_path: &Path, placeholder: &str) -> Result<bool> {
    let existing = match fs::read_to_string(ignore_path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("cannot read {}", ignore_path.display()));
        }
    };

    let exception = format!("!{placeholder}");
    if existing.lines().any(|line| line.trim() == exception) {
        return Ok(false);
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(&exception);
    updated.push('\n');

    fs::write(ignore_path, updated)
        .with_context(|| format!("cannot update {}", ignore_path.display()))?;
    Ok(true)
}
