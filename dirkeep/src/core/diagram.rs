// src/core/diagram.rs
use crate::models::{DirRecord, ScanConfig};
use anyhow::{Context as _, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DIAGRAM_FILE_NAME: &str = ".dirkeep-tree.txt";

/// Where the diagram is written: under the first root.
#[must_use]
pub fn diagram_path(config: &ScanConfig) -> PathBuf {
    config.roots.first().map_or_else(
        || PathBuf::from(DIAGRAM_FILE_NAME),
        |root| root.join(DIAGRAM_FILE_NAME),
    )
}

/// Draws the scanned directories as one box-drawing tree per root, with
/// status markers after each flagged directory.
#[must_use]
pub fn render(records: &[DirRecord]) -> String {
    let mut roots: Vec<&PathBuf> = Vec::new();
    for record in records {
        if !roots.contains(&&record.root) {
            roots.push(&record.root);
        }
    }

    let mut output = String::new();
    for (index, root) in roots.into_iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}/\n", root.display()));

        let mut children: BTreeMap<PathBuf, Vec<&DirRecord>> = BTreeMap::new();
        for record in records.iter().filter(|record| record.root == *root) {
            let parent = record
                .rel_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .to_path_buf();
            children.entry(parent).or_default().push(record);
        }
        for list in children.values_mut() {
            list.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        }

        render_level(&children, Path::new(""), "", &mut output);
    }
    output
}

fn render_level(
    children: &BTreeMap<PathBuf, Vec<&DirRecord>>,
    parent: &Path,
    prefix: &str,
    output: &mut String,
) {
    let Some(list) = children.get(parent) else {
        return;
    };
    for (index, record) in list.iter().enumerate() {
        let is_last = index == list.len().saturating_sub(1);
        let connector = if is_last { "└── " } else { "├── " };
        let child_prefix = if is_last { "    " } else { "│   " };

        let name = record.rel_path.file_name().map_or_else(
            || record.rel_path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        let markers = record.markers();
        if markers.is_empty() {
            output.push_str(&format!("{prefix}{connector}{name}/\n"));
        } else {
            output.push_str(&format!("{prefix}{connector}{name}/ {markers}\n"));
        }

        render_level(
            children,
            &record.rel_path,
            &format!("{prefix}{child_prefix}"),
            output,
        );
    }
}

/// Writes the rendered diagram, replacing any previous one.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write(path: &Path, records: &[DirRecord]) -> Result<()> {
    fs::write(path, render(records))
        .with_context(|| format!("cannot write tree diagram {}", path.display()))
}
