// src/models/record.rs
use std::path::PathBuf;

/// One classified directory, kept around for the tree diagram.
#[derive(Debug, Clone)]
pub struct DirRecord {
    /// Root the directory was found under.
    pub root: PathBuf,
    /// Path relative to that root.
    pub rel_path: PathBuf,
    pub is_empty: bool,
    pub is_zombie: bool,
    pub is_ghost: bool,
    /// Whether a generated placeholder sits (or will sit) in the directory.
    pub keeps_placeholder: bool,
}

impl DirRecord {
    /// Status markers rendered after the directory name in the diagram.
    #[must_use]
    pub fn markers(&self) -> String {
        let mut parts = Vec::new();
        if self.keeps_placeholder {
            parts.push("[kept]");
        } else if self.is_empty {
            parts.push("[empty]");
        }
        if self.is_zombie {
            parts.push("[zombie]");
        }
        if self.is_ghost {
            parts.push("[ghost]");
        }
        parts.join(" ")
    }
}
