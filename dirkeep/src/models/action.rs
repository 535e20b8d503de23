// src/models/action.rs
use std::path::{Path, PathBuf};

/// The one mutation a directory can earn per run. Decided purely, applied
/// later; most directories earn none.
#[derive(Debug, Clone)]
pub enum Action {
    /// Write a placeholder file so the directory survives checkout.
    CreatePlaceholder { file: PathBuf, contents: String },
    /// Delete a placeholder this tool generated, now that real content
    /// exists next to it.
    RemovePlaceholder { file: PathBuf },
}

impl Action {
    /// The placeholder file the action touches.
    #[must_use]
    pub fn file(&self) -> &Path {
        match self {
            Self::CreatePlaceholder { file, .. } | Self::RemovePlaceholder { file } => file,
        }
    }

    /// Directory the action touches (the placeholder's parent).
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.file().parent().unwrap_or_else(|| self.file())
    }

    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::CreatePlaceholder { .. } => "create",
            Self::RemovePlaceholder { .. } => "remove",
        }
    }
}
