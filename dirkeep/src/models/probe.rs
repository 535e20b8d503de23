// src/models/probe.rs
use std::path::PathBuf;

/// What a directory holds besides our own output. Separating this from the
/// raw emptiness check keeps reruns stable: a placeholder we wrote last time
/// must not count as content this time.
#[derive(Debug, Default)]
pub struct PlaceholderProbe {
    /// Placeholder carrying our trailer, if one exists here.
    pub generated: Option<PathBuf>,
    /// A file with a placeholder name but no trailer. Treated as user
    /// content and never touched.
    pub foreign: bool,
    /// Direct children that are not our generated placeholder.
    pub real_entries: usize,
}
