// tests/integration_tests/common.rs
use anyhow::Result;
use dirkeep::models::ScanConfig;
use dirkeep::vcs::Vcs;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn config_for(root: &Path) -> ScanConfig {
    ScanConfig {
        roots: vec![root.to_path_buf()],
        ..ScanConfig::default()
    }
}

/// In-memory stand-in for git, keyed the same way the real queries are.
#[derive(Default)]
pub struct FakeVcs {
    /// Absolute directory paths that count as tracked.
    pub tracked: HashSet<PathBuf>,
    /// Reference needle to the files mentioning it.
    pub references: HashMap<String, Vec<PathBuf>>,
}

impl Vcs for FakeVcs {
    fn is_tracked(&self, dir: &Path) -> bool {
        self.tracked.contains(dir)
    }

    fn find_references(&self, needle: &str) -> Vec<PathBuf> {
        self.references.get(needle).cloned().unwrap_or_default()
    }
}
