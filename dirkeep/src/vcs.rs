// src/vcs.rs
//! Version control queries behind a trait, so classification works the same
//! against real git and against test doubles. Every git failure degrades to
//! "untracked, no references" rather than aborting the run.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::models::RunError;

/// What classification needs to know from version control.
pub trait Vcs {
    /// Whether any tracked file lives under `dir` (absolute path).
    fn is_tracked(&self, dir: &Path) -> bool;

    /// Files whose contents mention `needle`, relative to the repository.
    fn find_references(&self, needle: &str) -> Vec<PathBuf>;
}

/// Stand-in when no repository is found. Nothing is tracked and nothing is
/// referenced, so no directory can ever be a ghost.
pub struct NoVcs;

impl Vcs for NoVcs {
    fn is_tracked(&self, _dir: &Path) -> bool {
        false
    }

    fn find_references(&self, _needle: &str) -> Vec<PathBuf> {
        Vec::new()
    }
}

/// Talks to the `git` binary, rooted at the repository top level.
pub struct GitCli {
    toplevel: PathBuf,
}

impl GitCli {
    /// Locates the repository containing `start`, if any.
    #[must_use]
    pub fn detect(start: &Path) -> Option<Self> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(start)
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let toplevel = String::from_utf8_lossy(&output.stdout).trim().to_owned();
        if toplevel.is_empty() {
            return None;
        }
        Some(Self {
            toplevel: PathBuf::from(toplevel),
        })
    }

    fn git(&self, args: &[&str]) -> Option<std::process::Output> {
        debug!(?args, "invoking git");
        match Command::new("git")
            .args(args)
            .current_dir(&self.toplevel)
            .output()
        {
            Ok(output) => Some(output),
            Err(err) => {
                let failure = RunError::VcsUnavailable(err.to_string());
                warn!(error = %failure, "degrading to untracked, no references");
                None
            }
        }
    }
}

impl Vcs for GitCli {
    fn is_tracked(&self, dir: &Path) -> bool {
        let Ok(rel) = dir.strip_prefix(&self.toplevel) else {
            return false;
        };
        let Some(pathspec) = rel.to_str() else {
            return false;
        };
        let Some(output) = self.git(&["ls-files", "--", pathspec]) else {
            return false;
        };
        if !output.status.success() {
            warn!(dir = %dir.display(), "git ls-files failed, treating as untracked");
            return false;
        }
        !String::from_utf8_lossy(&output.stdout).trim().is_empty()
    }

    fn find_references(&self, needle: &str) -> Vec<PathBuf> {
        let Some(output) = self.git(&["grep", "-I", "-l", "-F", "--", needle]) else {
            return Vec::new();
        };
        // Exit code 1 with empty output just means no file mentions it.
        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if output.status.code() == Some(1) && stdout.trim().is_empty() {
                return Vec::new();
            }
            warn!(needle, "git grep failed, treating as unreferenced");
            return Vec::new();
        }
        parse_file_list(&String::from_utf8_lossy(&output.stdout))
    }
}

fn parse_file_list(stdout: &str) -> Vec<PathBuf> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
