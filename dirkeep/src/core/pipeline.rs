// src/core/pipeline.rs
use crate::core::classifier::classify;
use crate::core::exclude::ExcludeSet;
use crate::core::ignore_file::ensure_exception;
use crate::core::placeholder::{filename, generate, probe};
use crate::core::scanner::scan;
use crate::models::{
    Action, ApplyEvent, DirInsight, DirRecord, PlaceholderProbe, RunError, RunSummary, ScanConfig,
};
use crate::utils::{dir_name, owning_root};
use crate::vcs::Vcs;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const IGNORE_FILE: &str = ".gitignore";

/// Everything one run intends to do, computed before anything is written.
#[derive(Debug, Default)]
pub struct RunPlan {
    pub actions: Vec<Action>,
    /// Root-relative path and last subtree modification per zombie.
    pub zombies: Vec<(PathBuf, DateTime<Utc>)>,
    /// Root-relative paths of ghost directories.
    pub ghosts: Vec<PathBuf>,
    pub skipped: Vec<RunError>,
    pub summary: RunSummary,
    /// One record per scanned directory; only filled when the tree diagram
    /// was requested.
    pub tree: Vec<DirRecord>,
    /// Ignore files to update after apply, with the placeholder filename
    /// each must except. Covers placeholders already standing on disk.
    pub exceptions: BTreeSet<(PathBuf, String)>,
    /// Exceptions for placeholders this run intends to create; each applies
    /// only once its placeholder actually lands.
    pub pending_exceptions: Vec<PendingException>,
}

/// Ignore exception tied to a placeholder that does not exist yet.
#[derive(Debug)]
pub struct PendingException {
    pub ignore_file: PathBuf,
    /// Placeholder filename the exception re-includes.
    pub name: String,
    /// Placeholder that must be created before the exception is warranted.
    pub placeholder: PathBuf,
}

/// What applying a plan actually did.
#[derive(Debug, Default)]
pub struct ApplyOutcome {
    pub events: Vec<ApplyEvent>,
    /// One entry per placeholder or ignore file that could not be written.
    pub failures: Vec<RunError>,
    pub created: u64,
    pub removed: u64,
}

/// Scans, classifies and decides without touching the filesystem beyond
/// reads. Unreadable directories are recorded and skipped.
///
/// # Errors
///
/// Fails only on configuration problems, currently an invalid exclude glob.
pub fn plan(config: &ScanConfig, vcs: &dyn Vcs, now: DateTime<Utc>) -> Result<RunPlan> {
    let excludes = ExcludeSet::from_globs(&config.exclude)?;
    let mut plan = RunPlan::default();

    for item in scan(&config.roots, &excludes) {
        let insight = match item {
            Ok(insight) => insight,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory");
                plan.summary.skipped = plan.summary.skipped.saturating_add(1);
                plan.skipped.push(err);
                continue;
            }
        };

        // Probed before anything is counted, so a directory that cannot be
        // read lands in the skipped bucket and nowhere else.
        let probed = match probe(&insight.path) {
            Ok(probed) => probed,
            Err(source) => {
                plan.summary.skipped = plan.summary.skipped.saturating_add(1);
                plan.skipped.push(RunError::Unreadable {
                    path: insight.path.clone(),
                    source,
                });
                continue;
            }
        };

        plan.summary.scanned = plan.summary.scanned.saturating_add(1);
        let insight = classify(insight, now, config.zombie_threshold, vcs);

        if insight.is_empty {
            plan.summary.empty = plan.summary.empty.saturating_add(1);
        }
        if insight.is_zombie {
            plan.summary.zombies = plan.summary.zombies.saturating_add(1);
            plan.zombies
                .push((insight.rel_path.clone(), insight.last_modified));
        }
        if insight.is_ghost {
            plan.summary.ghosts = plan.summary.ghosts.saturating_add(1);
            plan.ghosts.push(insight.rel_path.clone());
        }

        let action = decide(&insight, &probed, config, now);
        let mut keeps_placeholder = false;
        match &action {
            Some(Action::CreatePlaceholder { file, .. }) => {
                keeps_placeholder = true;
                let root = owning_root(&config.roots, &insight.path);
                if let (Some(root), Some(name)) = (root, file.file_name()) {
                    plan.pending_exceptions.push(PendingException {
                        ignore_file: root.join(IGNORE_FILE),
                        name: name.to_string_lossy().into_owned(),
                        placeholder: file.clone(),
                    });
                }
            }
            Some(Action::RemovePlaceholder { .. }) => {}
            None => {
                // A placeholder already standing is kept whatever happens
                // during apply; one still to be created only counts once it
                // lands.
                if let Some(name) = probed.generated.as_deref().and_then(Path::file_name) {
                    keeps_placeholder = true;
                    plan.summary.kept = plan.summary.kept.saturating_add(1);
                    if let Some(root) = owning_root(&config.roots, &insight.path) {
                        plan.exceptions
                            .insert((root.join(IGNORE_FILE), name.to_string_lossy().into_owned()));
                    }
                }
            }
        }

        if config.diagram {
            if let Some(root) = owning_root(&config.roots, &insight.path) {
                plan.tree.push(DirRecord {
                    root: root.clone(),
                    rel_path: insight.rel_path.clone(),
                    is_empty: insight.is_empty,
                    is_zombie: insight.is_zombie,
                    is_ghost: insight.is_ghost,
                    keeps_placeholder,
                });
            }
        }

        if let Some(action) = action {
            debug!(verb = action.verb(), path = %action.dir().display(), "planned");
            plan.actions.push(action);
        }
    }

    Ok(plan)
}

/// Chooses the action a directory earns, if any. Reads nothing and writes
/// nothing, so the choice is reproducible from its inputs.
///
/// Empty directories get a placeholder. Directories holding a generated
/// placeholder next to real content get it removed, unless cleanup is off.
/// A foreign file with a placeholder name counts as real content and is
/// never touched.
#[must_use]
pub fn decide(
    insight: &DirInsight,
    probed: &PlaceholderProbe,
    config: &ScanConfig,
    now: DateTime<Utc>,
) -> Option<Action> {
    if insight.is_empty {
        let file = insight.path.join(filename(config.mode));
        let contents = generate(&dir_name(&insight.path), config.mode, now);
        return Some(Action::CreatePlaceholder { file, contents });
    }

    if let Some(existing) = &probed.generated {
        if probed.real_entries > 0 && config.cleanup {
            return Some(Action::RemovePlaceholder {
                file: existing.clone(),
            });
        }
    }

    None
}

/// Applies a plan action by action, then brings ignore files up to date.
/// Failures are recorded per action and never abort the rest.
pub fn apply(plan: &RunPlan) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for action in &plan.actions {
        match action {
            Action::CreatePlaceholder { file, contents } => {
                match create_placeholder(file, contents) {
                    Ok(Step::Done) => {
                        outcome.created = outcome.created.saturating_add(1);
                        outcome.events.push(event("create", file, None));
                    }
                    Ok(Step::Left(reason)) => {
                        outcome.events.push(event("left", file, Some(reason.to_owned())));
                    }
                    Err(err) => {
                        let failure = RunError::WriteFailed {
                            path: file.clone(),
                            reason: err.to_string(),
                        };
                        warn!(error = %failure, "placeholder write failed");
                        outcome.failures.push(failure);
                    }
                }
            }
            Action::RemovePlaceholder { file } => match remove_placeholder(file) {
                Ok(Step::Done) => {
                    outcome.removed = outcome.removed.saturating_add(1);
                    outcome.events.push(event("remove", file, None));
                }
                Ok(Step::Left(reason)) => {
                    outcome.events.push(event("left", file, Some(reason.to_owned())));
                }
                Err(err) => {
                    let failure = RunError::WriteFailed {
                        path: file.clone(),
                        reason: err.to_string(),
                    };
                    warn!(error = %failure, "placeholder removal failed");
                    outcome.failures.push(failure);
                }
            },
        }
    }

    let created: BTreeSet<PathBuf> = outcome
        .events
        .iter()
        .filter(|event| event.verb == "create")
        .map(|event| event.path.clone())
        .collect();
    let mut exceptions = plan.exceptions.clone();
    for pending in &plan.pending_exceptions {
        if created.contains(&pending.placeholder) {
            exceptions.insert((pending.ignore_file.clone(), pending.name.clone()));
        }
    }

    for (ignore_path, name) in &exceptions {
        match ensure_exception(ignore_path, name) {
            Ok(true) => {
                outcome
                    .events
                    .push(event("excepted", ignore_path, Some(format!("!{name}"))));
            }
            Ok(false) => {}
            Err(err) => {
                let failure = RunError::WriteFailed {
                    path: ignore_path.clone(),
                    reason: format!("{err:#}"),
                };
                warn!(error = %failure, "ignore exception failed");
                outcome.failures.push(failure);
            }
        }
    }

    outcome
}

enum Step {
    Done,
    Left(&'static str),
}

/// Writes the placeholder only if nothing appeared at that path since the
/// plan was made.
fn create_placeholder(file: &Path, contents: &str) -> io::Result<Step> {
    let mut handle = match fs::OpenOptions::new().write(true).create_new(true).open(file) {
        Ok(handle) => handle,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(Step::Left("a file already sits at that path"));
        }
        Err(err) => return Err(err),
    };
    handle.write_all(contents.as_bytes())?;
    Ok(Step::Done)
}

/// Re-reads the file right before deleting so a placeholder edited since
/// the plan was made, or any file without our trailer, is left alone.
fn remove_placeholder(file: &Path) -> io::Result<Step> {
    let contents = match fs::read_to_string(file) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(Step::Left("already gone"));
        }
        Err(err) => return Err(err),
    };
    if !crate::core::placeholder::is_generated(&contents) {
        return Ok(Step::Left("trailer missing, leaving the file alone"));
    }
    match fs::remove_file(file) {
        Ok(()) => Ok(Step::Done),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Step::Left("already gone")),
        Err(err) => Err(err),
    }
}

fn event(verb: &'static str, path: &Path, detail: Option<String>) -> ApplyEvent {
    ApplyEvent {
        at: Utc::now(),
        verb,
        path: path.to_path_buf(),
        detail,
    }
}
