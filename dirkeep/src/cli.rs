// src/cli.rs
use anyhow::{Context as _, Result, bail};
use chrono::{Duration, Utc};
use clap::Parser;
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing::info;

use crate::core::diagram;
use crate::core::pipeline;
use crate::models::{DEFAULT_STALE_DAYS, PlaceholderMode, RunSummary, ScanConfig};
use crate::report;
use crate::vcs::{GitCli, NoVcs, Vcs};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directories to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    pub roots: Vec<PathBuf>,

    /// Apply the plan without asking for confirmation
    #[arg(short = 'z', long)]
    pub zen: bool,

    /// Placeholder flavor written into empty directories
    #[arg(short = 'm', long, value_enum, default_value_t = PlaceholderMode::Gitkeep)]
    pub mode: PlaceholderMode,

    /// Write a tree diagram of the scanned directories
    #[arg(short = 'd', long)]
    pub diagram: bool,

    /// Leave obsolete placeholders in place instead of removing them
    #[arg(long)]
    pub no_cleanup: bool,

    /// Extra directories to exclude (comma-separated globs)
    #[arg(short = 'e', long, default_value = "")]
    pub exclude: String,

    /// Days of silence before a populated directory counts as a zombie
    #[arg(short = 's', long, default_value_t = DEFAULT_STALE_DAYS)]
    pub stale_days: i64,

    /// Run log location (defaults to .dirkeep.log under the first root)
    #[arg(short = 'l', long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Validates the arguments and resolves them into a run configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a root does not exist or is not a directory, or
    /// if the staleness threshold is negative.
    pub fn into_config(self) -> Result<ScanConfig> {
        if self.stale_days < 0 {
            bail!("--stale-days must be zero or more, got {}", self.stale_days);
        }

        let mut roots = Vec::with_capacity(self.roots.len());
        for root in self.roots {
            let canonical = root
                .canonicalize()
                .with_context(|| format!("cannot use root {}", root.display()))?;
            if !canonical.is_dir() {
                bail!("root {} is not a directory", root.display());
            }
            roots.push(canonical);
        }

        let exclude = self
            .exclude
            .split(',')
            .map(str::trim)
            .filter(|glob| !glob.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(ScanConfig {
            roots,
            exclude,
            zombie_threshold: Duration::days(self.stale_days),
            mode: self.mode,
            cleanup: !self.no_cleanup,
            zen: self.zen,
            diagram: self.diagram,
            log_file: self.log_file,
        })
    }
}

/// Runs one full pass and returns the final counters.
///
/// # Errors
///
/// Returns an error on configuration problems or when a run artifact (run
/// log, diagram) cannot be written. Per-directory trouble is not an error
/// here; it lands in the summary instead.
pub fn run(args: Args) -> Result<RunSummary> {
    let config = args.into_config()?;
    let now = Utc::now();

    let (vcs, vcs_available): (Box<dyn Vcs>, bool) =
        match config.roots.first().and_then(|root| GitCli::detect(root)) {
            Some(git) => (Box::new(git), true),
            None => {
                info!("no version control detected, ghost checks are off");
                (Box::new(NoVcs), false)
            }
        };

    let mut planned = pipeline::plan(&config, vcs.as_ref(), now)?;

    if !planned.actions.is_empty() && !config.zen && !confirm(planned.actions.len())? {
        println!("nothing applied");
        report::print_summary(&config, &planned);
        return Ok(planned.summary);
    }

    let outcome = pipeline::apply(&planned);
    planned.summary.created = outcome.created;
    planned.summary.removed = outcome.removed;
    // Kept covers standing placeholders plus the ones that landed just now.
    planned.summary.kept = planned.summary.kept.saturating_add(outcome.created);
    planned.summary.failures = u64::try_from(outcome.failures.len()).unwrap_or(u64::MAX);

    report::append_run_log(&config, &planned, &outcome, vcs_available, now)?;
    if config.diagram {
        diagram::write(&diagram::diagram_path(&config), &planned.tree)?;
    }
    report::print_summary(&config, &planned);

    Ok(planned.summary)
}

fn confirm(pending: usize) -> Result<bool> {
    print!("apply {pending} action(s)? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
