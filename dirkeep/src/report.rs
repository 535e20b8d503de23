// src/report.rs
use crate::core::pipeline::{ApplyOutcome, RunPlan};
use crate::models::{RunSummary, ScanConfig};
use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

pub const LOG_FILE_NAME: &str = ".dirkeep.log";

/// Where the run log lives: an explicit override, else under the first root.
#[must_use]
pub fn log_path(config: &ScanConfig) -> PathBuf {
    config.log_file.clone().unwrap_or_else(|| {
        config.roots.first().map_or_else(
            || PathBuf::from(LOG_FILE_NAME),
            |root| root.join(LOG_FILE_NAME),
        )
    })
}

/// Appends one timestamped block for this run to the run log. Earlier
/// blocks are never rewritten.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or written.
pub fn append_run_log(
    config: &ScanConfig,
    plan: &RunPlan,
    outcome: &ApplyOutcome,
    vcs_available: bool,
    now: DateTime<Utc>,
) -> Result<()> {
    let path = log_path(config);
    let mut file = fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .with_context(|| format!("cannot open run log {}", path.display()))?;

    writeln!(file, "== dirkeep run {} ==", now.to_rfc3339())?;
    writeln!(
        file,
        "version control: {}",
        if vcs_available { "git" } else { "none" }
    )?;
    for err in &plan.skipped {
        writeln!(file, "[{}] skip {err}", now.to_rfc3339())?;
    }
    for event in &outcome.events {
        match &event.detail {
            Some(detail) => writeln!(
                file,
                "[{}] {} {} ({detail})",
                event.at.to_rfc3339(),
                event.verb,
                event.path.display()
            )?,
            None => writeln!(
                file,
                "[{}] {} {}",
                event.at.to_rfc3339(),
                event.verb,
                event.path.display()
            )?,
        }
    }
    for failure in &outcome.failures {
        writeln!(file, "[{}] fail {failure}", now.to_rfc3339())?;
    }
    writeln!(file, "{}", counts_line(&plan.summary))?;
    Ok(())
}

/// One-line rendering of every counter, used in the log and the summary.
#[must_use]
pub fn counts_line(summary: &RunSummary) -> String {
    format!(
        "scanned {}, empty {}, created {}, removed {}, kept {}, zombies {}, ghosts {}, skipped {}, failures {}",
        summary.scanned,
        summary.empty,
        summary.created,
        summary.removed,
        summary.kept,
        summary.zombies,
        summary.ghosts,
        summary.skipped,
        summary.failures
    )
}

/// Prints the human-facing summary to stdout.
pub fn print_summary(config: &ScanConfig, plan: &RunPlan) {
    let summary = &plan.summary;
    let roots = config.roots.len();
    println!(
        "dirkeep: scanned {} directories under {} root{}",
        summary.scanned,
        roots,
        if roots == 1 { "" } else { "s" }
    );
    println!(
        "  empty: {} (created {}, removed {}, kept {})",
        summary.empty, summary.created, summary.removed, summary.kept
    );

    println!(
        "  zombies (quiet over {} days): {}",
        config.zombie_threshold.num_days(),
        summary.zombies
    );
    for (rel, last_modified) in &plan.zombies {
        println!(
            "    - {} (last touched {})",
            rel.display(),
            last_modified.format("%Y-%m-%d")
        );
    }

    println!("  ghosts (referenced but untracked): {}", summary.ghosts);
    for rel in &plan.ghosts {
        println!("    - {}", rel.display());
    }

    if summary.skipped > 0 {
        println!("  skipped: {}", summary.skipped);
        for err in &plan.skipped {
            println!("    - {err}");
        }
    }
    if summary.failures > 0 {
        println!("  failures: {} (see the run log)", summary.failures);
    }
}
