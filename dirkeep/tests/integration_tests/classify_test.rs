// tests/integration_tests/classify_test.rs
use crate::common::{FakeVcs, create_test_file};
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use dirkeep::models::DirInsight;
use dirkeep::vcs::Vcs;
use dirkeep::{ExcludeSet, classify, scan};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn classify_all(root: &Path, vcs: &dyn Vcs, threshold: Duration, now: DateTime<Utc>) -> Vec<DirInsight> {
    let roots = vec![root.to_path_buf()];
    let excludes = ExcludeSet::default();
    scan(&roots, &excludes)
        .filter_map(Result::ok)
        .map(|insight| classify(insight, now, threshold, vcs))
        .collect()
}

#[test]
fn test_referenced_untracked_directory_surfaces_as_ghost() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "notes.md", "captures land in phantom/\n")?;
    fs::create_dir(dir.path().join("phantom"))?;
    fs::create_dir(dir.path().join("plain"))?;

    let mut vcs = FakeVcs::default();
    vcs.references
        .insert("phantom".to_owned(), vec![PathBuf::from("notes.md")]);

    let classified = classify_all(dir.path(), &vcs, Duration::days(180), Utc::now());
    let phantom = classified
        .iter()
        .find(|i| i.rel_path == Path::new("phantom"))
        .expect("phantom should be scanned");
    let plain = classified
        .iter()
        .find(|i| i.rel_path == Path::new("plain"))
        .expect("plain should be scanned");

    assert!(phantom.is_ghost);
    assert!(!plain.is_ghost);
    Ok(())
}

#[test]
fn test_tracking_clears_ghost_status() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "notes.md", "see assets/\n")?;
    create_test_file(dir.path(), "assets/logo.svg", "<svg/>")?;

    let mut vcs = FakeVcs::default();
    vcs.tracked.insert(dir.path().join("assets"));
    vcs.references
        .insert("assets".to_owned(), vec![PathBuf::from("notes.md")]);

    let classified = classify_all(dir.path(), &vcs, Duration::days(180), Utc::now());
    let assets = classified
        .iter()
        .find(|i| i.rel_path == Path::new("assets"))
        .expect("assets should be scanned");

    assert!(!assets.is_ghost);
    Ok(())
}

#[test]
fn test_zero_threshold_flags_populated_but_not_empty_directories() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "stuff/old.txt", "archived\n")?;
    fs::create_dir(dir.path().join("hollow"))?;

    // Everything was modified in the past, so a zero threshold makes any
    // populated directory a zombie. Empty ones never are.
    let classified = classify_all(dir.path(), &FakeVcs::default(), Duration::days(0), Utc::now());
    let stuff = classified
        .iter()
        .find(|i| i.rel_path == Path::new("stuff"))
        .expect("stuff should be scanned");
    let hollow = classified
        .iter()
        .find(|i| i.rel_path == Path::new("hollow"))
        .expect("hollow should be scanned");

    assert!(stuff.is_zombie);
    assert!(!hollow.is_zombie);
    Ok(())
}

#[test]
fn test_default_threshold_spares_fresh_directories() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "src/main.rs", "fn main() {}\n")?;

    let classified = classify_all(
        dir.path(),
        &FakeVcs::default(),
        Duration::days(180),
        Utc::now(),
    );
    assert!(classified.iter().all(|i| !i.is_zombie));
    Ok(())
}
