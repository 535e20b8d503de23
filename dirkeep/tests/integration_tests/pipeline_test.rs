// tests/integration_tests/pipeline_test.rs
use crate::common::{FakeVcs, config_for, create_test_file};
use anyhow::Result;
use chrono::Utc;
use dirkeep::models::{PlaceholderMode, ScanConfig};
use dirkeep::vcs::NoVcs;
use dirkeep::{apply, plan};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

#[test]
fn test_repeated_runs_converge_to_the_same_bytes() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir_all(dir.path().join("assets/images"))?;
    fs::create_dir(dir.path().join("logs"))?;
    create_test_file(dir.path(), "src/main.rs", "fn main() {}\n")?;
    let config = config_for(dir.path());

    apply(&plan(&config, &NoVcs, Utc::now())?);
    let keep_images = fs::read(dir.path().join("assets/images/.gitkeep"))?;
    let keep_logs = fs::read(dir.path().join("logs/.gitkeep"))?;
    let ignore = fs::read(dir.path().join(".gitignore"))?;

    for _ in 0..4 {
        let planned = plan(&config, &NoVcs, Utc::now())?;
        assert!(planned.actions.is_empty(), "steady state plans nothing");
        apply(&planned);
    }

    assert_eq!(fs::read(dir.path().join("assets/images/.gitkeep"))?, keep_images);
    assert_eq!(fs::read(dir.path().join("logs/.gitkeep"))?, keep_logs);
    assert_eq!(fs::read(dir.path().join(".gitignore"))?, ignore);
    Ok(())
}

#[test]
fn test_placeholder_retires_once_real_content_lands() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("assets"))?;
    let config = config_for(dir.path());

    apply(&plan(&config, &NoVcs, Utc::now())?);
    assert!(dir.path().join("assets/.gitkeep").is_file());

    create_test_file(dir.path(), "assets/logo.svg", "<svg/>")?;
    let outcome = apply(&plan(&config, &NoVcs, Utc::now())?);

    assert_eq!(outcome.removed, 1);
    assert!(!dir.path().join("assets/.gitkeep").exists());
    assert!(dir.path().join("assets/logo.svg").is_file());
    Ok(())
}

#[test]
fn test_no_cleanup_leaves_obsolete_placeholder() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("assets"))?;
    let config = ScanConfig {
        cleanup: false,
        ..config_for(dir.path())
    };

    apply(&plan(&config, &NoVcs, Utc::now())?);
    create_test_file(dir.path(), "assets/logo.svg", "<svg/>")?;

    let planned = plan(&config, &NoVcs, Utc::now())?;
    assert!(planned.actions.is_empty());
    apply(&planned);
    assert!(dir.path().join("assets/.gitkeep").is_file());
    Ok(())
}

#[test]
fn test_foreign_gitkeep_is_never_deleted() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "assets/.gitkeep", "handwritten marker\n")?;
    create_test_file(dir.path(), "assets/logo.svg", "<svg/>")?;
    let config = config_for(dir.path());

    let planned = plan(&config, &NoVcs, Utc::now())?;
    assert!(planned.actions.is_empty());
    apply(&planned);
    assert_eq!(
        fs::read_to_string(dir.path().join("assets/.gitkeep"))?,
        "handwritten marker\n"
    );
    Ok(())
}

#[test]
fn test_ghosts_reach_the_plan_via_vcs() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "notes.md", "drop captures into phantom/\n")?;
    fs::create_dir(dir.path().join("phantom"))?;
    let config = config_for(dir.path());

    let mut vcs = FakeVcs::default();
    vcs.references
        .insert("phantom".to_owned(), vec![PathBuf::from("notes.md")]);

    let planned = plan(&config, &vcs, Utc::now())?;
    assert_eq!(planned.ghosts, vec![PathBuf::from("phantom")]);
    assert_eq!(planned.summary.ghosts, 1);
    Ok(())
}

#[test]
fn test_summary_counts_a_mixed_tree() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("one"))?;
    fs::create_dir(dir.path().join("two"))?;
    create_test_file(dir.path(), "src/main.rs", "fn main() {}\n")?;
    let config = config_for(dir.path());

    let planned = plan(&config, &NoVcs, Utc::now())?;
    assert_eq!(planned.summary.scanned, 3);
    assert_eq!(planned.summary.empty, 2);
    assert_eq!(planned.summary.kept, 0, "nothing is standing before apply");
    assert!(planned.summary.is_clean());

    let outcome = apply(&planned);
    assert_eq!(outcome.created, 2);
    assert_eq!(outcome.removed, 0);
    assert!(outcome.failures.is_empty());
    Ok(())
}

#[test]
fn test_readme_mode_end_to_end() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir(dir.path().join("docs"))?;
    let config = ScanConfig {
        mode: PlaceholderMode::Readme,
        ..config_for(dir.path())
    };

    apply(&plan(&config, &NoVcs, Utc::now())?);
    let readme = fs::read_to_string(dir.path().join("docs/README.md"))?;
    assert!(readme.starts_with("# docs\n"));
    assert!(readme.contains("generated-by: dirkeep"));
    assert_eq!(
        fs::read_to_string(dir.path().join(".gitignore"))?,
        "!README.md\n"
    );
    Ok(())
}

#[test]
fn test_mixed_tree_creates_flags_and_reports() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir_all(dir.path().join("src/assets"))?;
    create_test_file(dir.path(), "src/utils/helpers.rs", "pub fn noop() {}\n")?;
    create_test_file(dir.path(), "src/old/archive.txt", "ancient\n")?;
    let two_hundred_days = Duration::from_secs(200 * 24 * 60 * 60);
    fs::File::options()
        .write(true)
        .open(dir.path().join("src/old/archive.txt"))?
        .set_modified(SystemTime::now() - two_hundred_days)?;

    let config = config_for(dir.path());
    let planned = plan(&config, &NoVcs, Utc::now())?;

    assert_eq!(planned.actions.len(), 1, "only src/assets needs a placeholder");
    assert_eq!(planned.summary.zombies, 1);
    assert_eq!(planned.zombies[0].0, PathBuf::from("src/old"));
    assert!(planned.ghosts.is_empty(), "no ghosts without a tracking mismatch");

    let outcome = apply(&planned);
    assert_eq!(outcome.created, 1);
    assert!(dir.path().join("src/assets/.gitkeep").is_file());
    Ok(())
}

#[test]
fn test_nested_chain_fills_only_the_empty_leaf() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir_all(dir.path().join("a/b/c"))?;
    let config = config_for(dir.path());

    let planned = plan(&config, &NoVcs, Utc::now())?;
    // Only the leaf is empty; a and b already contain a subdirectory.
    assert_eq!(planned.summary.empty, 1);
    let outcome = apply(&planned);
    assert_eq!(outcome.created, 1);
    assert!(dir.path().join("a/b/c/.gitkeep").is_file());
    assert!(!dir.path().join("a/.gitkeep").exists());
    Ok(())
}
