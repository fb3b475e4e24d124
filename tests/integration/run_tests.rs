use dupesweep::actions::{LineConfirm, ScriptedConfirm};
use dupesweep::cleaner::Cleaner;
use dupesweep::config::CleanConfig;
use dupesweep::error::{ExitCode, RunError};
use dupesweep::output::Reporter;
use dupesweep::scanner::ScanError;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn run_declining(cleaner: &Cleaner) -> String {
    let mut reporter = Reporter::new(Vec::new(), false);
    cleaner
        .run(&mut ScriptedConfirm::always_decline(), &mut reporter)
        .unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn test_marked_duplicate_deleted_and_directory_compacted() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("hard mode")).unwrap();
    fs::write(dir.path().join("a.txt"), "X").unwrap();
    fs::write(dir.path().join("hard mode/b.txt"), "X").unwrap();

    let cleaner = Cleaner::new(CleanConfig::new(dir.path()));
    let mut prompts = Vec::new();
    let mut confirm = LineConfirm::new(Cursor::new("y\n"), &mut prompts);
    let mut reporter = Reporter::new(Vec::new(), false);
    let summary = cleaner.run(&mut confirm, &mut reporter).unwrap();
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    assert!(dir.path().join("a.txt").exists());
    assert!(!dir.path().join("hard mode").exists());
    assert!(dir.path().exists());

    assert_eq!(summary.scan.scanned, 2);
    assert_eq!(summary.duplicate_groups, 1);
    assert_eq!(summary.redundant_bytes, 1);
    assert_eq!(summary.deletions.deleted_count(), 1);
    assert_eq!(summary.deletions.bytes_freed(), 1);
    assert_eq!(summary.compaction.removed_count(), 1);
    assert_eq!(summary.exit_code(), ExitCode::Success);

    let root = summary.root.clone();
    assert!(text.contains(&format!(
        "Found duplication not in \"hard mode\" directory: {}",
        root.join("a.txt").display()
    )));
    assert!(text.contains("Found duplication in the \"hard mode\" directory: "));
    assert!(text.contains(&format!(
        "Directory {} is deleted.",
        root.join("hard mode").display()
    )));
    assert!(!text.contains("last remaining copy"));
}

#[test]
fn test_no_duplicates_no_prompts() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("hard mode")).unwrap();
    fs::write(dir.path().join("hard mode/one"), "1").unwrap();
    fs::write(dir.path().join("two"), "2").unwrap();

    let cleaner = Cleaner::new(CleanConfig::new(dir.path()));
    let mut confirm = ScriptedConfirm::always_accept();
    let mut reporter = Reporter::new(Vec::new(), false);
    let summary = cleaner.run(&mut confirm, &mut reporter).unwrap();

    assert_eq!(confirm.prompt_count(), 0);
    assert_eq!(summary.duplicate_groups, 0);
    assert!(dir.path().join("hard mode/one").exists());
    assert!(dir.path().join("two").exists());
}

#[test]
fn test_empty_root_is_kept() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();

    let cleaner = Cleaner::new(CleanConfig::new(dir.path()));
    let text = run_declining(&cleaner);

    assert!(dir.path().exists());
    assert!(!dir.path().join("a").exists());
    assert_eq!(text.matches("is deleted.").count(), 2);
}

#[test]
fn test_declining_everything_is_idempotent() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("hard mode")).unwrap();
    fs::write(dir.path().join("a.txt"), "same").unwrap();
    fs::write(dir.path().join("hard mode/b.txt"), "same").unwrap();
    fs::write(dir.path().join("hard mode/c.txt"), "same").unwrap();

    let cleaner = Cleaner::new(CleanConfig::new(dir.path()));
    let first = run_declining(&cleaner);
    let second = run_declining(&cleaner);

    assert_eq!(first, second);
    assert!(dir.path().join("hard mode/b.txt").exists());
    assert!(dir.path().join("hard mode/c.txt").exists());
}

#[test]
fn test_all_copies_marked_warns_before_last() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("hard mode")).unwrap();
    fs::write(dir.path().join("hard mode/1"), "only here").unwrap();
    fs::write(dir.path().join("hard mode/2"), "only here").unwrap();

    let cleaner = Cleaner::new(CleanConfig::new(dir.path()));
    let mut reporter = Reporter::new(Vec::new(), false);
    let summary = cleaner
        .run(&mut ScriptedConfirm::new([true, false]), &mut reporter)
        .unwrap();
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    assert_eq!(summary.deletions.deleted_count(), 1);
    assert_eq!(summary.deletions.declined_count(), 1);
    assert_eq!(text.matches("is the last remaining copy").count(), 1);
    assert!(dir.path().join("hard mode/2").exists());
}

#[test]
fn test_custom_marker() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("Backup")).unwrap();
    fs::create_dir(dir.path().join("hard mode")).unwrap();
    fs::write(dir.path().join("Backup/x"), "dup").unwrap();
    fs::write(dir.path().join("hard mode/x"), "dup").unwrap();

    let cleaner = Cleaner::new(CleanConfig::new(dir.path()).with_marker("backup"));
    let mut reporter = Reporter::new(Vec::new(), false);
    let summary = cleaner
        .run(&mut ScriptedConfirm::always_accept(), &mut reporter)
        .unwrap();

    assert_eq!(summary.deletions.deleted_count(), 1);
    assert!(!dir.path().join("Backup").exists());
    assert!(dir.path().join("hard mode/x").exists());
}

#[test]
fn test_missing_root_aborts() {
    let dir = tempdir().unwrap();
    let cleaner = Cleaner::new(CleanConfig::new(dir.path().join("absent")));
    let mut reporter = Reporter::new(Vec::new(), false);

    let err = cleaner
        .run(&mut ScriptedConfirm::always_accept(), &mut reporter)
        .unwrap_err();

    assert!(err.is_invalid_root());
    assert!(matches!(err, RunError::Scan(ScanError::RootNotFound(_))));
    assert!(reporter.into_inner().is_empty());
}

#[cfg(unix)]
mod unreadable {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    // Returns false when permissions are not enforced (running as root)
    fn make_unreadable(path: &Path) -> bool {
        fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
        fs::read(path).is_err()
    }

    fn setup() -> Option<tempfile::TempDir> {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("hard mode")).unwrap();
        fs::write(dir.path().join("a.txt"), "X").unwrap();
        fs::write(dir.path().join("hard mode/b.txt"), "X").unwrap();
        fs::write(dir.path().join("locked"), "secret").unwrap();
        make_unreadable(&dir.path().join("locked")).then_some(dir)
    }

    #[test]
    fn test_lenient_skips_and_reports_partial_success() {
        let Some(dir) = setup() else { return };

        let cleaner = Cleaner::new(CleanConfig::new(dir.path()));
        let mut reporter = Reporter::new(Vec::new(), false);
        let summary = cleaner
            .run(&mut ScriptedConfirm::always_accept(), &mut reporter)
            .unwrap();

        assert_eq!(summary.scan.skipped, 1);
        assert_eq!(summary.deletions.deleted_count(), 1);
        assert_eq!(summary.exit_code(), ExitCode::PartialSuccess);
    }

    #[test]
    fn test_strict_aborts_before_deleting() {
        let Some(dir) = setup() else { return };

        let cleaner = Cleaner::new(CleanConfig::new(dir.path()).with_strict(true));
        let mut confirm = ScriptedConfirm::always_accept();
        let mut reporter = Reporter::new(Vec::new(), false);
        let err = cleaner.run(&mut confirm, &mut reporter).unwrap_err();

        assert!(!err.is_invalid_root());
        assert!(matches!(err, RunError::Scan(ScanError::Hash(_))));
        assert_eq!(confirm.prompt_count(), 0);
        assert!(dir.path().join("hard mode/b.txt").exists());
    }
}
