use dupesweep::cleaner::{Cleaner, ScanStats};
use dupesweep::config::CleanConfig;
use dupesweep::output::Reporter;
use dupesweep::scanner::{Hasher, Walker};
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();
    let mut reporter = Reporter::new(Vec::new(), false);

    let (index, stats) = Cleaner::new(CleanConfig::new(dir.path()))
        .scan(&mut reporter)
        .unwrap();

    assert!(index.is_empty());
    assert_eq!(stats, ScanStats::default());
    assert!(reporter.into_inner().is_empty());
}

#[test]
fn test_scan_nested_directories_every_file_once() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("one/two/three")).unwrap();
    fs::write(dir.path().join("top.txt"), "a").unwrap();
    fs::write(dir.path().join("one/mid.txt"), "b").unwrap();
    fs::write(dir.path().join("one/two/three/deep.txt"), "a").unwrap();

    let walker = Walker::new(dir.path()).unwrap();
    let records: Vec<_> = walker.walk().map(Result::unwrap).collect();

    let unique: HashSet<_> = records.iter().map(|r| r.path.clone()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(unique.len(), 3);
}

#[test]
fn test_scan_output_line_per_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "X").unwrap();
    fs::write(dir.path().join("b.txt"), "Y").unwrap();

    let mut reporter = Reporter::new(Vec::new(), false);
    Cleaner::new(CleanConfig::new(dir.path()))
        .scan(&mut reporter)
        .unwrap();
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    let root = Walker::new(dir.path()).unwrap().root().to_path_buf();
    let expected = format!(
        "Hash: {} path: {}\nHash: {} path: {}\n",
        dupesweep::scanner::hash_to_hex(&Hasher::hash_bytes(b"X")),
        root.join("a.txt").display(),
        dupesweep::scanner::hash_to_hex(&Hasher::hash_bytes(b"Y")),
        root.join("b.txt").display(),
    );
    assert_eq!(text, expected);
}

#[test]
fn test_scan_groups_identical_content_across_directories() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("x")).unwrap();
    fs::create_dir(dir.path().join("y")).unwrap();
    fs::write(dir.path().join("x/file"), "same bytes").unwrap();
    fs::write(dir.path().join("y/file"), "same bytes").unwrap();
    fs::write(dir.path().join("y/other"), "different").unwrap();

    let mut reporter = Reporter::new(Vec::new(), false);
    let (index, stats) = Cleaner::new(CleanConfig::new(dir.path()))
        .scan(&mut reporter)
        .unwrap();

    assert_eq!(stats.scanned, 3);
    assert_eq!(index.len(), 2);
    let group = index.get(&Hasher::hash_bytes(b"same bytes")).unwrap();
    assert!(group.paths[0].ends_with("x/file"));
    assert!(group.paths[1].ends_with("y/file"));
}

#[test]
fn test_scan_relative_root_yields_absolute_paths() {
    let walker = Walker::new(std::path::Path::new("src")).unwrap();
    assert!(walker.root().is_absolute());
    assert!(walker
        .walk()
        .filter_map(Result::ok)
        .all(|r| r.path.is_absolute()));
}
