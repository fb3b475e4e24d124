//! Removal of directories left empty after deletions.
//!
//! # Overview
//!
//! Compaction is a separate traversal that runs after the deletion pass.
//! The walk is contents-first: a directory is visited only after everything
//! below it, and its emptiness is checked at that moment. A chain of nested
//! directories that only contained deleted files therefore collapses in a
//! single pass.
//!
//! The root itself is never removed, even when it ends up empty.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::output::Reporter;
use crate::scanner::walk_error_reason;

/// Directories removed and failures met during compaction.
#[derive(Debug, Default)]
pub struct CompactReport {
    /// Removed directories, deepest first.
    pub removed: Vec<PathBuf>,
    /// Directories that could not be inspected or removed, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

impl CompactReport {
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Whether `path` is a directory with no entries.
///
/// # Errors
///
/// Returns the error from listing `path`.
pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Remove every empty directory below `root`, bottom-up.
///
/// Failures are reported and collected; they never stop the pass.
///
/// # Errors
///
/// Only errors writing to the reporter are returned.
pub fn compact_empty_dirs<W: Write>(
    root: &Path,
    reporter: &mut Reporter<W>,
) -> io::Result<CompactReport> {
    let mut report = CompactReport::default();

    let walk = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
        .sort_by_file_name();

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                log::warn!("Compaction skipped {}: {}", path.display(), e);
                let reason = walk_error_reason(&e);
                reporter.failure(&path, &reason)?;
                report.failures.push((path, reason));
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let result = is_empty_dir(path).and_then(|empty| {
            if empty {
                fs::remove_dir(path).map(|()| true)
            } else {
                Ok(false)
            }
        });

        match result {
            Ok(true) => {
                log::info!("Removed empty directory: {}", path.display());
                reporter.directory_removed(path)?;
                report.removed.push(path.to_path_buf());
            }
            Ok(false) => {}
            Err(e) => {
                log::warn!("Could not remove {}: {}", path.display(), e);
                reporter.failure(path, &e)?;
                report.failures.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    Ok(report)
}
