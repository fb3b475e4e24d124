//! Deletion policy: which duplicates may be removed, and asking first.
//!
//! # Overview
//!
//! A duplicate is a deletion candidate only when its path contains the
//! marker text (case-insensitive, anywhere in the full path). For every
//! actionable group, members are visited in scan order:
//!
//! - marked members are reported, then offered for deletion through the
//!   injected [`Confirm`] capability, one prompt per file;
//! - unmarked members are reported and never touched.
//!
//! Nothing guarantees that a copy survives. If every member of a group is
//! marked, the operator can delete them all; the last one is preceded by a
//! warning.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::actions::{resolve_duplicates, DeletionPolicy, ScriptedConfirm};
//! use dupesweep::duplicates::group_by_digest;
//! use dupesweep::output::Reporter;
//! use dupesweep::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/data")).unwrap();
//! let index = group_by_digest(walker.walk().filter_map(Result::ok));
//!
//! let policy = DeletionPolicy::new("hard mode");
//! let mut confirm = ScriptedConfirm::always_decline();
//! let mut reporter = Reporter::new(std::io::stdout(), false);
//! let report = resolve_duplicates(&index, &policy, &mut confirm, &mut reporter).unwrap();
//! println!("{}", report.summary());
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bytesize::ByteSize;

use super::confirm::Confirm;
use super::delete::{remove_file, DeleteError};
use crate::config::DEFAULT_MARKER;
use crate::duplicates::{DuplicateGroup, DuplicateIndex};
use crate::output::Reporter;

/// Marker-based classification of duplicate paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPolicy {
    /// Marker as given, for display
    marker: String,
    /// Lower-cased marker used for matching
    needle: String,
}

impl Default for DeletionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl DeletionPolicy {
    #[must_use]
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
            needle: marker.to_lowercase(),
        }
    }

    /// The marker text as configured.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Whether `path` is a deletion candidate.
    #[must_use]
    pub fn is_marked(&self, path: &Path) -> bool {
        path.to_string_lossy().to_lowercase().contains(&self.needle)
    }
}

/// What happened to one member of a duplicate group.
#[derive(Debug)]
pub enum DeletionOutcome {
    /// Operator accepted and the file was removed.
    Deleted { bytes: u64 },
    /// Operator declined; the file stays.
    Declined,
    /// Unmarked duplicate: reported, never offered for deletion.
    ReportedOnly,
    /// Operator accepted but removal failed.
    Failed(DeleteError),
}

impl DeletionOutcome {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

/// Per-file outcomes of a policy pass, in processing order.
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub outcomes: Vec<(PathBuf, DeletionOutcome)>,
}

impl DeletionReport {
    fn record(&mut self, path: &Path, outcome: DeletionOutcome) {
        self.outcomes.push((path.to_path_buf(), outcome));
    }

    fn count(&self, pred: impl Fn(&DeletionOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }

    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.count(DeletionOutcome::is_deleted)
    }

    #[must_use]
    pub fn declined_count(&self) -> usize {
        self.count(|o| matches!(o, DeletionOutcome::Declined))
    }

    #[must_use]
    pub fn reported_count(&self) -> usize {
        self.count(|o| matches!(o, DeletionOutcome::ReportedOnly))
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, DeletionOutcome::Failed(_)))
    }

    /// Number of prompts issued (every marked member gets exactly one).
    #[must_use]
    pub fn prompted_count(&self) -> usize {
        self.outcomes.len() - self.reported_count()
    }

    /// Total bytes freed by successful deletions.
    #[must_use]
    pub fn bytes_freed(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|(_, o)| match o {
                DeletionOutcome::Deleted { bytes } => *bytes,
                _ => 0,
            })
            .sum()
    }

    /// Outcome recorded for `path`, if it was part of a duplicate group.
    #[must_use]
    pub fn outcome_for(&self, path: &Path) -> Option<&DeletionOutcome> {
        self.outcomes
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, o)| o)
    }

    /// Human-readable summary of the pass.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Deleted {} file(s) ({}), kept {}, reported {}, failed {}",
            self.deleted_count(),
            ByteSize(self.bytes_freed()),
            self.declined_count(),
            self.reported_count(),
            self.failed_count()
        )
    }
}

/// Apply the policy to every actionable group of `index`.
///
/// # Errors
///
/// Only terminal I/O errors (writing reports, reading answers) are returned.
/// Failed removals are recorded in the report and do not stop the pass.
pub fn resolve_duplicates<C, W>(
    index: &DuplicateIndex,
    policy: &DeletionPolicy,
    confirm: &mut C,
    reporter: &mut Reporter<W>,
) -> io::Result<DeletionReport>
where
    C: Confirm + ?Sized,
    W: Write,
{
    let mut report = DeletionReport::default();
    for group in index.actionable() {
        resolve_group(group, policy, confirm, reporter, &mut report)?;
    }

    log::info!("Policy pass complete: {}", report.summary());
    Ok(report)
}

/// Apply the policy to one group, appending outcomes to `report`.
///
/// # Errors
///
/// See [`resolve_duplicates`].
pub fn resolve_group<C, W>(
    group: &DuplicateGroup,
    policy: &DeletionPolicy,
    confirm: &mut C,
    reporter: &mut Reporter<W>,
    report: &mut DeletionReport,
) -> io::Result<()>
where
    C: Confirm + ?Sized,
    W: Write,
{
    if !group.is_actionable() {
        return Ok(());
    }

    let digest_hex = group.digest_hex();
    let mut surviving = group.len();

    for path in &group.paths {
        if !policy.is_marked(path) {
            reporter.unmarked_duplicate(policy.marker(), path)?;
            log::debug!("Reported only: {}", path.display());
            report.record(path, DeletionOutcome::ReportedOnly);
            continue;
        }

        reporter.marked_duplicate(policy.marker(), &digest_hex, path)?;
        if surviving == 1 {
            log::warn!("Offering last copy for deletion: {}", path.display());
            reporter.last_copy(path)?;
        }

        if !confirm.confirm(path)? {
            report.record(path, DeletionOutcome::Declined);
            continue;
        }

        let outcome = match remove_file(path) {
            Ok(result) => {
                surviving -= 1;
                DeletionOutcome::Deleted { bytes: result.size }
            }
            Err(e) => {
                if matches!(e, DeleteError::NotFound(_)) {
                    surviving -= 1;
                }
                reporter.failure(path, e.reason())?;
                DeletionOutcome::Failed(e)
            }
        };
        report.record(path, outcome);
    }

    Ok(())
}
