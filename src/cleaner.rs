//! Sweep pipeline: scan → group → decide → delete → compact.
//!
//! # Overview
//!
//! [`Cleaner`] runs the stages strictly one after another on the calling
//! thread. The deletion pass starts only after the whole tree is scanned and
//! grouped, and compaction starts only after the deletion pass is over.
//!
//! # Scan failures
//!
//! By default a file that cannot be read is reported, counted in
//! [`ScanStats::skipped`] and left out of grouping. With
//! [`CleanConfig::strict`] the first such failure aborts the run before any
//! file is deleted.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::actions::LineConfirm;
//! use dupesweep::cleaner::Cleaner;
//! use dupesweep::config::CleanConfig;
//! use dupesweep::output::Reporter;
//!
//! let cleaner = Cleaner::new(CleanConfig::new("/data"));
//! let mut confirm = LineConfirm::stdio();
//! let mut reporter = Reporter::new(std::io::stdout(), true);
//! let summary = cleaner.run(&mut confirm, &mut reporter).unwrap();
//! println!("{}", summary.deletions.summary());
//! ```

use std::io::Write;
use std::path::PathBuf;

use crate::actions::{compact_empty_dirs, resolve_duplicates, CompactReport, Confirm};
use crate::actions::{DeletionPolicy, DeletionReport};
use crate::config::CleanConfig;
use crate::duplicates::{group_by_digest, DuplicateIndex};
use crate::error::{ExitCode, RunError};
use crate::output::Reporter;
use crate::scanner::{FileRecord, ScanError, Walker};

/// Counters from the scan stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files hashed successfully
    pub scanned: usize,
    /// Files (or directories) that could not be read and were left out
    pub skipped: usize,
}

/// Everything one run did.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub root: PathBuf,
    pub scan: ScanStats,
    /// Digests with two or more files
    pub duplicate_groups: usize,
    /// Files belonging to those groups
    pub duplicate_files: usize,
    /// Bytes that deleting every redundant copy would free
    pub redundant_bytes: u64,
    pub deletions: DeletionReport,
    pub compaction: CompactReport,
}

impl RunSummary {
    /// Whether any stage met a non-fatal failure.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.scan.skipped > 0
            || self.deletions.failed_count() > 0
            || !self.compaction.all_succeeded()
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.has_failures() {
            ExitCode::PartialSuccess
        } else {
            ExitCode::Success
        }
    }
}

/// One configured sweep.
#[derive(Debug, Clone)]
pub struct Cleaner {
    config: CleanConfig,
    policy: DeletionPolicy,
}

impl Cleaner {
    #[must_use]
    pub fn new(config: CleanConfig) -> Self {
        let policy = DeletionPolicy::new(&config.marker);
        Self { config, policy }
    }

    #[must_use]
    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Scan the root and group its files by digest.
    ///
    /// Prints one `Hash: ... path: ...` line per scanned file.
    ///
    /// # Errors
    ///
    /// - `RunError::Scan` if the root is invalid, or on the first unreadable
    ///   file in strict mode
    /// - `RunError::Io` if the report cannot be written
    pub fn scan<W: Write>(
        &self,
        reporter: &mut Reporter<W>,
    ) -> Result<(DuplicateIndex, ScanStats), RunError> {
        let walker = Walker::new(&self.config.root)?;
        self.scan_tree(&walker, reporter)
    }

    fn scan_tree<W: Write>(
        &self,
        walker: &Walker,
        reporter: &mut Reporter<W>,
    ) -> Result<(DuplicateIndex, ScanStats), RunError> {
        log::info!("Scanning {}", walker.root().display());
        self.collect_records(walker.walk(), reporter)
    }

    /// Report, count and group scan results; strict mode stops at the first error.
    fn collect_records<I, W>(
        &self,
        results: I,
        reporter: &mut Reporter<W>,
    ) -> Result<(DuplicateIndex, ScanStats), RunError>
    where
        I: IntoIterator<Item = Result<FileRecord, ScanError>>,
        W: Write,
    {
        let mut stats = ScanStats::default();
        let mut records: Vec<FileRecord> = Vec::new();

        for result in results {
            match result {
                Ok(record) => {
                    reporter.scanned(&record)?;
                    stats.scanned += 1;
                    records.push(record);
                }
                Err(e) if self.config.strict => return Err(e.into()),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    reporter.failure(e.path(), e.reason())?;
                    stats.skipped += 1;
                }
            }
        }

        let index = group_by_digest(records);
        log::info!(
            "Scanned {} file(s), {} skipped, {} duplicate group(s)",
            stats.scanned,
            stats.skipped,
            index.actionable().count()
        );
        Ok((index, stats))
    }

    /// Run every stage and summarize.
    ///
    /// # Errors
    ///
    /// See [`Cleaner::scan`]; later stages only fail on terminal I/O.
    pub fn run<C, W>(
        &self,
        confirm: &mut C,
        reporter: &mut Reporter<W>,
    ) -> Result<RunSummary, RunError>
    where
        C: Confirm + ?Sized,
        W: Write,
    {
        let walker = Walker::new(&self.config.root)?;
        let (index, scan) = self.scan_tree(&walker, reporter)?;
        let deletions = resolve_duplicates(&index, &self.policy, confirm, reporter)?;

        let root = walker.root().to_path_buf();
        log::info!("Compacting empty directories under {}", root.display());
        let compaction = compact_empty_dirs(&root, reporter)?;
        reporter.flush()?;

        Ok(RunSummary {
            root,
            scan,
            duplicate_groups: index.actionable().count(),
            duplicate_files: index.duplicate_files(),
            redundant_bytes: index.redundant_bytes(),
            deletions,
            compaction,
        })
    }
}
