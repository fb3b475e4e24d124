//! dupesweep - Interactive duplicate file sweeper
//!
//! Walks a directory tree, groups files by BLAKE3 content digest, offers
//! duplicates that live under a marked directory (default: `"hard mode"`)
//! for deletion one by one, then removes directories left empty.

pub mod actions;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, IsTerminal};

use bytesize::ByteSize;

use crate::actions::LineConfirm;
use crate::cleaner::Cleaner;
use crate::cli::Cli;
use crate::config::CleanConfig;
use crate::error::ExitCode;
use crate::output::Reporter;

/// Run the application for parsed CLI arguments.
///
/// Reads confirmations from stdin and writes the report to stdout.
///
/// # Errors
///
/// Returns an error when the run is aborted: invalid root, a scan failure in
/// strict mode, or a failure to talk to the terminal.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let config = CleanConfig::from_cli(&cli, io::stdout().is_terminal());
    log::debug!("Configuration: {:?}", config);

    let cleaner = Cleaner::new(config);
    let mut confirm = LineConfirm::stdio();
    let mut reporter = Reporter::new(io::stdout(), cleaner.config().color);

    let summary = cleaner.run(&mut confirm, &mut reporter)?;

    log::info!(
        "Done: {} file(s) scanned, {} duplicate group(s) ({} redundant), {} freed, {} director(ies) removed",
        summary.scan.scanned,
        summary.duplicate_groups,
        ByteSize(summary.redundant_bytes),
        ByteSize(summary.deletions.bytes_freed()),
        summary.compaction.removed_count()
    );
    if summary.has_failures() {
        log::warn!(
            "Completed with errors: {} skipped, {} deletion(s) failed, {} director(ies) not removed",
            summary.scan.skipped,
            summary.deletions.failed_count(),
            summary.compaction.failures.len()
        );
    }

    Ok(summary.exit_code())
}
