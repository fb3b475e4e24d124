//! Command-line interface definitions for dupesweep.
//!
//! This module defines all CLI arguments using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Sweep duplicates out of "hard mode" directories under ~/games
//! dupesweep ~/games
//!
//! # Use a different marker and stop on the first unreadable file
//! dupesweep --marker "old saves" --strict ~/games
//!
//! # Verbose mode for debugging
//! dupesweep -vv ~/games
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_MARKER;

/// Interactive duplicate file sweeper.
///
/// Hashes every file under ROOT, reports duplicate content, offers the copies
/// that live under a marked directory for deletion one by one, then removes
/// directories left empty.
#[derive(Debug, Parser)]
#[command(name = "dupesweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to sweep
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Duplicates whose path contains this text (case-insensitive) are offered for deletion
    #[arg(short, long, value_name = "TEXT", default_value = DEFAULT_MARKER, value_parser = parse_marker)]
    pub marker: String,

    /// Abort the whole run on the first file that cannot be read
    #[arg(long)]
    pub strict: bool,

    /// Increase verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also set by a non-empty NO_COLOR)
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Print fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Validate a marker: it must contain something other than whitespace.
///
/// The marker is kept verbatim (inner and surrounding spaces are significant
/// for substring matching).
///
/// # Errors
///
/// Returns an error for an empty or whitespace-only marker, which would
/// match every path.
pub fn parse_marker(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("Marker cannot be empty".to_string());
    }
    Ok(s.to_string())
}
