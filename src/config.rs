//! Run configuration.
//!
//! A sweep is configured entirely from the command line; there is no
//! configuration file and no persisted state. [`CleanConfig`] is the
//! validated form handed to the pipeline.

use std::path::PathBuf;

use crate::cli::Cli;

/// Marker text used when none is given.
pub const DEFAULT_MARKER: &str = "hard mode";

/// Settings for one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    /// Directory to sweep
    pub root: PathBuf,
    /// Paths containing this text (case-insensitive) may be deleted
    pub marker: String,
    /// Abort on the first unreadable file instead of skipping it
    pub strict: bool,
    /// Emit ANSI colors on the report output
    pub color: bool,
}

impl CleanConfig {
    /// Defaults for `root`: default marker, lenient scan, no color.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            marker: DEFAULT_MARKER.to_string(),
            strict: false,
            color: false,
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Build from parsed CLI arguments.
    ///
    /// Color is enabled only when `--no-color` is absent and `stdout_is_tty`
    /// is true.
    #[must_use]
    pub fn from_cli(cli: &Cli, stdout_is_tty: bool) -> Self {
        Self::new(&cli.root)
            .with_marker(cli.marker.clone())
            .with_strict(cli.strict)
            .with_color(!cli.no_color && stdout_is_tty)
    }
}
