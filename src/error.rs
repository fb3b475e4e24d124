//! Structured error handling and exit codes.

use std::io;

use serde::Serialize;

use crate::scanner::ScanError;

/// Exit codes for dupesweep.
///
/// - 0: Success (run completed, nothing failed)
/// - 1: General error (invalid root, strict-mode scan failure, terminal I/O)
/// - 2: Usage error (reported by clap before any work)
/// - 3: Partial success (run completed, but files were skipped or
///   deletions/directory removals failed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: the run completed without failures.
    Success = 0,
    /// General error: the run was aborted.
    GeneralError = 1,
    /// Usage error: bad command-line arguments.
    Usage = 2,
    /// Partial success: completed with some non-fatal errors.
    PartialSuccess = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::GeneralError => "DS001",
            Self::Usage => "DS002",
            Self::PartialSuccess => "DS003",
        }
    }
}

/// Errors that abort a run.
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    /// The root was invalid, or a file failed to scan in strict mode.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Writing the report or reading an answer failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// Whether the run was rejected before scanning started.
    #[must_use]
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::Scan(e) if e.is_invalid_root())
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DS001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
    /// Whether the root directory itself was rejected
    pub invalid_root: bool,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
            invalid_root: err
                .downcast_ref::<RunError>()
                .is_some_and(RunError::is_invalid_root),
        }
    }
}
