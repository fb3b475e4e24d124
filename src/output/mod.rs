//! Console reporting for a sweep run.
//!
//! [`Reporter`] owns the output sink and knows the wording of every line
//! the tool prints. It writes to any [`Write`] so runs can be captured in
//! tests.
//!
//! # Example
//!
//! ```
//! use dupesweep::output::Reporter;
//! use std::path::Path;
//!
//! let mut reporter = Reporter::new(Vec::new(), false);
//! reporter.directory_removed(Path::new("/data/hard mode")).unwrap();
//! let text = String::from_utf8(reporter.into_inner()).unwrap();
//! assert_eq!(text, "Directory /data/hard mode is deleted.\n");
//! ```

pub mod style;

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

pub use style::{paint, Style};

use crate::scanner::FileRecord;

/// Line-oriented console reporter.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    #[must_use]
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Write one line in the given style.
    pub fn line(&mut self, style: Style, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", paint(style, text, self.color))
    }

    /// Progress line for one scanned file.
    pub fn scanned(&mut self, record: &FileRecord) -> io::Result<()> {
        self.line(
            Style::Plain,
            format_args!(
                "Hash: {} path: {}",
                record.digest_hex(),
                record.path.display()
            ),
        )
    }

    /// A duplicate inside a marked directory, about to be offered for deletion.
    pub fn marked_duplicate(&mut self, marker: &str, digest_hex: &str, path: &Path) -> io::Result<()> {
        self.line(
            Style::Detected,
            format_args!(
                "Found duplication in the \"{marker}\" directory: {digest_hex} path: {}",
                path.display()
            ),
        )
    }

    /// A duplicate outside any marked directory. Reported only.
    pub fn unmarked_duplicate(&mut self, marker: &str, path: &Path) -> io::Result<()> {
        self.line(
            Style::Alert,
            format_args!(
                "Found duplication not in \"{marker}\" directory: {}",
                path.display()
            ),
        )
    }

    /// Warning that `path` is the last remaining copy of its content.
    pub fn last_copy(&mut self, path: &Path) -> io::Result<()> {
        self.line(
            Style::Caution,
            format_args!(
                "Warning: {} is the last remaining copy of this content",
                path.display()
            ),
        )
    }

    /// A failure tied to a path (deletion, scan skip, directory removal).
    pub fn failure(&mut self, path: &Path, reason: impl Display) -> io::Result<()> {
        self.line(
            Style::Alert,
            format_args!("Error: {} - {reason}.", path.display()),
        )
    }

    /// A directory removed by compaction.
    pub fn directory_removed(&mut self, path: &Path) -> io::Result<()> {
        self.line(
            Style::Plain,
            format_args!("Directory {} is deleted.", path.display()),
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consume the reporter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
