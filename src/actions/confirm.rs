//! Operator confirmation for deletions.
//!
//! The deletion policy never talks to the terminal directly. It asks a
//! [`Confirm`] implementation, which is either [`LineConfirm`] reading
//! answers line by line (the terminal in normal use) or
//! [`ScriptedConfirm`] replaying a fixed list of answers.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::{Path, PathBuf};

/// Prompt written before each answer is read.
pub const PROMPT: &str = "Confirm deletion (y/N): ";

/// Synchronous yes/no decision source for a single file.
pub trait Confirm {
    /// Ask whether `path` should be deleted. Blocks until an answer exists.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the prompt cannot be written or the answer
    /// cannot be read.
    fn confirm(&mut self, path: &Path) -> io::Result<bool>;
}

/// Whether one line of operator input accepts the deletion.
///
/// Only `y` or `Y` accept. The line terminator is stripped; any other
/// whitespace makes the answer a decline.
#[must_use]
pub fn is_affirmative(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']).eq_ignore_ascii_case("y")
}

/// Reads one answer per prompt from a line-oriented input.
#[derive(Debug)]
pub struct LineConfirm<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    #[must_use]
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl LineConfirm<StdinLock<'static>, Stdout> {
    /// Confirmation through the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, path: &Path) -> io::Result<bool> {
        write!(self.prompt_out, "{PROMPT}")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // End of input counts as a decline
            writeln!(self.prompt_out)?;
            log::debug!("No answer for {} (end of input)", path.display());
            return Ok(false);
        }

        let accepted = is_affirmative(&line);
        log::debug!(
            "Answer for {}: {}",
            path.display(),
            if accepted { "delete" } else { "keep" }
        );
        Ok(accepted)
    }
}

/// Replays queued answers, then falls back to a default.
///
/// Every path it is asked about is recorded, so callers can check exactly
/// which files were offered for deletion.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    default: bool,
    asked: Vec<PathBuf>,
}

impl ScriptedConfirm {
    /// Answer with `answers` in order, then `false` once they run out.
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            default: false,
            asked: Vec::new(),
        }
    }

    /// Decline every prompt.
    #[must_use]
    pub fn always_decline() -> Self {
        Self::default()
    }

    /// Accept every prompt.
    #[must_use]
    pub fn always_accept() -> Self {
        Self::default().with_default(true)
    }

    /// Answer used once the queue is empty.
    #[must_use]
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Paths prompted so far, in prompt order.
    #[must_use]
    pub fn asked(&self) -> &[PathBuf] {
        &self.asked
    }

    /// Number of prompts issued so far.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.asked.len()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, path: &Path) -> io::Result<bool> {
        self.asked.push(path.to_path_buf());
        Ok(self.answers.pop_front().unwrap_or(self.default))
    }
}
