//! Output styles for console reporting.
//!
//! Every line the tool prints is tagged with a [`Style`]; [`paint`] turns
//! the style into terminal colors when color is enabled.

use std::fmt::Display;

use yansi::Paint;

/// Visual style of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Uncolored progress output (scan lines, removed directories).
    Plain,
    /// Duplicate found in a marked directory (green).
    Detected,
    /// Duplicate outside a marked directory, or a failure (red).
    Alert,
    /// Warning before an irreversible step (yellow).
    Caution,
}

/// Render `text` in `style`. With `color` off the text is returned unchanged.
#[must_use]
pub fn paint(style: Style, text: impl Display, color: bool) -> String {
    if !color {
        return text.to_string();
    }

    let text = text.to_string();
    match style {
        Style::Plain => text,
        Style::Detected => text.green().to_string(),
        Style::Alert => text.red().to_string(),
        Style::Caution => text.yellow().bold().to_string(),
    }
}
