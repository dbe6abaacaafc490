//! Color handling.
//!
//! The resolved [`ColorMode`] is an explicit value threaded through the
//! report pipeline; nothing here keeps process-global color state.

use std::fmt;
use std::str::FromStr;

use owo_colors::OwoColorize;
use thiserror::Error;

use crate::terminal;

// ---------------------------------------------------------------------------
// Color choice (pre-resolution)
// ---------------------------------------------------------------------------

/// The user's color request, before resolution against the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Raised for a color argument outside `auto`/`always`/`never`.
#[derive(Debug, Error)]
#[error("unknown color mode '{0}'")]
pub struct UnknownColorChoice(String);

impl FromStr for ColorChoice {
    type Err = UnknownColorChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(UnknownColorChoice(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Color mode (post-resolution)
// ---------------------------------------------------------------------------

/// The color mode fixed for the remainder of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
}

impl ColorMode {
    /// Resolve a request against the output terminal: `auto` becomes
    /// `always` only when stdout is a TTY.
    pub fn resolve(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
            ColorChoice::Auto => {
                if terminal::is_tty() {
                    ColorMode::Always
                } else {
                    ColorMode::Never
                }
            }
        }
    }

    /// The value passed to subprocesses as `--color=<mode>`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Styling
// ---------------------------------------------------------------------------

/// Style a section title: green when color is enabled, plain otherwise.
pub fn title(text: &str, mode: ColorMode) -> String {
    match mode {
        ColorMode::Always => text.green().to_string(),
        ColorMode::Never => text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
