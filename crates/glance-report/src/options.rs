//! Options consumed by the state composer.

use std::collections::HashMap;

use glance_ui::styles::ColorChoice;

use crate::section::Format;

/// Everything the `state` command was asked to do.
///
/// Built once from the CLI arguments and handed through the whole
/// pipeline unchanged.
#[derive(Debug, Clone, Default)]
pub struct StateOptions {
    /// Requested color behavior; resolved against the terminal once
    /// per run.
    pub color: ColorChoice,
    /// Section rendering density.
    pub format: Format,
    /// Include the status section.
    pub show_status: bool,
    /// Number of log entries to show; 0 disables the section.
    pub log_count: usize,
    /// Number of reflog entries to show; 0 disables the section.
    pub reflog_count: usize,
    /// Include the branches section.
    pub show_branches: bool,
    /// Include the stashes section.
    pub show_stashes: bool,
    /// Show stash and extension sections even when they are empty.
    pub show_empty: bool,
    /// Clear the screen before printing (TTY only).
    pub clear: bool,
    /// Extension keys to leave out of the report.
    pub ignore_extensions: Vec<String>,
    /// Extra arguments per extension, keyed by display name, already
    /// tokenized.
    pub extension_args: HashMap<String, Vec<String>>,
    /// Explicit section order; `None` falls back to configuration.
    pub order: Option<Vec<String>>,
}
