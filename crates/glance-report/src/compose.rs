//! The state composer.
//!
//! Gathers every enabled section, applies the configured order,
//! concatenates the rendered text, and routes it to stdout or the
//! pager. There are exactly two terminal outcomes: a fatal abort
//! before any output, or one emission through one channel.

use std::path::{Path, PathBuf};

use thiserror::Error;

use glance_config::{self as config, ConfigError, Scope};
use glance_git::exec::GitError;
use glance_git::query;
use glance_ui::styles::ColorMode;
use glance_ui::{pager, terminal};

use crate::extensions;
use crate::options::StateOptions;
use crate::section;
use crate::sources::{branches, log, reflog, stashes, status};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that abort the whole report.
#[derive(Debug, Error)]
pub enum StateError {
    /// The working directory is not inside a git repository.
    #[error("'{}' is not a git repository", .0.display())]
    NotARepository(PathBuf),

    /// A built-in sub-query failed.
    #[error(transparent)]
    Git(#[from] GitError),

    /// Configuration could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// An insertion-ordered collection of rendered sections, keyed by name.
///
/// Inserting under an existing name replaces the content but keeps the
/// original position: the last writer wins on content. This is how an
/// extension whose display name collides with a built-in section
/// overrides it.
#[derive(Debug, Default)]
pub struct Report {
    sections: Vec<(String, String)>,
}

impl Report {
    pub fn insert(&mut self, name: &str, rendered: String) {
        match self.sections.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, content)) => *content = rendered,
            None => self.sections.push((name.to_string(), rendered)),
        }
    }

    /// Concatenate sections: names listed in `order` come first, in
    /// that order (unknown names are ignored); the rest follow in
    /// insertion order.
    pub fn concatenate(mut self, order: &[String]) -> String {
        let mut out = String::new();
        for name in order {
            if let Some(index) = self.sections.iter().position(|(existing, _)| existing == name) {
                out.push_str(&self.sections.remove(index).1);
            }
        }
        for (_, rendered) in self.sections {
            out.push_str(&rendered);
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose the full state report for the repository at `cwd`.
///
/// Returns the final text with the single trailing newline already
/// stripped.
pub fn compose(opts: &StateOptions, cwd: &Path) -> Result<String, StateError> {
    if !query::is_repository(cwd) {
        return Err(StateError::NotARepository(cwd.to_path_buf()));
    }

    let color = ColorMode::resolve(opts.color);
    let show_clean_message =
        config::get_bool("glance.status.show-clean-message", true, &Scope::All, cwd)?;

    let mut report = Report::default();

    if query::is_empty_repository(cwd) {
        // A repository with no commits gets a single tailored status
        // section, whatever else was requested.
        let accent = status::accent(cwd)?;
        let body = status::gather_new_repository(cwd)?;
        report.insert(
            status::title(),
            section::render(status::title(), Some(&accent), &body, opts.format, false, color),
        );
    } else {
        if opts.show_status {
            let accent = status::accent(cwd)?;
            let body = status::gather(show_clean_message, cwd)?;
            report.insert(
                status::title(),
                section::render(status::title(), Some(&accent), &body, opts.format, true, color),
            );
        }

        if opts.log_count > 0 {
            let body = log::gather(opts.log_count, color, cwd)?;
            report.insert(
                log::title(),
                section::render(log::title(), None, &body, opts.format, false, color),
            );
        }

        if opts.reflog_count > 0 {
            let body = reflog::gather(opts.reflog_count, color, cwd)?;
            report.insert(
                reflog::title(),
                section::render(reflog::title(), None, &body, opts.format, false, color),
            );
        }

        if opts.show_branches {
            let body = branches::gather(color, cwd)?;
            report.insert(
                branches::title(),
                section::render(branches::title(), None, &body, opts.format, false, color),
            );
        }

        if opts.show_stashes {
            let body = stashes::gather(color, cwd)?;
            report.insert(
                stashes::title(),
                section::render(stashes::title(), None, &body, opts.format, opts.show_empty, color),
            );
        }

        for key in extensions::discover(&opts.ignore_extensions, cwd)? {
            if let Some(ext) = extensions::invoke(&key, color, &opts.extension_args, cwd)? {
                let rendered =
                    section::render(&ext.name, None, &ext.body, opts.format, opts.show_empty, color);
                report.insert(&ext.name, rendered);
            }
        }
    }

    let order = match &opts.order {
        Some(order) => order.clone(),
        None => config::get_list("glance.order", '|', &Scope::All, cwd)?,
    };

    let mut text = report.concatenate(&order);
    // Strip exactly one trailing line terminator; println/the pager
    // supply the final one.
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Route the composed text to stdout or the pager.
///
/// The report prints directly when the terminal is tall enough for it
/// plus a prompt line and a spacer; otherwise it goes through the
/// pager. Without a TTY (or when the height probe fails) the pager
/// would be useless, so the text prints directly.
pub fn emit(text: &str, clear: bool) {
    let lines = text.lines().count();
    let height = terminal::height();

    if !terminal::is_tty() || height == 0 || fits_terminal(height, lines) {
        if clear && terminal::is_tty() {
            terminal::clear_screen();
        }
        println!("{text}");
    } else {
        pager::page(text);
    }
}

/// Whether a report of `lines` lines fits a terminal of `height` rows,
/// leaving one row for the prompt and one as a spacer.
fn fits_terminal(height: usize, lines: usize) -> bool {
    height >= lines + 2
}

/// Compose and emit in one step.
pub fn run(opts: &StateOptions, cwd: &Path) -> Result<(), StateError> {
    let text = compose(opts, cwd)?;
    emit(&text, opts.clear);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
