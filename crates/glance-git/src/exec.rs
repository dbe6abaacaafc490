//! Git command execution wrappers.
//!
//! A thin layer over `git` subprocess invocation so that the rest of
//! the workspace does not deal with `std::process::Command` directly.
//! Every helper runs synchronously and waits for the child to exit
//! before returning.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when running git commands.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be found or spawned.
    #[error("failed to execute git: {0}")]
    Spawn(#[from] std::io::Error),

    /// The git command exited with a non-zero status.
    #[error("git command failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr.
        stderr: String,
    },

    /// Git printed something other than what the caller expected.
    #[error("unexpected git output: {0}")]
    UnexpectedOutput(String),
}

/// A specialized `Result` type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Execute a `git` command in `cwd` and return its raw stdout.
///
/// Trailing newlines are kept, which matters for report bodies; use
/// [`output_trimmed`] when a single value is expected.
///
/// # Errors
///
/// Returns [`GitError::Spawn`] if `git` cannot be started, or
/// [`GitError::CommandFailed`] if it exits with a non-zero status.
pub fn output<S: AsRef<OsStr>>(args: &[S], cwd: &Path) -> Result<String> {
    let out = Command::new("git").args(args).current_dir(cwd).output()?;

    if !out.status.success() {
        return Err(GitError::CommandFailed {
            code: out.status.code(),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Execute a `git` command and return its trimmed stdout.
pub fn output_trimmed<S: AsRef<OsStr>>(args: &[S], cwd: &Path) -> Result<String> {
    Ok(output(args, cwd)?.trim().to_string())
}

/// Execute a `git` command that is allowed to fail.
///
/// Returns `Ok(None)` when the command exits non-zero or prints
/// nothing, `Ok(Some(trimmed stdout))` otherwise. Failing to spawn
/// `git` at all is still an error.
pub fn optional_output<S: AsRef<OsStr>>(args: &[S], cwd: &Path) -> Result<Option<String>> {
    let out = Command::new("git").args(args).current_dir(cwd).output()?;

    if !out.status.success() {
        return Ok(None);
    }

    let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
    Ok(if text.is_empty() { None } else { Some(text) })
}

/// Execute a `git` command for its exit status only.
///
/// Both output streams are routed to the null sink, which is released
/// as soon as the child exits.
pub fn status_ok<S: AsRef<OsStr>>(args: &[S], cwd: &Path) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
