//! Shared helpers for tests that need a real temporary repository.

use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a git command in `dir`, panicking on failure. User and system
/// configuration are masked out so results only depend on the
/// temporary repository itself.
pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_GLOBAL", dir.join("gitconfig-global"))
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

/// A fresh repository on branch `main`, with identity configured but
/// no commits yet.
pub fn init_repo() -> TempDir {
    let tmp = TempDir::new().unwrap();
    git(tmp.path(), &["init", "--initial-branch=main"]);
    git(tmp.path(), &["config", "user.name", "Test"]);
    git(tmp.path(), &["config", "user.email", "test@example.com"]);
    tmp
}

/// Create an empty commit.
pub fn commit(dir: &Path, message: &str) {
    git(dir, &["commit", "--allow-empty", "-m", message]);
}
