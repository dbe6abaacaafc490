//! Read-only repository queries.
//!
//! Small questions the rest of glance asks about a repository: is this
//! a repository at all, does it have history yet, what branch is
//! checked out, what is a branch tracking, how many commits are in a
//! range.

use std::path::{Path, PathBuf};

use crate::exec::{self, GitError, Result};

/// Walk up the directory tree from `start` looking for a `.git`
/// directory (or `.git` file, as used by worktrees and submodules).
///
/// Returns the repository root, or `None` if the filesystem root is
/// reached without finding one.
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;

    let mut current = start.as_path();
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => break,
        }
    }

    None
}

/// Whether `path` is inside a git repository.
pub fn is_repository(path: &Path) -> bool {
    find_repository_root(path).is_some()
}

/// Whether the repository has no commits yet.
///
/// Asks for the most recent log entry with both streams suppressed; a
/// failure means there is no history to show.
pub fn is_empty_repository(cwd: &Path) -> bool {
    !exec::status_ok(&["log", "--oneline", "-1"], cwd)
}

/// The currently checked-out branch, or `None` when HEAD is detached.
///
/// Works in a repository without commits, where `rev-parse` would not.
pub fn current_branch(cwd: &Path) -> Result<Option<String>> {
    exec::optional_output(&["symbolic-ref", "--quiet", "--short", "HEAD"], cwd)
}

/// The upstream branch configured for `branch`, as its short name.
///
/// With `include_remote`, the tracking remote is prefixed
/// (`origin/main` instead of `main`). Returns `None` when the branch
/// has no upstream configured.
pub fn upstream(branch: &str, include_remote: bool, cwd: &Path) -> Result<Option<String>> {
    let merge_key = format!("branch.{branch}.merge");
    let Some(merge_ref) =
        exec::optional_output(&["config", "--local", merge_key.as_str()], cwd)?
    else {
        return Ok(None);
    };

    let short = merge_ref
        .rsplit('/')
        .next()
        .unwrap_or(merge_ref.as_str())
        .to_string();

    if include_remote {
        let remote_key = format!("branch.{branch}.remote");
        if let Some(remote) =
            exec::optional_output(&["config", "--local", remote_key.as_str()], cwd)?
        {
            return Ok(Some(format!("{remote}/{short}")));
        }
    }

    Ok(Some(short))
}

/// Number of commits in a revision range (e.g. `main..HEAD`).
pub fn count_commits(range: &str, cwd: &Path) -> Result<usize> {
    let count = exec::output_trimmed(&["rev-list", "--count", range], cwd)?;
    count
        .parse()
        .map_err(|_| GitError::UnexpectedOutput(count.clone()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::process::{Command, Stdio};
    use tempfile::TempDir;

    /// Run a git command in `dir`, panicking on failure. User and
    /// system configuration are masked out so results only depend on
    /// the temporary repository itself.
    fn git(dir: &Path, args: &[&str]) {
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

    fn init_repo() -> TempDir {
        let tmp = TempDir::new().unwrap();
        git(tmp.path(), &["init", "--initial-branch=main"]);
        git(tmp.path(), &["config", "user.name", "Test"]);
        git(tmp.path(), &["config", "user.email", "test@example.com"]);
        tmp
    }

    fn commit(dir: &Path, message: &str) {
        git(dir, &["commit", "--allow-empty", "-m", message]);
    }

    #[test]
    fn find_repository_root_in_fresh_repo() {
        let tmp = init_repo();
        let root = find_repository_root(tmp.path()).expect("should find root");
        assert_eq!(root, tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn is_repository_false_for_plain_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(!is_repository(tmp.path()));
    }

    #[test]
    fn empty_repository_detection() {
        let tmp = init_repo();
        assert!(is_empty_repository(tmp.path()));
        commit(tmp.path(), "first");
        assert!(!is_empty_repository(tmp.path()));
    }

    #[test]
    fn current_branch_in_empty_repo() {
        let tmp = init_repo();
        let branch = current_branch(tmp.path()).unwrap();
        assert_eq!(branch.as_deref(), Some("main"));
    }

    #[test]
    fn upstream_reads_branch_config() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        git(tmp.path(), &["config", "branch.main.merge", "refs/heads/trunk"]);
        git(tmp.path(), &["config", "branch.main.remote", "origin"]);

        let plain = upstream("main", false, tmp.path()).unwrap();
        assert_eq!(plain.as_deref(), Some("trunk"));

        let with_remote = upstream("main", true, tmp.path()).unwrap();
        assert_eq!(with_remote.as_deref(), Some("origin/trunk"));
    }

    #[test]
    fn upstream_none_without_tracking() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        assert_eq!(upstream("main", false, tmp.path()).unwrap(), None);
    }

    #[test]
    fn count_commits_over_range() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        git(tmp.path(), &["branch", "base"]);
        commit(tmp.path(), "second");
        commit(tmp.path(), "third");
        assert_eq!(count_commits("base..HEAD", tmp.path()).unwrap(), 2);
    }
}
