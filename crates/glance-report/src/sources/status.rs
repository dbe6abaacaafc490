//! Working-tree status section.

use std::path::Path;

use glance_git::{exec, query};

/// Message shown for a clean working tree when the clean-message
/// setting is on.
const CLEAN_MESSAGE: &str = "nothing to commit, working tree clean";

pub fn title() -> &'static str {
    "status"
}

/// The current branch name, used to accent the section title. Falls
/// back to `HEAD` when detached.
pub fn accent(cwd: &Path) -> exec::Result<String> {
    Ok(query::current_branch(cwd)?.unwrap_or_else(|| "HEAD".to_string()))
}

/// Short-format status of the working tree.
///
/// A clean tree produces no porcelain output; the clean message stands
/// in for it unless suppressed by configuration.
pub fn gather(show_clean_message: bool, cwd: &Path) -> exec::Result<String> {
    let out = exec::output(&["status", "--porcelain"], cwd)?;
    if out.is_empty() && show_clean_message {
        return Ok(format!("{CLEAN_MESSAGE}\n"));
    }
    Ok(out)
}

/// Full status output, used as the only section for a repository with
/// no commits yet.
pub fn gather_new_repository(cwd: &Path) -> exec::Result<String> {
    exec::output(&["status"], cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::testutil::{commit, init_repo};

    #[test]
    fn clean_tree_yields_clean_message() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        let body = gather(true, tmp.path()).unwrap();
        assert_eq!(body, "nothing to commit, working tree clean\n");
    }

    #[test]
    fn clean_tree_without_message_is_empty() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        let body = gather(false, tmp.path()).unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn dirty_tree_lists_changes() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        std::fs::write(tmp.path().join("new-file"), "contents\n").unwrap();
        let body = gather(true, tmp.path()).unwrap();
        assert!(body.contains("new-file"), "got: {body}");
    }

    #[test]
    fn accent_names_current_branch() {
        let tmp = init_repo();
        assert_eq!(accent(tmp.path()).unwrap(), "main");
    }

    #[test]
    fn new_repository_status_mentions_missing_history() {
        let tmp = init_repo();
        let body = gather_new_repository(tmp.path()).unwrap();
        assert!(body.contains("No commits yet"), "got: {body}");
    }
}
