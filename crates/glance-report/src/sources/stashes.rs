//! Stash-list section.

use std::path::Path;

use glance_git::exec;
use glance_ui::styles::ColorMode;

pub fn title() -> &'static str {
    "stashes"
}

/// All stash entries, one line each.
pub fn gather(color: ColorMode, cwd: &Path) -> exec::Result<String> {
    let color_arg = format!("--color={color}");
    exec::output(&["stash", "list", color_arg.as_str()], cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::testutil::{commit, git, init_repo};

    #[test]
    fn empty_without_stashes() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        assert_eq!(gather(ColorMode::Never, tmp.path()).unwrap(), "");
    }

    #[test]
    fn lists_stash_entries() {
        let tmp = init_repo();
        std::fs::write(tmp.path().join("tracked"), "one\n").unwrap();
        git(tmp.path(), &["add", "tracked"]);
        git(tmp.path(), &["commit", "-m", "first"]);
        std::fs::write(tmp.path().join("tracked"), "two\n").unwrap();
        git(tmp.path(), &["stash", "push", "-m", "wip"]);

        let body = gather(ColorMode::Never, tmp.path()).unwrap();
        assert!(body.contains("stash@{0}"), "got: {body}");
    }
}
