//! Branch-list section.

use std::path::Path;

use glance_git::exec;
use glance_ui::styles::ColorMode;

pub fn title() -> &'static str {
    "branches"
}

/// All local branches with their tips and tracking info.
pub fn gather(color: ColorMode, cwd: &Path) -> exec::Result<String> {
    let color_arg = format!("--color={color}");
    exec::output(&["branch", "-vv", color_arg.as_str()], cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::testutil::{commit, git, init_repo};

    #[test]
    fn lists_branches_and_marks_current() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        git(tmp.path(), &["branch", "feature"]);

        let body = gather(ColorMode::Never, tmp.path()).unwrap();
        assert!(body.contains("* main"), "got: {body}");
        assert!(body.contains("feature"), "got: {body}");
    }
}
