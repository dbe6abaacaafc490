//! Recent-history section.

use std::path::Path;

use glance_git::exec;
use glance_ui::styles::ColorMode;

pub fn title() -> &'static str {
    "log"
}

/// The most recent `count` commits, one line each.
pub fn gather(count: usize, color: ColorMode, cwd: &Path) -> exec::Result<String> {
    let count_arg = count.to_string();
    let color_arg = format!("--color={color}");
    exec::output(
        &["log", "--oneline", "-n", count_arg.as_str(), color_arg.as_str()],
        cwd,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::testutil::{commit, init_repo};

    #[test]
    fn lists_recent_commits_most_recent_first() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        commit(tmp.path(), "second");

        let body = gather(10, ColorMode::Never, tmp.path()).unwrap();
        let lines: Vec<_> = body.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("second"));
        assert!(lines[1].ends_with("first"));
    }

    #[test]
    fn count_bounds_the_output() {
        let tmp = init_repo();
        commit(tmp.path(), "first");
        commit(tmp.path(), "second");
        commit(tmp.path(), "third");

        let body = gather(2, ColorMode::Never, tmp.path()).unwrap();
        assert_eq!(body.lines().count(), 2);
    }
}
