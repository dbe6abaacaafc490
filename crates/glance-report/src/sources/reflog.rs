//! Reference-log section.

use std::path::Path;

use glance_git::exec;
use glance_ui::styles::ColorMode;

pub fn title() -> &'static str {
    "reflog"
}

/// The most recent `count` reflog entries.
pub fn gather(count: usize, color: ColorMode, cwd: &Path) -> exec::Result<String> {
    let count_arg = count.to_string();
    let color_arg = format!("--color={color}");
    exec::output(&["reflog", "-n", count_arg.as_str(), color_arg.as_str()], cwd)
}
