//! Runtime context for command execution.

use std::env;
use std::path::PathBuf;

use crate::cli::GlobalArgs;

/// State shared by every command handler: the directory the commands
/// operate on plus the global flags.
///
/// Constructed once in `main` after CLI parsing, before dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// The working directory all git invocations run in.
    pub cwd: PathBuf,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            cwd,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }
}
