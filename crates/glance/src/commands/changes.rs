//! `glance changes` -- commits on HEAD since it diverged from a branch.

use anyhow::Result;

use glance_git::{exec, query};

use crate::cli::ChangesArgs;
use crate::context::RuntimeContext;

/// Execute the `glance changes` command.
pub fn run(ctx: &RuntimeContext, args: &ChangesArgs) -> Result<()> {
    let range = format!("{}..HEAD", args.branch);

    if args.count {
        println!("{}", query::count_commits(&range, &ctx.cwd)?);
    } else {
        let log = exec::output(&["log", "--oneline", range.as_str()], &ctx.cwd)?;
        print!("{log}");
    }
    Ok(())
}
