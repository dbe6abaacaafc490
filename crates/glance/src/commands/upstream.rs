//! `glance upstream` -- the upstream branch of a branch.

use anyhow::{anyhow, Result};

use glance_git::query;

use crate::cli::UpstreamArgs;
use crate::context::RuntimeContext;

/// Execute the `glance upstream` command.
///
/// Prints nothing (and succeeds) when the branch has no upstream
/// configured.
pub fn run(ctx: &RuntimeContext, args: &UpstreamArgs) -> Result<()> {
    if !query::is_repository(&ctx.cwd) {
        return Err(anyhow!("'{}' is not a git repository", ctx.cwd.display()));
    }

    let branch = match &args.branch {
        Some(branch) => branch.clone(),
        None => query::current_branch(&ctx.cwd)?
            .ok_or_else(|| anyhow!("HEAD is detached; name a branch explicitly"))?,
    };

    if let Some(upstream) = query::upstream(&branch, args.remote, &ctx.cwd)? {
        println!("{upstream}");
    }
    Ok(())
}
