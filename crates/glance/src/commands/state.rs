//! `glance state` -- print the combined working-tree report.

use std::collections::HashMap;

use anyhow::Result;

use glance_report::compose;
use glance_report::extensions::shell_split;
use glance_report::options::StateOptions;
use glance_report::section::Format;
use glance_ui::styles::ColorChoice;

use crate::cli::StateArgs;
use crate::context::RuntimeContext;

/// Execute the `glance state` command.
pub fn run(ctx: &RuntimeContext, args: &StateArgs) -> Result<()> {
    let color: ColorChoice = args.color.parse()?;
    let format: Format = args.format.parse()?;

    let opts = StateOptions {
        color,
        format,
        show_status: !args.no_status,
        log_count: args.log_count,
        reflog_count: args.reflog_count,
        show_branches: !args.no_branches,
        show_stashes: !args.no_stashes,
        show_empty: args.show_empty,
        clear: args.clear,
        ignore_extensions: args.ignore_extensions.clone(),
        extension_args: parse_extension_args(&args.options),
        order: args.order.as_deref().map(parse_order),
    };

    tracing::debug!(?opts, "composing state report");
    compose::run(&opts, &ctx.cwd)?;
    Ok(())
}

/// `NAME=ARGS` pairs become a name-to-tokenized-args map. A pair
/// without '=' means "no extra args" for that name.
fn parse_extension_args(pairs: &[String]) -> HashMap<String, Vec<String>> {
    let mut map = HashMap::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((name, rest)) => map.insert(name.to_string(), shell_split(rest)),
            None => map.insert(pair.clone(), Vec::new()),
        };
    }
    map
}

/// A pipe-delimited order argument becomes a section-name list.
fn parse_order(raw: &str) -> Vec<String> {
    raw.split('|').map(str::to_string).collect()
}
