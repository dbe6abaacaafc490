//! `glance settings` -- view and edit git's layered configuration.

use anyhow::{bail, Result};

use glance_config::{self as config, Coercion, ListRender, Scope, Value};

use crate::cli::{
    CleanupArgs, DestroyArgs, GetArgs, ListArgs, ScopeArgs, SettingsArgs, SettingsCommands,
};
use crate::context::RuntimeContext;

/// Execute the `glance settings` command.
pub fn run(ctx: &RuntimeContext, args: &SettingsArgs) -> Result<()> {
    match &args.command {
        SettingsCommands::Get(args) => run_get(ctx, args),
        SettingsCommands::List(args) => run_list(ctx, args),
        SettingsCommands::Destroy(args) => run_destroy(ctx, args),
        SettingsCommands::Cleanup(args) => run_cleanup(ctx, args),
    }
}

fn scope_of(args: &ScopeArgs) -> Scope {
    if args.local {
        Scope::Local
    } else if args.global {
        Scope::Global
    } else if args.system {
        Scope::System
    } else if let Some(file) = &args.file {
        Scope::File(file.clone())
    } else {
        Scope::All
    }
}

fn run_get(ctx: &RuntimeContext, args: &GetArgs) -> Result<()> {
    let coercion = if args.as_bool {
        Coercion::Bool
    } else if args.as_int {
        Coercion::Int
    } else if let Some(delimiter) = args.as_list {
        Coercion::DelimitedList(delimiter)
    } else {
        Coercion::Identity
    };

    let scope = scope_of(&args.scope);
    let raw = config::get(&args.key, &scope, &ctx.cwd)?.or_else(|| args.default.clone());

    // Unset with no default: print nothing, succeed.
    let Some(raw) = raw else { return Ok(()) };

    match coercion.apply(&args.key, &raw)? {
        Value::Str(value) => println!("{value}"),
        Value::Bool(value) => println!("{value}"),
        Value::Int(value) => println!("{value}"),
        Value::List(items) => {
            for item in items {
                println!("{item}");
            }
        }
    }
    Ok(())
}

fn run_list(ctx: &RuntimeContext, args: &ListArgs) -> Result<()> {
    let scope = scope_of(&args.scope);
    let entries = config::entries(args.section.as_deref(), &scope, &ctx.cwd)?;

    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let mode = if args.count {
        ListRender::Count
    } else if args.keys {
        ListRender::Keys
    } else {
        match args.format.as_str() {
            "pretty" => ListRender::Pretty,
            "flat" | "compact" => ListRender::Flat,
            other => bail!("unknown format '{other}'"),
        }
    };

    let output = config::render(&entries, &mode);
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn run_destroy(ctx: &RuntimeContext, args: &DestroyArgs) -> Result<()> {
    let reported = config::destroy(&args.section, args.dry_run, &ctx.cwd)?;
    for line in reported {
        println!("{line}");
    }
    Ok(())
}

fn run_cleanup(ctx: &RuntimeContext, args: &CleanupArgs) -> Result<()> {
    config::cleanup(&args.file)?;
    if !ctx.quiet {
        println!("Cleaned up {}", args.file.display());
    }
    Ok(())
}
