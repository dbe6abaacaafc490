//! `glance` -- a combined view of git repository state.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers. Fatal errors print to stderr and
//! exit non-zero; everything else goes to stdout.

mod cli;
mod commands;
mod context;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    let ctx = RuntimeContext::from_global_args(&cli.global);

    // Set up logging based on verbosity.
    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("glance=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::State(args) => commands::state::run(&ctx, &args),
        Commands::Settings(args) => commands::settings::run(&ctx, &args),
        Commands::Changes(args) => commands::changes::run(&ctx, &args),
        Commands::Upstream(args) => commands::upstream::run(&ctx, &args),
        Commands::Completion(args) => commands::completion::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
