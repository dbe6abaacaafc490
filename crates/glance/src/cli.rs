//! Clap CLI definitions for the `glance` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// glance -- a combined view of git repository state.
#[derive(Parser, Debug)]
#[command(
    name = "glance",
    about = "A combined view of git repository state",
    long_about = "Composes git status, log, reflog, branch, and stash queries (plus any \
                  configured extension commands) into a single report of repository state.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a combined report of the working tree state.
    State(StateArgs),

    /// View and edit git's layered configuration.
    Settings(SettingsArgs),

    /// Show the commits on HEAD since it diverged from a branch.
    Changes(ChangesArgs),

    /// Show the upstream branch of a branch.
    Upstream(UpstreamArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),
}

// ---------------------------------------------------------------------------
// state
// ---------------------------------------------------------------------------

/// Arguments for `glance state`.
#[derive(Args, Debug, Clone)]
pub struct StateArgs {
    /// When to color output (auto, always, never).
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: String,

    /// Section density (compact, pretty).
    #[arg(short = 'f', long, default_value = "compact")]
    pub format: String,

    /// Number of recent commits to show (0 disables the section).
    #[arg(short = 'l', long, default_value_t = 10, value_name = "COUNT")]
    pub log_count: usize,

    /// Number of reflog entries to show (0 disables the section).
    #[arg(short = 'r', long, default_value_t = 2, value_name = "COUNT")]
    pub reflog_count: usize,

    /// Skip the status section.
    #[arg(long)]
    pub no_status: bool,

    /// Skip the branches section.
    #[arg(long)]
    pub no_branches: bool,

    /// Skip the stashes section.
    #[arg(long)]
    pub no_stashes: bool,

    /// Show stash and extension sections even when they are empty.
    #[arg(short = 'e', long)]
    pub show_empty: bool,

    /// Clear the screen before printing (TTY only).
    #[arg(short = 'c', long)]
    pub clear: bool,

    /// Extensions to leave out of the report.
    #[arg(short = 'i', long = "ignore", value_name = "EXTENSION")]
    pub ignore_extensions: Vec<String>,

    /// Section order, pipe-delimited (e.g. 'log|status'); overrides
    /// the glance.order setting.
    #[arg(long, value_name = "SECTIONS")]
    pub order: Option<String>,

    /// Extra arguments for an extension, as NAME=ARGS; ARGS is split
    /// with shell quoting rules.
    #[arg(short = 'O', long = "option", value_name = "NAME=ARGS")]
    pub options: Vec<String>,
}

// ---------------------------------------------------------------------------
// settings
// ---------------------------------------------------------------------------

/// Arguments for `glance settings`.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommands {
    /// Print a single configuration value.
    Get(GetArgs),

    /// List configuration entries with override precedence applied.
    List(ListArgs),

    /// Remove a section from the local, global, and system configs.
    Destroy(DestroyArgs),

    /// Drop empty sections and merge duplicates in a config file.
    Cleanup(CleanupArgs),
}

/// Scope selection shared by the settings subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Use the repository-local config.
    #[arg(long, group = "scope")]
    pub local: bool,

    /// Use the user-global config.
    #[arg(long, group = "scope")]
    pub global: bool,

    /// Use the system config.
    #[arg(long, group = "scope")]
    pub system: bool,

    /// Use an explicit config file.
    #[arg(long, group = "scope", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for `glance settings get`.
#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// The configuration key (e.g. 'glance.order').
    pub key: String,

    /// Value to fall back to when the key is unset.
    #[arg(long, value_name = "VALUE")]
    pub default: Option<String>,

    /// Parse the value as a boolean.
    #[arg(long = "bool", group = "coerce")]
    pub as_bool: bool,

    /// Parse the value as an integer.
    #[arg(long = "int", group = "coerce")]
    pub as_int: bool,

    /// Split the value on a delimiter, one item per line.
    #[arg(long = "list", group = "coerce", value_name = "DELIMITER")]
    pub as_list: Option<char>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// Arguments for `glance settings list`.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Limit to direct keys of a section (e.g. 'glance.extensions').
    pub section: Option<String>,

    /// Print only the number of entries.
    #[arg(long, group = "render")]
    pub count: bool,

    /// Print only the trailing key names.
    #[arg(long, group = "render")]
    pub keys: bool,

    /// Listing style (flat, pretty).
    #[arg(long, default_value = "flat")]
    pub format: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

/// Arguments for `glance settings destroy`.
#[derive(Args, Debug, Clone)]
pub struct DestroyArgs {
    /// The section to remove (e.g. 'glance').
    pub section: String,

    /// Only report what would be removed.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `glance settings cleanup`.
#[derive(Args, Debug, Clone)]
pub struct CleanupArgs {
    /// The config file to clean up.
    pub file: PathBuf,
}

// ---------------------------------------------------------------------------
// changes / upstream / completion
// ---------------------------------------------------------------------------

/// Arguments for `glance changes`.
#[derive(Args, Debug, Clone)]
pub struct ChangesArgs {
    /// The branch to compare HEAD against.
    pub branch: String,

    /// Print the number of commits instead of listing them.
    #[arg(long)]
    pub count: bool,
}

/// Arguments for `glance upstream`.
#[derive(Args, Debug, Clone)]
pub struct UpstreamArgs {
    /// The branch to look up (defaults to the current branch).
    pub branch: Option<String>,

    /// Prefix the upstream with its remote name.
    #[arg(short = 'r', long)]
    pub remote: bool,
}

/// Arguments for `glance completion`.
#[derive(Args, Debug, Clone)]
pub struct CompletionArgs {
    /// The shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}
