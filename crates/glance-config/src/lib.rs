//! Layered git configuration access for glance.
//!
//! Everything here shells out to `git config`; this crate adds typed
//! value coercion, precedence-flattened listing, section removal, and
//! a small config-file cleanup pass on top. There is no configuration
//! store of our own: git's local/global/system files are the only
//! source of truth, read fresh on every call.

mod coerce;
mod scope;
mod store;

pub use coerce::{Coercion, Value};
pub use scope::Scope;
pub use store::{cleanup, destroy, entries, get, get_as, get_bool, get_list, render, ListRender};

use std::path::PathBuf;

use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `local`-scoped operation was requested outside a repository.
    #[error("'{}' is not a git repository so 'local' does not apply", .dir.display())]
    LocalOutsideRepository {
        /// The working directory the operation ran in.
        dir: PathBuf,
    },

    /// A value could not be coerced to the requested type.
    #[error("cannot parse value '{value}' for key '{key}' as {wanted}")]
    Parse {
        /// The configuration key being read.
        key: String,
        /// The raw value git handed back.
        value: String,
        /// The target type name.
        wanted: &'static str,
    },

    /// The config file handed to `cleanup` does not exist.
    #[error("no such file: '{}'", .0.display())]
    NoSuchFile(PathBuf),

    /// The underlying git invocation failed.
    #[error(transparent)]
    Git(#[from] glance_git::exec::GitError),

    /// A config file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
