//! Configuration scopes.

use std::path::{Path, PathBuf};

use glance_git::query;

use crate::ConfigError;

/// A configuration precedence level understood by `git config`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    /// All scopes, flattened with override precedence.
    #[default]
    All,
    /// The repository-local config file.
    Local,
    /// The user-global config file.
    Global,
    /// The system config file.
    System,
    /// An explicit config file.
    File(PathBuf),
}

impl Scope {
    /// The `git config` arguments selecting this scope.
    pub fn flag_args(&self) -> Vec<String> {
        match self {
            Scope::All => Vec::new(),
            Scope::Local => vec!["--local".to_string()],
            Scope::Global => vec!["--global".to_string()],
            Scope::System => vec!["--system".to_string()],
            Scope::File(path) => vec!["--file".to_string(), path.display().to_string()],
        }
    }

    /// Short name used in user-facing messages.
    pub fn name(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Local => "local",
            Scope::Global => "global",
            Scope::System => "system",
            Scope::File(_) => "file",
        }
    }

    /// Fails when the scope cannot apply to the working directory:
    /// `local` configuration only exists inside a repository.
    pub fn ensure_applies(&self, cwd: &Path) -> Result<(), ConfigError> {
        if matches!(self, Scope::Local) && !query::is_repository(cwd) {
            return Err(ConfigError::LocalOutsideRepository {
                dir: cwd.to_path_buf(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn flag_args_per_scope() {
        assert!(Scope::All.flag_args().is_empty());
        assert_eq!(Scope::Local.flag_args(), ["--local"]);
        assert_eq!(Scope::Global.flag_args(), ["--global"]);
        assert_eq!(Scope::System.flag_args(), ["--system"]);
        assert_eq!(
            Scope::File(PathBuf::from("/tmp/cfg")).flag_args(),
            ["--file", "/tmp/cfg"]
        );
    }

    #[test]
    fn local_scope_requires_repository() {
        let tmp = TempDir::new().unwrap();
        let err = Scope::Local.ensure_applies(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("'local' does not apply"));

        // Every other scope applies anywhere.
        assert!(Scope::All.ensure_applies(tmp.path()).is_ok());
        assert!(Scope::Global.ensure_applies(tmp.path()).is_ok());
    }
}
