//! User-configured extension sections.
//!
//! Extensions are external commands registered under the
//! `glance.extensions` config section. Each contributes one section to
//! the report; a failing extension only affects its own section, never
//! the rest of the report.

use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use glance_config::{self as config, ConfigError, Scope};
use glance_ui::styles::ColorMode;

/// The config section extensions are registered under. A key
/// `glance.extensions.<key>` holds the command; the optional
/// `glance.extensions.<key>.name` overrides the section title.
const EXTENSIONS_SECTION: &str = "glance.extensions";

/// One invoked extension, ready to become a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSection {
    /// Display name: the `.name` override, or the key.
    pub name: String,
    /// Captured stdout, or captured stderr when the command failed.
    pub body: String,
    /// Whether the command exited successfully.
    pub succeeded: bool,
}

/// Enumerate configured extension keys, minus the caller's ignore
/// list. The order is lexicographic, so repeated runs agree.
pub fn discover(ignore: &[String], cwd: &Path) -> Result<Vec<String>, ConfigError> {
    let entries = config::entries(Some(EXTENSIONS_SECTION), &Scope::All, cwd)?;
    Ok(entries
        .keys()
        .filter_map(|key| key.rsplit('.').next())
        .map(str::to_string)
        .filter(|key| !ignore.contains(key))
        .collect())
}

/// Look up and run one extension.
///
/// The command string is tokenized, given a `--color=<mode>` flag, and
/// extended with any extra arguments registered for the extension's
/// display name. A missing command value is a configuration error for
/// this extension only: it is logged and `None` is returned so the
/// rest of the report can proceed.
pub fn invoke(
    key: &str,
    color: ColorMode,
    extra_args: &HashMap<String, Vec<String>>,
    cwd: &Path,
) -> Result<Option<ExtensionSection>, ConfigError> {
    let command_key = format!("{EXTENSIONS_SECTION}.{key}");
    let Some(command) = config::get(&command_key, &Scope::All, cwd)? else {
        tracing::warn!(extension = key, "no command configured, skipping");
        return Ok(None);
    };

    let name_key = format!("{command_key}.name");
    let name = config::get(&name_key, &Scope::All, cwd)?.unwrap_or_else(|| key.to_string());

    let mut argv = shell_split(&command);
    if argv.is_empty() {
        tracing::warn!(extension = key, "command is blank, skipping");
        return Ok(None);
    }
    argv.push(format!("--color={color}"));
    if let Some(extra) = extra_args.get(&name) {
        argv.extend(extra.iter().cloned());
    }

    let section = match Command::new(&argv[0]).args(&argv[1..]).current_dir(cwd).output() {
        Ok(out) => {
            let succeeded = out.status.success();
            let body = if succeeded { &out.stdout } else { &out.stderr };
            ExtensionSection {
                name,
                body: String::from_utf8_lossy(body).into_owned(),
                succeeded,
            }
        }
        // A command that cannot even spawn is still a soft failure:
        // the error text becomes the section body.
        Err(err) => ExtensionSection {
            name,
            body: format!("{err}\n"),
            succeeded: false,
        },
    };

    Ok(Some(section))
}

/// Split a command string using POSIX-like shell rules.
///
/// Whitespace separates tokens, single quotes are literal, double
/// quotes allow backslash escapes, and a bare backslash escapes the
/// next character. Exact quoting is part of the observable contract:
/// `-o "1 2"` must split into `-o` and `1 2`.
pub fn shell_split(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some('\'') => {
                if c == '\'' {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            Some(_) => match c {
                '"' => quote = None,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\' | '$' | '`')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => current.push('\\'),
                },
                _ => current.push(c),
            },
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_token = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                        in_token = true;
                    }
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::testutil::{git, init_repo};
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_plain_words() {
        assert_eq!(shell_split("git changes --count"), strings(&["git", "changes", "--count"]));
    }

    #[test]
    fn split_preserves_double_quoted_groups() {
        assert_eq!(shell_split(r#"-o "1 2""#), strings(&["-o", "1 2"]));
    }

    #[test]
    fn split_preserves_single_quoted_groups() {
        assert_eq!(
            shell_split("sh -c 'echo boom >&2; exit 3'"),
            strings(&["sh", "-c", "echo boom >&2; exit 3"])
        );
    }

    #[test]
    fn split_handles_escapes_outside_quotes() {
        assert_eq!(shell_split(r"a\ b c"), strings(&["a b", "c"]));
    }

    #[test]
    fn split_handles_escaped_quote_inside_double_quotes() {
        assert_eq!(shell_split(r#""say \"hi\"""#), strings(&[r#"say "hi""#]));
    }

    #[test]
    fn split_quoted_empty_token() {
        assert_eq!(shell_split("a '' b"), strings(&["a", "", "b"]));
    }

    #[test]
    fn split_empty_input() {
        assert!(shell_split("").is_empty());
        assert!(shell_split("   ").is_empty());
    }

    #[test]
    fn discover_sorts_and_filters() {
        let tmp = init_repo();
        git(tmp.path(), &["config", "glance.extensions.zeta", "echo z"]);
        git(tmp.path(), &["config", "glance.extensions.alpha", "echo a"]);
        git(tmp.path(), &["config", "glance.extensions.mid", "echo m"]);

        let all = discover(&[], tmp.path()).unwrap();
        assert_eq!(all, strings(&["alpha", "mid", "zeta"]));

        let filtered = discover(&strings(&["mid"]), tmp.path()).unwrap();
        assert_eq!(filtered, strings(&["alpha", "zeta"]));
    }

    #[test]
    fn invoke_captures_stdout_on_success() {
        let tmp = init_repo();
        git(tmp.path(), &["config", "glance.extensions.hello", "echo hello-out"]);

        let section = invoke("hello", ColorMode::Never, &HashMap::new(), tmp.path())
            .unwrap()
            .expect("section");
        assert_eq!(section.name, "hello");
        assert!(section.succeeded);
        // echo sees the appended color flag as a plain argument.
        assert_eq!(section.body, "hello-out --color=never\n");
    }

    #[test]
    fn invoke_captures_stderr_on_failure() {
        let tmp = init_repo();
        git(
            tmp.path(),
            &["config", "glance.extensions.broken", "sh -c 'echo boom >&2; exit 3'"],
        );

        let section = invoke("broken", ColorMode::Never, &HashMap::new(), tmp.path())
            .unwrap()
            .expect("section");
        assert!(!section.succeeded);
        assert_eq!(section.body, "boom\n");
    }

    #[test]
    fn invoke_honors_display_name_and_extra_args() {
        let tmp = init_repo();
        git(tmp.path(), &["config", "glance.extensions.hello", "echo base"]);
        git(tmp.path(), &["config", "glance.extensions.hello.name", "greeting"]);

        let mut extra = HashMap::new();
        extra.insert("greeting".to_string(), strings(&["more", "words"]));

        let section = invoke("hello", ColorMode::Never, &extra, tmp.path())
            .unwrap()
            .expect("section");
        assert_eq!(section.name, "greeting");
        assert_eq!(section.body, "base --color=never more words\n");
    }

    #[test]
    fn invoke_skips_unconfigured_extension() {
        let tmp = init_repo();
        let section = invoke("ghost", ColorMode::Never, &HashMap::new(), tmp.path()).unwrap();
        assert_eq!(section, None);
    }

    #[test]
    fn invoke_soft_fails_on_unspawnable_command() {
        let tmp = init_repo();
        git(
            tmp.path(),
            &["config", "glance.extensions.gone", "no-such-binary-for-glance-tests"],
        );

        let section = invoke("gone", ColorMode::Never, &HashMap::new(), tmp.path())
            .unwrap()
            .expect("section");
        assert!(!section.succeeded);
        assert!(!section.body.is_empty());
    }
}
