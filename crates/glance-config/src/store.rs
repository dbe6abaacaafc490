//! Reading, listing, and destroying layered configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use glance_git::{exec, query};

use crate::{Coercion, ConfigError, Result, Scope, Value};

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

/// Retrieve a single configuration value at the given scope.
///
/// Lookup misses and empty values both yield `None`; the caller
/// supplies its own default.
pub fn get(key: &str, scope: &Scope, cwd: &Path) -> Result<Option<String>> {
    scope.ensure_applies(cwd)?;

    let mut args: Vec<String> = vec!["config".to_string()];
    args.extend(scope.flag_args());
    args.push(key.to_string());

    Ok(exec::optional_output(&args, cwd)?)
}

/// Retrieve and coerce a value.
///
/// Returns `None` when the key is unset; a set-but-unparsable value is
/// a [`ConfigError::Parse`].
pub fn get_as(key: &str, scope: &Scope, coercion: &Coercion, cwd: &Path) -> Result<Option<Value>> {
    match get(key, scope, cwd)? {
        Some(raw) => Ok(Some(coercion.apply(key, &raw)?)),
        None => Ok(None),
    }
}

/// Boolean lookup with a default for unset keys.
pub fn get_bool(key: &str, default: bool, scope: &Scope, cwd: &Path) -> Result<bool> {
    match get_as(key, scope, &Coercion::Bool, cwd)? {
        Some(Value::Bool(value)) => Ok(value),
        _ => Ok(default),
    }
}

/// Delimited-list lookup; unset keys yield an empty list.
pub fn get_list(key: &str, delimiter: char, scope: &Scope, cwd: &Path) -> Result<Vec<String>> {
    match get_as(key, scope, &Coercion::DelimitedList(delimiter), cwd)? {
        Some(Value::List(items)) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

/// Flatten the configuration entries visible at `scope` into a
/// key-to-value map.
///
/// Later `git config --list` lines override earlier ones, which is
/// exactly git's precedence order. With `section`, only direct
/// children of that section prefix are kept. Keys iterate
/// lexicographically, so every listing is deterministic.
pub fn entries(section: Option<&str>, scope: &Scope, cwd: &Path) -> Result<BTreeMap<String, String>> {
    scope.ensure_applies(cwd)?;

    let mut args: Vec<String> = vec!["config".to_string(), "--list".to_string()];
    args.extend(scope.flag_args());
    let listing = exec::output(&args, cwd)?;

    let mut map = BTreeMap::new();
    for line in listing.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if let Some(section) = section {
            if !is_direct_child(key, section) {
                continue;
            }
        }
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

/// `true` when `key` is `<section>.<child>` with a single trailing
/// component: `a.b.c` is a direct child of `a.b` but not of `a`.
fn is_direct_child(key: &str, section: &str) -> bool {
    key.strip_prefix(section)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|child| {
            !child.is_empty() && child.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// How a configuration listing is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRender {
    /// `key=value` lines.
    Flat,
    /// Bracketed section headers with indented `key = value` pairs.
    Pretty,
    /// Bare trailing key names.
    Keys,
    /// The number of entries.
    Count,
}

/// Render a listing produced by [`entries`].
pub fn render(entries: &BTreeMap<String, String>, mode: &ListRender) -> String {
    match mode {
        ListRender::Count => entries.len().to_string(),
        ListRender::Keys => entries
            .keys()
            .map(|key| trailing_component(key))
            .collect::<Vec<_>>()
            .join("\n"),
        ListRender::Flat => entries
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n"),
        ListRender::Pretty => render_pretty(entries),
    }
}

fn trailing_component(key: &str) -> &str {
    key.rsplit('.').next().unwrap_or(key)
}

/// Group keys by section and emit a config-file-like view:
/// `[section]` or `[section "sub"]` headers, `\tkey = value` lines.
fn render_pretty(entries: &BTreeMap<String, String>) -> String {
    let mut sections: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
    for (key, value) in entries {
        let (section, name) = match key.rsplit_once('.') {
            Some((section, name)) => (section, name),
            None => ("", key.as_str()),
        };
        sections.entry(section).or_default().push((name, value));
    }

    let mut lines = Vec::new();
    for (section, pairs) in &sections {
        match section.split_once('.') {
            Some((first, rest)) => lines.push(format!("[{first} \"{rest}\"]")),
            None => lines.push(format!("[{section}]")),
        }
        for (name, value) in pairs {
            lines.push(format!("\t{name} = {value}"));
        }
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// destroy
// ---------------------------------------------------------------------------

/// Remove an entire section from the local (when inside a repository),
/// global, and system config files.
///
/// Scopes that do not contain the section are skipped silently. In
/// dry-run mode nothing is removed; the returned lines describe what
/// would be, computed by re-listing the section per scope.
pub fn destroy(section: &str, dry_run: bool, cwd: &Path) -> Result<Vec<String>> {
    let mut scopes = Vec::new();
    if query::is_repository(cwd) {
        scopes.push(Scope::Local);
    }
    scopes.push(Scope::Global);
    scopes.push(Scope::System);

    let mut reported = Vec::new();
    for scope in &scopes {
        if dry_run {
            // The scope's file may not exist at all; treat that as an
            // empty listing rather than a failure.
            let found = entries(Some(section), scope, cwd).unwrap_or_default();
            for (key, value) in &found {
                reported.push(format!("Would be deleted from {}: {key}={value}", scope.name()));
            }
        } else {
            let mut args: Vec<String> = vec!["config".to_string()];
            args.extend(scope.flag_args());
            args.push("--remove-section".to_string());
            args.push(section.to_string());
            let _ = exec::status_ok(&args, cwd);
        }
    }
    Ok(reported)
}

// ---------------------------------------------------------------------------
// cleanup
// ---------------------------------------------------------------------------

/// Rewrite a config file in place, dropping sections with no content
/// and merging duplicate section headers.
///
/// Section order follows first appearance; lines before the first
/// header are preserved as-is.
pub fn cleanup(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(ConfigError::NoSuchFile(path.to_path_buf()));
    }
    let original = fs::read_to_string(path)?;

    let mut prelude: Vec<&str> = Vec::new();
    let mut sections: Vec<(&str, Vec<&str>)> = Vec::new();
    let mut current: Option<usize> = None;

    for line in original.lines() {
        if line.starts_with('[') {
            let index = match sections.iter().position(|(header, _)| *header == line) {
                Some(index) => index,
                None => {
                    sections.push((line, Vec::new()));
                    sections.len() - 1
                }
            };
            current = Some(index);
        } else {
            match current {
                Some(index) => sections[index].1.push(line),
                None => prelude.push(line),
            }
        }
    }

    let mut out = String::new();
    for line in &prelude {
        out.push_str(line);
        out.push('\n');
    }
    for (header, lines) in &sections {
        if lines.is_empty() {
            continue;
        }
        out.push_str(header);
        out.push('\n');
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
    }

    fs::write(path, out)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
