//! Typed coercion of configuration values.
//!
//! `git config` hands back plain strings; callers declare the expected
//! shape with [`Coercion`] and receive a [`Value`]. The set of
//! coercions is closed: identity, boolean, delimited list, integer.

use crate::ConfigError;

/// How a raw configuration string should be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coercion {
    /// Keep the raw string.
    Identity,
    /// `true/t/yes/y` and `false/f/no/n`, case-insensitive.
    Bool,
    /// Split on a delimiter; empty input yields an empty list.
    DelimitedList(char),
    /// A base-10 integer.
    Int,
}

/// A coerced configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Bool(bool),
    List(Vec<String>),
    Int(i64),
}

impl Coercion {
    /// The target type name used in parse-error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Coercion::Identity => "string",
            Coercion::Bool => "bool",
            Coercion::DelimitedList(_) => "list",
            Coercion::Int => "int",
        }
    }

    /// Convert a raw config string, failing with a parse error that
    /// names the offending key, value, and target type.
    pub fn apply(&self, key: &str, raw: &str) -> Result<Value, ConfigError> {
        let parse_error = || ConfigError::Parse {
            key: key.to_string(),
            value: raw.to_string(),
            wanted: self.type_name(),
        };

        match self {
            Coercion::Identity => Ok(Value::Str(raw.to_string())),
            Coercion::Bool => match raw.to_lowercase().as_str() {
                "true" | "t" | "yes" | "y" => Ok(Value::Bool(true)),
                "false" | "f" | "no" | "n" => Ok(Value::Bool(false)),
                _ => Err(parse_error()),
            },
            Coercion::DelimitedList(delimiter) => {
                if raw.is_empty() {
                    Ok(Value::List(Vec::new()))
                } else {
                    Ok(Value::List(raw.split(*delimiter).map(str::to_string).collect()))
                }
            }
            Coercion::Int => raw.parse().map(Value::Int).map_err(|_| parse_error()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
