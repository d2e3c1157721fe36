//! Typed access to tag parameters.

use crate::runtime::Context;
use crate::types::{Data, Value};

/// Prefix marking a parameter whose value names a context variable.
const VARIABLE_PREFIX: char = ':';

/// The parameters written on a tag, resolved against its context.
///
/// A parameter written as `:limit="per_page"` is a variable reference: its
/// value is looked up in the context and stored under `limit`. Unresolvable
/// references become [`Value::Null`].
///
/// # Example
///
/// ```
/// use tagwright::{Context, Parameters, data};
///
/// let ctx = Context::new(data! { "per_page" => 5 });
/// let params = Parameters::make(data! { ":limit" => "per_page", "sort" => "title" }, &ctx);
///
/// assert_eq!(params.int("limit"), Some(5));
/// assert_eq!(params.get_str("sort"), Some("title"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    params: Data,
}

impl Parameters {
    /// Resolve raw parameters against a context.
    pub fn make(raw: Data, context: &Context) -> Self {
        let params = raw
            .into_iter()
            .map(|(key, value)| match key.strip_prefix(VARIABLE_PREFIX) {
                Some(bare) => {
                    let resolved = value
                        .as_string()
                        .and_then(|var| context.get(var))
                        .cloned()
                        .unwrap_or_default();
                    (bare.to_string(), resolved)
                }
                None => (key, value),
            })
            .collect();
        Self { params }
    }

    /// All resolved parameters.
    pub fn all(&self) -> &Data {
        &self.params
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Get the first parameter present among `keys`.
    pub fn get_any(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// Get a parameter as a non-empty string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_string)
            .filter(|s| !s.is_empty())
    }

    /// Check whether a parameter was given.
    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Interpret a parameter as a boolean.
    ///
    /// Accepts booleans, numbers and the strings `true`/`false`, `yes`/`no`,
    /// `1`/`0`. Anything else is `None`.
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => Some(*n != 0),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Interpret a parameter as an integer.
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => Some(*n),
            Value::Float(f) => Some(f.trunc() as i64),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Interpret a parameter as a float.
    pub fn float(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::String(s) => s.trim().parse().ok(),
            other => other.as_float(),
        }
    }

    /// Split a parameter into a list on `|` (or `,` when no pipe is present).
    ///
    /// List values are returned item by item.
    pub fn explode(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::String(s)) if !s.is_empty() => {
                let separator = if s.contains('|') { '|' } else { ',' };
                s.split(separator).map(|part| part.trim().to_string()).collect()
            }
            Some(Value::List(items)) => items.iter().map(ToString::to_string).collect(),
            _ => Vec::new(),
        }
    }
}
