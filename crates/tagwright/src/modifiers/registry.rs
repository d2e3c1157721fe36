//! Modifier registry: name to function mapping with typo-tolerant lookup.

use std::collections::BTreeMap;

use crate::modifiers::{ModifierNotFound, builtins};
use crate::runtime::Settings;
use crate::types::Value;

/// Modifier function signature.
///
/// Takes:
/// - `value`: The value to modify
/// - `args`: Arguments written after the modifier name
///
/// Modifiers never fail; values they cannot handle pass through unchanged.
pub type ModifierFn = fn(Value, &[Value]) -> Value;

/// Registry for modifier functions.
///
/// Modifiers are registered during setup and only read afterwards, so a
/// registry can be shared between renders running on different threads.
/// Resolution is a pure function of the requested name and the registered
/// names.
///
/// # Example
///
/// ```
/// use tagwright::{ModifierRegistry, Value};
///
/// let registry = ModifierRegistry::with_builtins();
/// let upper = registry.resolve("upper").unwrap();
/// assert_eq!(upper(Value::from("hi"), &[]), Value::from("HI"));
///
/// let err = registry.resolve("uppr").unwrap_err();
/// assert_eq!(err.suggestion(), Some("upper"));
/// ```
#[derive(Debug, Clone)]
pub struct ModifierRegistry {
    modifiers: BTreeMap<String, ModifierFn>,
    docs_url: String,
}

impl ModifierRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            modifiers: BTreeMap::new(),
            docs_url: Settings::default().docs_url("modifiers"),
        }
    }

    /// Create a registry holding the built-in modifiers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::register_builtins(&mut registry);
        registry
    }

    /// Point documentation links at the configured docs site.
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.docs_url = settings.docs_url("modifiers");
        self
    }

    /// Register a modifier, replacing any existing one with the same name.
    pub fn register(&mut self, name: impl Into<String>, modifier: ModifierFn) {
        self.modifiers.insert(name.into(), modifier);
    }

    /// Get a modifier by name.
    pub fn lookup(&self, name: &str) -> Option<ModifierFn> {
        self.modifiers.get(name).copied()
    }

    /// Check if a modifier exists.
    pub fn contains(&self, name: &str) -> bool {
        self.modifiers.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modifiers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Get a modifier by name, or an error suggesting the closest name.
    pub fn resolve(&self, name: &str) -> Result<ModifierFn, ModifierNotFound> {
        self.lookup(name).ok_or_else(|| {
            let err = ModifierNotFound::new(name, self.names(), self.docs_url.as_str());
            tracing::warn!(modifier = name, suggestion = ?err.suggestion(), "modifier not found");
            err
        })
    }

    /// Resolve and apply a modifier.
    pub fn apply(&self, name: &str, value: Value, args: &[Value]) -> Result<Value, ModifierNotFound> {
        let modifier = self.resolve(name)?;
        Ok(modifier(value, args))
    }
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}
