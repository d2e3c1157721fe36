//! Tag registry for storing and looking up tag classes.

use std::collections::BTreeMap;

use crate::runtime::{Tag, TagClass, TagError};
use crate::suggest::compute_suggestions;
use crate::tags;
use crate::types::Value;

/// A registry of tag classes addressable by handle or alias.
///
/// Registration happens during setup; afterwards the registry is only read
/// and may be shared between independent renders.
#[derive(Debug, Default)]
pub struct TagRegistry {
    /// Classes indexed by handle.
    classes: BTreeMap<String, TagClass>,
    /// Maps alias to handle.
    aliases: BTreeMap<String, String>,
}

impl TagRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in tags.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        tags::register_builtins(&mut registry);
        registry
    }

    /// Register a class, replacing any class with the same handle.
    pub fn register(&mut self, class: TagClass) {
        let handle = class.handle().to_string();
        if let Some(previous) = self.classes.remove(&handle) {
            tracing::debug!(handle = %handle, "replacing tag class");
            self.aliases.retain(|_, target| target.as_str() != previous.handle());
        }
        for alias in class.aliases() {
            self.aliases.insert(alias.clone(), handle.clone());
        }
        self.classes.insert(handle, class);
    }

    /// Get a class by handle or alias.
    pub fn get(&self, name: &str) -> Option<&TagClass> {
        self.classes.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|handle| self.classes.get(handle))
        })
    }

    /// Get a class by handle or alias, failing with suggestions.
    pub fn resolve(&self, name: &str) -> Result<&TagClass, TagError> {
        self.get(name).ok_or_else(|| TagError::TagNotFound {
            name: name.to_string(),
            suggestions: compute_suggestions(name, self.names()),
        })
    }

    /// Check if a handle or alias is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Attach a macro to a registered class.
    pub fn add_macro<F>(&mut self, handle: &str, name: impl Into<String>, handler: F) -> Result<(), TagError>
    where
        F: Fn(&mut Tag<'_>, &[Value]) -> Result<Value, TagError> + Send + Sync + 'static,
    {
        self.update_class(handle, |class| class.add_macro(name, handler))
    }

    /// Subscribe a lifecycle hook on a registered class.
    pub fn add_hook<F>(&mut self, handle: &str, event: impl Into<String>, callback: F) -> Result<(), TagError>
    where
        F: Fn(&mut Tag<'_>) + Send + Sync + 'static,
    {
        self.update_class(handle, |class| class.hooks_mut().on(event, callback))
    }

    /// All registered classes, sorted by handle.
    pub fn classes(&self) -> impl Iterator<Item = &TagClass> {
        self.classes.values()
    }

    /// All handles and aliases, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes
            .keys()
            .chain(self.aliases.keys())
            .map(String::as_str)
    }

    fn update_class(&mut self, name: &str, update: impl FnOnce(&mut TagClass)) -> Result<(), TagError> {
        let handle = self
            .aliases
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string());
        match self.classes.get_mut(&handle) {
            Some(class) => {
                update(class);
                Ok(())
            }
            None => Err(TagError::TagNotFound {
                name: name.to_string(),
                suggestions: compute_suggestions(name, self.names()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_class() {
        let mut registry = TagRegistry::new();
        registry.register(TagClass::new("collection").with_alias("entries"));
        assert_eq!(registry.resolve("entries").unwrap().handle(), "collection");
    }

    #[test]
    fn replacing_a_class_drops_stale_aliases() {
        let mut registry = TagRegistry::new();
        registry.register(TagClass::new("nav").with_alias("menu"));
        registry.register(TagClass::new("nav"));
        assert!(!registry.contains("menu"));
        assert!(registry.contains("nav"));
    }

    #[test]
    fn unknown_tag_suggests_close_handles() {
        let mut registry = TagRegistry::new();
        registry.register(TagClass::new("loop"));
        let err = registry.resolve("lop").unwrap_err();
        match err {
            TagError::TagNotFound { suggestions, .. } => assert_eq!(suggestions, vec!["loop"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn macros_attach_through_aliases() {
        let mut registry = TagRegistry::new();
        registry.register(TagClass::new("collection").with_alias("entries"));
        registry
            .add_macro("entries", "count", |_tag, _args| Ok(Value::from(0)))
            .unwrap();
        assert!(registry.get("collection").unwrap().has_macro("count"));
        assert!(registry.add_macro("missing", "x", |_tag, _args| Ok(Value::Null)).is_err());
    }

    #[test]
    fn hook_on_unknown_tag_suggests_handles() {
        let mut registry = TagRegistry::new();
        registry.register(TagClass::new("loop"));
        match registry.add_hook("lop", "init", |_tag| {}) {
            Err(TagError::TagNotFound { name, suggestions }) => {
                assert_eq!(name, "lop");
                assert_eq!(suggestions, vec!["loop"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
