//! Tag classes: the dispatch table behind a tag handle.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::runtime::{Hooks, Tag, TagError};
use crate::types::Value;

/// Handler for an explicitly registered method, or a macro.
///
/// Takes the bound invocation and any positional arguments.
pub type MethodFn = Box<dyn Fn(&mut Tag<'_>, &[Value]) -> Result<Value, TagError> + Send + Sync>;

/// Catch-all handler. Receives the method name the tag was written with.
pub type WildcardFn = Box<dyn Fn(&mut Tag<'_>, &str) -> Result<Value, TagError> + Send + Sync>;

/// Everything a tag handle can dispatch to.
///
/// A class is assembled once at registration time:
/// - explicit methods, addressed by `handle:method`
/// - an optional wildcard handler for any other method
/// - macros, methods attached by extensions after the class was defined
/// - lifecycle hooks
///
/// # Example
///
/// ```
/// use tagwright::{TagClass, Value};
///
/// let class = TagClass::new("greet")
///     .with_alias("hello")
///     .with_method("index", |_tag, _args| Ok(Value::from("hi")))
///     .with_wildcard(|_tag, method| Ok(Value::from(format!("hi {method}"))));
///
/// assert!(class.has_method("index"));
/// assert!(class.has_wildcard());
/// assert_eq!(class.aliases(), ["hello"]);
/// ```
pub struct TagClass {
    handle: String,
    aliases: Vec<String>,
    methods: BTreeMap<String, MethodFn>,
    wildcard: Option<WildcardFn>,
    macros: BTreeMap<String, MethodFn>,
    hooks: Hooks,
}

impl TagClass {
    /// Create a class with no handlers.
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            aliases: Vec::new(),
            methods: BTreeMap::new(),
            wildcard: None,
            macros: BTreeMap::new(),
            hooks: Hooks::new(),
        }
    }

    /// Make the class addressable under another handle.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Register an explicit method.
    pub fn with_method<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Tag<'_>, &[Value]) -> Result<Value, TagError> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Box::new(handler));
        self
    }

    /// Register the catch-all handler.
    pub fn with_wildcard<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Tag<'_>, &str) -> Result<Value, TagError> + Send + Sync + 'static,
    {
        self.wildcard = Some(Box::new(handler));
        self
    }

    /// Attach a macro.
    pub fn with_macro<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Tag<'_>, &[Value]) -> Result<Value, TagError> + Send + Sync + 'static,
    {
        self.add_macro(name, handler);
        self
    }

    /// Subscribe a lifecycle hook.
    pub fn with_hook<F>(mut self, event: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&mut Tag<'_>) + Send + Sync + 'static,
    {
        self.hooks.on(event, callback);
        self
    }

    /// Attach a macro to an existing class.
    pub fn add_macro<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut Tag<'_>, &[Value]) -> Result<Value, TagError> + Send + Sync + 'static,
    {
        self.macros.insert(name.into(), Box::new(handler));
    }

    /// Mutable access to the class hooks.
    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Look up an explicit method.
    pub fn method(&self, name: &str) -> Option<&MethodFn> {
        self.methods.get(name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Names of all explicit methods, sorted.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn wildcard(&self) -> Option<&WildcardFn> {
        self.wildcard.as_ref()
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard.is_some()
    }

    /// Look up a macro.
    pub fn macro_fn(&self, name: &str) -> Option<&MethodFn> {
        self.macros.get(name)
    }

    pub fn has_macro(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Names of all macros, sorted.
    pub fn macro_names(&self) -> impl Iterator<Item = &str> {
        self.macros.keys().map(String::as_str)
    }
}

impl Debug for TagClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TagClass")
            .field("handle", &self.handle)
            .field("aliases", &self.aliases)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .field("wildcard", &self.wildcard.is_some())
            .field("macros", &self.macros.keys().collect::<Vec<_>>())
            .field("hooks", &self.hooks)
            .finish()
    }
}
