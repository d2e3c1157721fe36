//! Per-render entry point the surrounding parser dispatches tags through.

use std::cell::Cell;

use crate::runtime::{Settings, Tag, TagError, TagProperties, TagRegistry, TagRenderer};
use crate::types::{TagName, Value};

/// Dispatches tag occurrences for one render.
///
/// The runtime tracks how deeply tags are nested: a parser rendering a tag's
/// content re-enters [`TagRuntime::dispatch`] for the tags inside it, and
/// dispatch fails with [`TagError::MaxDepthExceeded`] past
/// [`Settings::max_depth`]. The counter is a [`Cell`], so a runtime belongs
/// to a single render; the [`TagRegistry`] behind it can be shared.
///
/// # Example
///
/// ```
/// use tagwright::{TagClass, TagProperties, TagRegistry, TagRuntime, Value};
///
/// let mut registry = TagRegistry::new();
/// registry.register(TagClass::new("hello").with_method("index", |tag, _args| {
///     Ok(Value::from(format!("hello from {}", tag.tag_name())))
/// }));
///
/// let runtime = TagRuntime::new(&registry);
/// let result = runtime.dispatch(TagProperties::builder().tag("hello").build()).unwrap();
/// assert_eq!(result, Value::from("hello from hello:index"));
/// ```
pub struct TagRuntime<'r> {
    registry: &'r TagRegistry,
    renderer: Option<&'r dyn TagRenderer>,
    settings: Settings,
    depth: Cell<usize>,
}

impl<'r> TagRuntime<'r> {
    /// Create a runtime with default settings and no lightweight renderer.
    pub fn new(registry: &'r TagRegistry) -> Self {
        Self {
            registry,
            renderer: None,
            settings: Settings::default(),
            depth: Cell::new(0),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Use `renderer` for tag contents when no parser is passed.
    pub fn with_renderer(mut self, renderer: &'r dyn TagRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn registry(&self) -> &'r TagRegistry {
        self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of dispatches currently on the stack.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Resolve, bind and call a tag occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No class is registered under the tag handle
    /// - Nesting is deeper than the configured maximum
    /// - No method, macro or wildcard handles the call
    /// - The handler itself fails
    pub fn dispatch(&self, properties: TagProperties<'_>) -> Result<Value, TagError> {
        let name = TagName::parse(&properties.tag);
        let class = self.registry.resolve(name.handle())?;
        let _guard = self.enter(&name)?;

        tracing::debug!(tag = %name, depth = self.depth.get(), "dispatching tag");

        let mut tag = Tag::new(class);
        tag.set_depth(self.depth.get());
        tag.set_tag_renderer(self.renderer);
        tag.bind(properties);

        let method = tag.method().to_string();
        tag.call(&method, &[])
    }

    fn enter(&self, name: &TagName) -> Result<DepthGuard<'_>, TagError> {
        let depth = self.depth.get();
        if depth >= self.settings.max_depth() {
            tracing::warn!(tag = %name, depth, "tag nesting too deep");
            return Err(TagError::MaxDepthExceeded {
                tag: name.to_string(),
                max_depth: self.settings.max_depth(),
            });
        }
        self.depth.set(depth + 1);
        Ok(DepthGuard { depth: &self.depth })
    }
}

/// Pops one nesting level when dropped, including on early error returns.
struct DepthGuard<'g> {
    depth: &'g Cell<usize>,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}
