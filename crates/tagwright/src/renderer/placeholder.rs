//! A lightweight renderer for `{placeholder}` templates.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::modifiers::ModifierRegistry;
use crate::renderer::ast::{ModifierCall, Segment, Template};
use crate::renderer::parse_template;
use crate::runtime::{Parser, Rendered, TagError, TagRenderer};
use crate::types::{Data, Value};

/// Language identifier reported by [`PlaceholderRenderer`].
pub const PLACEHOLDER_LANGUAGE: &str = "placeholder";

/// Renders `{name}` placeholders, applying `@modifier` calls right to left.
///
/// Used as the [`TagRenderer`] when tags run without a full parser.
/// Missing variables render as empty text; unknown modifiers fail with
/// [`TagError::Modifier`].
///
/// # Example
///
/// ```
/// use tagwright::{ModifierRegistry, PlaceholderRenderer, TagRenderer, data};
///
/// let renderer = PlaceholderRenderer::new(ModifierRegistry::with_builtins());
/// let out = renderer
///     .render("Hi {@upper @trim name}!", &data! { "name" => " ada " })
///     .unwrap();
/// assert_eq!(out, "Hi ADA!");
/// ```
pub struct PlaceholderRenderer {
    modifiers: ModifierRegistry,

    /// Cache of parsed template ASTs keyed by source string.
    ///
    /// Uses `RefCell` for interior mutability so `render` can remain `&self`.
    /// Entries are never evicted: the cache grows with every distinct
    /// template, so build one renderer per render pass rather than keeping
    /// it alive across renders.
    template_cache: RefCell<HashMap<String, Template>>,
}

impl PlaceholderRenderer {
    pub fn new(modifiers: ModifierRegistry) -> Self {
        Self {
            modifiers,
            template_cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn modifiers(&self) -> &ModifierRegistry {
        &self.modifiers
    }

    fn parsed(&self, template: &str) -> Result<Template, TagError> {
        if let Some(cached) = self.template_cache.borrow().get(template) {
            return Ok(cached.clone());
        }
        let parsed = parse_template(template)?;
        self.template_cache
            .borrow_mut()
            .insert(template.to_string(), parsed.clone());
        Ok(parsed)
    }

    fn resolve(&self, path: &str, data: &Data, modifiers: &[ModifierCall]) -> Result<Value, TagError> {
        let mut value = lookup(data, path).cloned().unwrap_or_default();
        for call in modifiers.iter().rev() {
            let args: Vec<Value> = call.args.iter().map(|arg| Value::from(arg.as_str())).collect();
            value = self.modifiers.apply(&call.name, value, &args)?;
        }
        Ok(value)
    }
}

impl TagRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, data: &Data) -> Result<String, TagError> {
        let parsed = self.parsed(template)?;
        let mut output = String::new();
        for segment in &parsed.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder { modifiers, path } => {
                    let value = self.resolve(path, data, modifiers)?;
                    output.push_str(&value.to_string());
                }
            }
        }
        Ok(output)
    }

    fn language(&self) -> &str {
        PLACEHOLDER_LANGUAGE
    }
}

/// Lets hosts without a full template engine hand the renderer to tags as
/// their parser. Placeholders never produce extraction markers.
impl Parser for PlaceholderRenderer {
    fn parse(&self, template: &str, data: &Data) -> Result<Rendered, TagError> {
        self.render(template, data).map(Rendered::new)
    }

    fn parse_loop(
        &self,
        template: &str,
        items: &[Data],
        supplement: bool,
        ambient: &Data,
    ) -> Result<Rendered, TagError> {
        let mut output = String::new();
        for item in items {
            let mut data = if supplement { ambient.clone() } else { Data::new() };
            data.extend(item.iter().map(|(k, v)| (k.clone(), v.clone())));
            output.push_str(&self.render(template, &data)?);
        }
        Ok(Rendered::new(output))
    }
}

/// Look up a variable, walking dotted paths into nested values.
fn lookup<'d>(data: &'d Data, path: &str) -> Option<&'d Value> {
    if let Some(value) = data.get(path) {
        return Some(value);
    }
    let (head, rest) = path.split_once('.')?;
    data.get(head)?.get_path(rest)
}
