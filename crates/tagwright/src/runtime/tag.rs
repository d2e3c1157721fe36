//! A single tag invocation and its rendering helpers.

use bon::Builder;

use crate::runtime::hooks::INIT_HOOK;
use crate::runtime::{Context, Parameters, Parser, TagClass, TagError, TagRenderer};
use crate::types::{Data, TagName, Value};

/// Parameter naming a key to nest rendered data under.
pub const SCOPE_PARAM: &str = "scope";

/// Parameter renaming a tag's output variable.
pub const AS_PARAM: &str = "as";

/// Templating language reported when no lightweight renderer is configured.
pub const NATIVE_LANGUAGE: &str = "native";

/// Everything the surrounding parser knows about a tag occurrence.
///
/// # Example
///
/// ```
/// use tagwright::{TagProperties, data};
///
/// let props = TagProperties::builder()
///     .tag("nav:breadcrumbs")
///     .content("{title}")
///     .params(data! { "from" => "/" })
///     .build();
///
/// assert!(props.parser.is_none());
/// assert_eq!(props.method, None);
/// ```
#[derive(Builder)]
pub struct TagProperties<'a> {
    /// Parser that found the tag, used to render its contents.
    pub parser: Option<&'a dyn Parser>,

    /// Raw body between the opening and closing tag; empty for single tags.
    #[builder(default, into)]
    pub content: String,

    /// Variables visible at the tag's position.
    #[builder(default)]
    pub context: Data,

    /// Parameters written on the tag.
    #[builder(default)]
    pub params: Data,

    /// The tag as written, e.g. `nav:breadcrumbs` or `nav`.
    #[builder(into)]
    pub tag: String,

    /// Method override. Derived from `tag` when absent.
    #[builder(into)]
    pub method: Option<String>,
}

/// One invocation of a tag.
///
/// Created per occurrence, bound once with [`Tag::bind`], used for a single
/// dispatch and then dropped. It keeps no state across occurrences.
pub struct Tag<'a> {
    class: &'a TagClass,
    parser: Option<&'a dyn Parser>,
    renderer: Option<&'a dyn TagRenderer>,
    content: String,
    is_pair: bool,
    context: Context,
    params: Parameters,
    tag: String,
    method: String,
    wildcard_handled: bool,
    depth: usize,
}

impl<'a> Tag<'a> {
    /// Create an unbound invocation of `class`.
    pub fn new(class: &'a TagClass) -> Self {
        Self {
            class,
            parser: None,
            renderer: None,
            content: String::new(),
            is_pair: false,
            context: Context::default(),
            params: Parameters::default(),
            tag: String::new(),
            method: String::new(),
            wildcard_handled: false,
            depth: 0,
        }
    }

    /// Bind the occurrence and fire the `init` hooks.
    ///
    /// Parameters are resolved against the new context, so `:name` parameters
    /// see the variables at the tag's position.
    pub fn bind(&mut self, properties: TagProperties<'a>) {
        let TagProperties {
            parser,
            content,
            context,
            params,
            tag,
            method,
        } = properties;

        let name = TagName::parse(&tag);
        self.set_parser(parser);
        self.set_content(content);
        self.set_context(context);
        self.set_parameters(params);
        self.method = method.unwrap_or_else(|| name.method().to_string());
        self.tag = name.to_string();

        let class = self.class;
        class.hooks().run(INIT_HOOK, self);
    }

    pub fn set_parser(&mut self, parser: Option<&'a dyn Parser>) -> &mut Self {
        self.parser = parser;
        self
    }

    /// Set the pair content. `is_pair` follows from it.
    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = content.into();
        self.is_pair = !self.content.is_empty();
        self
    }

    pub fn set_context(&mut self, context: Data) -> &mut Self {
        self.context = Context::new(context);
        self
    }

    pub fn set_parameters(&mut self, params: Data) -> &mut Self {
        self.params = Parameters::make(params, &self.context);
        self
    }

    pub fn set_tag_renderer(&mut self, renderer: Option<&'a dyn TagRenderer>) -> &mut Self {
        self.renderer = renderer;
        self
    }

    pub(crate) fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Change the method this invocation reports, e.g. from an `init` hook.
    pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = method.into();
        self
    }

    pub fn class(&self) -> &'a TagClass {
        self.class
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// True when the tag has a body.
    pub fn is_pair(&self) -> bool {
        self.is_pair
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// The tag as written, with the method made explicit (`nav:index`).
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn parser(&self) -> Option<&'a dyn Parser> {
        self.parser
    }

    /// Nesting depth; 1 for a top-level tag dispatched by the runtime.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn wildcard_handled(&self) -> bool {
        self.wildcard_handled
    }

    /// Dialect the pair content is written in.
    pub fn templating_language(&self) -> &str {
        match self.renderer {
            Some(renderer) => renderer.language(),
            None => NATIVE_LANGUAGE,
        }
    }

    /// Check whether the content can be rendered at all.
    pub fn can_parse_contents(&self) -> bool {
        self.parser.is_some() || self.renderer.is_some()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Call a method: the explicit method table first, then [`Tag::invoke`].
    pub fn call(&mut self, method: &str, args: &[Value]) -> Result<Value, TagError> {
        let class = self.class;
        if let Some(handler) = class.method(method) {
            return handler(self, args);
        }
        self.invoke(method, args)
    }

    /// Fallback dispatch for methods with no explicit handler.
    ///
    /// Resolution order:
    /// 1. A wildcard that already fired, or neither macro nor wildcard: error
    /// 2. A macro registered under `method`
    /// 3. The wildcard handler, called with this invocation's method
    ///
    /// The wildcard fires at most once per invocation.
    pub fn invoke(&mut self, method: &str, args: &[Value]) -> Result<Value, TagError> {
        let class = self.class;
        if self.wildcard_handled || (!class.has_macro(method) && !class.has_wildcard()) {
            return Err(TagError::MethodNotFound {
                tag: class.handle().to_string(),
                method: method.to_string(),
            });
        }

        if let Some(handler) = class.macro_fn(method) {
            tracing::debug!(tag = %self.tag, method, "dispatching to macro");
            return handler(self, args);
        }

        let Some(wildcard) = class.wildcard() else {
            return Err(TagError::MethodNotFound {
                tag: class.handle().to_string(),
                method: method.to_string(),
            });
        };
        self.wildcard_handled = true;
        tracing::debug!(tag = %self.tag, method = %self.method, "dispatching to wildcard");
        let own_method = self.method.clone();
        wildcard(self, &own_method)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the pair content with `data` merged over the context.
    ///
    /// - With a `scope` parameter, `data` is nested under that key first.
    /// - Without a parser, the lightweight renderer renders the content.
    /// - Without either, `data` is returned as the result.
    pub fn parse(&self, data: Data) -> Result<Value, TagError> {
        let data = match self.params.get_str(SCOPE_PARAM) {
            Some(scope) => Context::add_scope(&data, scope),
            None => data,
        };

        let Some(parser) = self.parser else {
            if let Some(renderer) = self.renderer {
                let merged = self.context.merged(&data);
                return renderer.render(&self.content, &merged).map(Value::String);
            }
            return Ok(Value::Map(data));
        };

        let rendered = parser.parse(&self.content, &self.context.merged(&data))?;
        Ok(Value::String(rendered.without_extractions()))
    }

    /// Render the pair content once per item.
    ///
    /// - With an `as` parameter, the items are exposed as a single list
    ///   variable and rendered once through [`Tag::parse`].
    /// - With a `scope` parameter, each item is nested under that key.
    /// - Without a parser, the items are returned as the result.
    pub fn parse_loop(&self, items: Vec<Data>, supplement: bool) -> Result<Value, TagError> {
        if let Some(alias) = self.params.get_str(AS_PARAM) {
            let mut data = Data::new();
            data.insert(alias.to_string(), items_value(items));
            return self.parse(data);
        }

        let items = match self.params.get_str(SCOPE_PARAM) {
            Some(scope) => Context::add_scope_to_items(&items, scope),
            None => items,
        };

        let Some(parser) = self.parser else {
            return Ok(items_value(items));
        };

        let rendered = parser.parse_loop(&self.content, &items, supplement, self.context.all())?;
        Ok(Value::String(rendered.without_extractions()))
    }

    /// Render the content for an empty result set.
    ///
    /// `no_results: true` and `total_results: 0` are written over `data`, so
    /// they win over caller keys of the same name.
    pub fn parse_no_results(&self, data: Data) -> Result<Value, TagError> {
        let mut data = data;
        data.insert("no_results".to_string(), Value::Bool(true));
        data.insert("total_results".to_string(), Value::Number(0));

        if self.parser.is_some() {
            self.parse(data)
        } else {
            Ok(Value::Map(data))
        }
    }

    /// Wrap `value` as `{as: value}` when an `as` parameter is given.
    pub fn aliased_result(&self, value: Value) -> Value {
        match self.params.get_str(AS_PARAM) {
            Some(alias) => {
                let mut data = Data::new();
                data.insert(alias.to_string(), value);
                Value::Map(data)
            }
            None => value,
        }
    }
}

fn items_value(items: Vec<Data>) -> Value {
    Value::List(items.into_iter().map(Value::Map).collect())
}
