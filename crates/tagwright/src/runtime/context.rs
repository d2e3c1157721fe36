//! The variable environment visible at a tag's position.

use crate::types::{Data, Value};

/// Scope-addressable variables surrounding a tag.
///
/// Each tag invocation wraps a snapshot of the ambient variables in its own
/// `Context`. Merging and scoping always produce copies; the wrapped mapping
/// is never modified after construction.
///
/// # Example
///
/// ```
/// use tagwright::{Context, Value, data};
///
/// let ctx = Context::new(data! { "title" => "Home" });
/// let merged = ctx.merged(&data! { "page" => 2 });
///
/// assert_eq!(merged["title"], Value::from("Home"));
/// assert_eq!(merged["page"], Value::from(2));
/// assert!(!ctx.has("page"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    data: Data,
}

impl Context {
    /// Wrap a snapshot of the ambient variables.
    pub fn new(data: Data) -> Self {
        Self { data }
    }

    /// All variables as a flat mapping.
    pub fn all(&self) -> &Data {
        &self.data
    }

    /// Look up a variable. Dotted names walk into nested maps and lists.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.data.get(key) {
            return Some(value);
        }
        let (head, rest) = key.split_once('.')?;
        self.data.get(head)?.get_path(rest)
    }

    /// Check whether a variable resolves.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Copy the variables and overlay `extra`. Keys in `extra` win.
    pub fn merged(&self, extra: &Data) -> Data {
        let mut merged = self.data.clone();
        merged.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Nest `data` under `scope` in a new mapping.
    ///
    /// The input is only read; the result is `{scope: data}`.
    pub fn add_scope(data: &Data, scope: &str) -> Data {
        let mut scoped = Data::new();
        scoped.insert(scope.to_string(), Value::Map(data.clone()));
        scoped
    }

    /// Nest each loop item under `scope`, producing `[{scope: item}, ...]`.
    pub fn add_scope_to_items(items: &[Data], scope: &str) -> Vec<Data> {
        items.iter().map(|item| Self::add_scope(item, scope)).collect()
    }
}

impl From<Data> for Context {
    fn from(data: Data) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn add_scope_leaves_input_untouched() {
        let original = data! { "x" => 1 };
        let scoped = Context::add_scope(&original, "foo");

        assert_eq!(scoped, data! { "foo" => Value::Map(data! { "x" => 1 }) });
        assert_eq!(original, data! { "x" => 1 });
    }

    #[test]
    fn dotted_lookup_prefers_literal_key() {
        let ctx = Context::new(data! {
            "a.b" => "literal",
            "a" => Value::Map(data! { "b" => "nested" }),
        });
        assert_eq!(ctx.get("a.b"), Some(&Value::from("literal")));
    }

    #[test]
    fn dotted_lookup_walks_nested_maps() {
        let ctx = Context::new(data! {
            "author" => Value::Map(data! { "name" => "Ada" }),
        });
        assert_eq!(ctx.get("author.name"), Some(&Value::from("Ada")));
        assert!(!ctx.has("author.email"));
    }

    #[test]
    fn scoping_loop_items_wraps_each_item() {
        let items = vec![data! { "x" => 1 }, data! { "x" => 2 }];
        let scoped = Context::add_scope_to_items(&items, "row");
        assert_eq!(scoped.len(), 2);
        assert_eq!(scoped[1]["row"], Value::Map(data! { "x" => 2 }));
    }
}
