pub mod modifiers;
pub mod renderer;
pub mod runtime;
pub mod tags;
pub mod types;

mod suggest;

pub use modifiers::{ModifierFn, ModifierNotFound, ModifierRegistry};
pub use renderer::{PlaceholderRenderer, TemplateError};
pub use runtime::{
    Context, Hooks, Parameters, Parser, Rendered, Settings, Tag, TagClass, TagError,
    TagProperties, TagRegistry, TagRenderer, TagRuntime,
};
pub use suggest::{closest_match, compute_suggestions};
pub use types::{Data, TagName, Value};

/// Creates a [`Data`] mapping from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, lists or nested `Data` directly.
///
/// # Example
///
/// ```
/// use tagwright::{data, Value};
///
/// let d = data! { "count" => 3, "name" => "Alice" };
/// assert_eq!(d.len(), 2);
/// assert_eq!(d["count"].as_number(), Some(3));
/// assert_eq!(d["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! data {
    {} => {
        $crate::Data::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Data::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
