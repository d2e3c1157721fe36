use std::fmt::{Display, Formatter, Result as FmtResult};

/// The method used when a tag is written without one (`{{ nav }}`).
pub const DEFAULT_METHOD: &str = "index";

/// A tag name split into its handle and method.
///
/// `nav:breadcrumbs` addresses the `breadcrumbs` method of the `nav` tag,
/// while a bare `nav` addresses its `index` method.
///
/// # Example
///
/// ```
/// use tagwright::TagName;
///
/// let name = TagName::parse("nav:breadcrumbs");
/// assert_eq!(name.handle(), "nav");
/// assert_eq!(name.method(), "breadcrumbs");
///
/// let bare = TagName::parse("nav");
/// assert_eq!(bare.method(), "index");
/// assert_eq!(bare.to_string(), "nav:index");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName {
    handle: String,
    method: String,
}

impl TagName {
    /// Split `handle:method`. Everything after the first colon is the method.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        match name.split_once(':') {
            Some((handle, method)) if !method.is_empty() => Self {
                handle: handle.to_string(),
                method: method.to_string(),
            },
            Some((handle, _)) => Self::new(handle, DEFAULT_METHOD),
            None => Self::new(name, DEFAULT_METHOD),
        }
    }

    /// Create a tag name from its parts.
    pub fn new(handle: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            method: method.into(),
        }
    }

    /// The tag handle, e.g. `nav`.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// The tag method, e.g. `breadcrumbs`.
    pub fn method(&self) -> &str {
        &self.method
    }
}

impl Display for TagName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.handle, self.method)
    }
}
