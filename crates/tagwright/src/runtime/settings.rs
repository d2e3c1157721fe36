//! Runtime settings.

use bon::Builder;

/// Default maximum nesting depth for tag dispatch.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default documentation site used in diagnostic links.
pub const DEFAULT_DOCS_URL: &str = "https://docs.tagwright.dev";

/// Settings shared by a [`TagRuntime`](super::TagRuntime) and the modifier
/// resolver.
///
/// # Example
///
/// ```
/// use tagwright::Settings;
///
/// let settings = Settings::builder().max_depth(8).build();
/// assert_eq!(settings.max_depth(), 8);
/// assert_eq!(settings.docs_url("modifiers"), "https://docs.tagwright.dev/modifiers");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Settings {
    /// Maximum nesting depth before dispatch fails.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Base URL of the documentation site.
    #[builder(default = DEFAULT_DOCS_URL.to_string())]
    docs_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}

impl Settings {
    /// Maximum nesting depth before dispatch fails.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Base URL of the documentation site.
    pub fn docs_base_url(&self) -> &str {
        &self.docs_base_url
    }

    /// Build a documentation link for a page.
    pub fn docs_url(&self, page: &str) -> String {
        format!(
            "{}/{}",
            self.docs_base_url.trim_end_matches('/'),
            page.trim_start_matches('/')
        )
    }
}
