//! The error raised when a modifier name does not resolve.

use thiserror::Error;

use crate::suggest::closest_match;

/// A modifier lookup that failed.
///
/// Built at the moment resolution fails, from the requested name and the
/// names registered at that time. Besides the message it carries remediation
/// metadata for a reporting layer: a solution title, a suggestion sentence
/// and documentation links.
///
/// # Example
///
/// ```
/// use tagwright::ModifierNotFound;
///
/// let err = ModifierNotFound::new(
///     "uppr",
///     ["upper", "lower", "slug"],
///     "https://docs.example.com/modifiers",
/// );
/// assert_eq!(err.to_string(), "Modifier [uppr] not found");
/// assert_eq!(err.suggestion(), Some("upper"));
/// assert_eq!(err.solution_description(), "Did you mean `upper`?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Modifier [{name}] not found")]
pub struct ModifierNotFound {
    name: String,
    suggestion: Option<String>,
    docs_url: String,
}

impl ModifierNotFound {
    /// Build the error, computing the closest registered name.
    pub fn new<'a>(
        name: impl Into<String>,
        candidates: impl IntoIterator<Item = &'a str>,
        docs_url: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let suggestion = closest_match(&name, candidates);
        Self {
            name,
            suggestion,
            docs_url: docs_url.into(),
        }
    }

    /// The modifier name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The closest registered modifier name, if any was close enough.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Primary message, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn solution_title(&self) -> String {
        format!("The {} modifier was not found.", self.name)
    }

    /// `Did you mean ...?` when a suggestion exists, a generic prompt otherwise.
    pub fn solution_description(&self) -> String {
        match &self.suggestion {
            Some(suggestion) => format!("Did you mean `{suggestion}`?"),
            None => "Are you sure the modifier exists?".to_string(),
        }
    }

    /// Link to the modifiers guide.
    pub fn docs_url(&self) -> &str {
        &self.docs_url
    }

    /// Labelled documentation links.
    pub fn documentation_links(&self) -> Vec<(&'static str, &str)> {
        vec![("Read the modifiers guide", self.docs_url.as_str())]
    }
}
