//! Error types for the tag runtime.

use thiserror::Error;

use crate::modifiers::ModifierNotFound;
use crate::renderer::TemplateError;

/// An error that occurred while dispatching or rendering a tag.
#[derive(Debug, Error)]
pub enum TagError {
    /// No explicit method, macro or wildcard handler could take the call.
    #[error("call to undefined method '{method}' on tag '{tag}'")]
    MethodNotFound { tag: String, method: String },

    /// No tag class is registered under the handle or any alias.
    #[error("tag not found: '{name}'{}", format_suggestions(suggestions))]
    TagNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// Nested tag dispatch went deeper than the configured limit.
    #[error("maximum tag nesting depth of {max_depth} exceeded while dispatching '{tag}'")]
    MaxDepthExceeded { tag: String, max_depth: usize },

    /// A modifier referenced while rendering could not be resolved.
    #[error(transparent)]
    Modifier(#[from] ModifierNotFound),

    /// Pair content could not be parsed by the lightweight renderer.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The parser or renderer rejected the content.
    #[error("render error: {message}")]
    Render { message: String },
}

impl TagError {
    /// Create a render error from any message.
    pub fn render(message: impl Into<String>) -> Self {
        TagError::Render {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}
