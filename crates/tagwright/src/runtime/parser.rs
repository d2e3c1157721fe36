//! Contracts for re-entering the surrounding template engine.

use std::collections::BTreeMap;

use crate::runtime::TagError;
use crate::types::Data;

/// Output of a parser pass that may still contain extraction markers.
///
/// Parsers pull verbatim regions (e.g. `noparse` blocks) out of the template
/// before rendering and leave a marker in their place. The marker must be
/// swapped back before the text leaves the tag runtime; see
/// [`Rendered::without_extractions`].
///
/// # Example
///
/// ```
/// use tagwright::Rendered;
///
/// let rendered = Rendered::new("a __x0__ b").with_extraction("__x0__", "{{ raw }}");
/// assert_eq!(rendered.without_extractions(), "a {{ raw }} b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    text: String,
    extractions: BTreeMap<String, String>,
}

impl Rendered {
    /// Wrap fully rendered text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extractions: BTreeMap::new(),
        }
    }

    /// Record a marker and the original content it stands for.
    pub fn with_extraction(mut self, marker: impl Into<String>, original: impl Into<String>) -> Self {
        self.extractions.insert(marker.into(), original.into());
        self
    }

    /// The text, markers included.
    pub fn raw(&self) -> &str {
        &self.text
    }

    /// Check whether any marker is still pending.
    pub fn has_extractions(&self) -> bool {
        self.extractions
            .keys()
            .any(|marker| self.text.contains(marker.as_str()))
    }

    /// Substitute every marker with its original content.
    ///
    /// Restored content may carry markers of its own, so substitution repeats
    /// until a pass changes nothing. The number of passes is bounded by the
    /// number of markers, which stops self-referencing markers from looping.
    pub fn without_extractions(self) -> String {
        let mut text = self.text;
        for _ in 0..=self.extractions.len() {
            let mut changed = false;
            for (marker, original) in &self.extractions {
                if text.contains(marker.as_str()) {
                    text = text.replace(marker.as_str(), original);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        text
    }
}

impl From<String> for Rendered {
    fn from(text: String) -> Self {
        Rendered::new(text)
    }
}

/// The re-entrant template parser a tag renders its pair contents with.
///
/// Implemented by the surrounding template engine. When the engine meets a
/// nested tag while parsing, it dispatches it through the same
/// [`TagRuntime`](super::TagRuntime), passing itself as the parser.
pub trait Parser {
    /// Render `template` against `data`.
    fn parse(&self, template: &str, data: &Data) -> Result<Rendered, TagError>;

    /// Render `template` once per item, concatenating the results in order.
    ///
    /// When `supplement` is true each iteration sees the item merged over
    /// `ambient`; otherwise it sees the item alone.
    fn parse_loop(
        &self,
        template: &str,
        items: &[Data],
        supplement: bool,
        ambient: &Data,
    ) -> Result<Rendered, TagError>;
}

/// A lightweight renderer used when no full [`Parser`] is available.
pub trait TagRenderer {
    /// Render `template` against `data` in this renderer's dialect.
    fn render(&self, template: &str, data: &Data) -> Result<String, TagError>;

    /// Identifier of the templating dialect, e.g. `placeholder`.
    fn language(&self) -> &str;
}
