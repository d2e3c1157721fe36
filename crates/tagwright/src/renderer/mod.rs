//! The placeholder dialect: a lightweight renderer for tag contents.

pub mod ast;
mod error;
mod placeholder;
mod template;

pub use ast::{ModifierCall, Segment, Template};
pub use error::TemplateError;
pub use placeholder::{PLACEHOLDER_LANGUAGE, PlaceholderRenderer};
pub use template::parse_template;
