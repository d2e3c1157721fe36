//! AST types for placeholder templates.

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text.
    Literal(String),
    /// A placeholder: `{@modifier:arg path}`
    Placeholder {
        modifiers: Vec<ModifierCall>,
        path: String,
    },
}

/// A modifier applied to a placeholder (e.g. `@upper`, `@truncate:10`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierCall {
    /// Modifier name without `@`.
    pub name: String,
    /// Colon-separated arguments.
    pub args: Vec<String>,
}
