//! Miette diagnostics for modifier and template errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fmt::Display;

use miette::{Diagnostic, NamedSource, SourceSpan};
use tagwright::{ModifierNotFound, TemplateError};
use thiserror::Error;

/// A miette diagnostic for a modifier name that did not resolve.
///
/// The suggestion sentence becomes the help text and the modifiers guide
/// becomes the diagnostic url.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ModifierDiagnostic {
    message: String,
    title: String,
    description: String,
    url: String,
}

impl ModifierDiagnostic {
    pub fn new(err: &ModifierNotFound) -> Self {
        ModifierDiagnostic {
            message: err.message(),
            title: err.solution_title(),
            description: err.solution_description(),
            url: err.docs_url().to_string(),
        }
    }
}

impl Diagnostic for ModifierDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new("tagwright::modifier_not_found"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(format!("{} {}", self.title, self.description)))
    }

    fn url<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(&self.url))
    }
}

/// A miette-compatible diagnostic for placeholder template syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(tagwright::template_syntax))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl TemplateDiagnostic {
    /// Create a diagnostic pointing into the template source.
    pub fn from_template_error(template: &str, err: &TemplateError) -> Self {
        let TemplateError::Syntax {
            line,
            column,
            message,
        } = err;

        // Sum of (line_length + 1) for lines before the error line, plus column.
        let offset = template
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp so miette never indexes past the source.
        let offset = offset.min(template.len());

        TemplateDiagnostic {
            src: NamedSource::new("template", template.to_string()),
            span: (offset, 1).into(),
            message: message.clone(),
        }
    }
}
