//! Output formatting: JSON, tables and diagnostics.

mod diagnostic;
pub mod table;

pub use diagnostic::{ModifierDiagnostic, TemplateDiagnostic};

use miette::{IntoDiagnostic, Report, Result};
use serde::Serialize;
use tagwright::TagError;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{}", json);
    Ok(())
}

/// Report a tag error on stderr and return the exit code for it.
///
/// Modifier and template errors are shown as diagnostics; `source` is the
/// template the error points into.
pub fn report_tag_error(err: &TagError, source: &str, json: bool) -> i32 {
    if json {
        let output = serde_json::json!({ "error": err.to_string() });
        eprintln!("{output:#}");
        return exitcode::DATAERR;
    }

    match err {
        TagError::Modifier(inner) => {
            eprintln!("{:?}", Report::new(ModifierDiagnostic::new(inner)));
        }
        TagError::Template(inner) => {
            let diagnostic = TemplateDiagnostic::from_template_error(source, inner);
            eprintln!("{:?}", Report::new(diagnostic));
        }
        TagError::TagNotFound { .. } => {
            eprintln!("Tag error: {}", err);
            return exitcode::USAGE;
        }
        _ => eprintln!("Tag error: {}", err),
    }
    exitcode::DATAERR
}
