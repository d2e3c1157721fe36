//! Placeholder template parser using winnow.
//!
//! Parses placeholder templates into an AST. Handles:
//! - Literal text segments
//! - Placeholders with modifiers and dotted variable paths
//! - Escape sequences: {{ }}

use winnow::combinator::{alt, delimited, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::ast::{ModifierCall, Segment, Template};
use super::error::TemplateError;

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) => {
            if remaining.is_empty() {
                Ok(t)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(TemplateError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(TemplateError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (escape, placeholder, or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_char)).parse_next(input)
}

/// Parse escape sequences: {{ -> {, }} -> }
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse a single literal character (not { or }).
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['{', '}'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: { modifiers* path }
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', placeholder_content, '}').parse_next(input)
}

fn placeholder_content(input: &mut &str) -> ModalResult<Segment> {
    ws(input)?;
    let modifiers: Vec<ModifierCall> = repeat(0.., terminated(modifier, ws)).parse_next(input)?;
    let path = variable_path(input)?;
    ws(input)?;
    Ok(Segment::Placeholder {
        modifiers,
        path: path.to_string(),
    })
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a modifier: @name or @name:arg:arg
fn modifier(input: &mut &str) -> ModalResult<ModifierCall> {
    preceded('@', (identifier, repeat(0.., preceded(':', modifier_arg))))
        .map(|(name, args): (&str, Vec<&str>)| ModifierCall {
            name: name.to_string(),
            args: args.into_iter().map(ToString::to_string).collect(),
        })
        .parse_next(input)
}

/// Parse a modifier argument: anything up to whitespace, `:` or a brace.
fn modifier_arg<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && c != ':' && c != '{' && c != '}'
    })
    .parse_next(input)
}

/// Parse a dotted variable path: `title`, `author.name`, `items.0`.
fn variable_path<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.').parse_next(input)
}

/// Parse an identifier.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_only() {
        let t = parse_template("Hello, world!").unwrap();
        assert_eq!(t.segments, vec![Segment::Literal("Hello, world!".to_string())]);
    }

    #[test]
    fn placeholder_with_modifiers() {
        let t = parse_template("{@upper @truncate:3:~ author.name}").unwrap();
        assert_eq!(
            t.segments,
            vec![Segment::Placeholder {
                modifiers: vec![
                    ModifierCall {
                        name: "upper".to_string(),
                        args: Vec::new(),
                    },
                    ModifierCall {
                        name: "truncate".to_string(),
                        args: vec!["3".to_string(), "~".to_string()],
                    },
                ],
                path: "author.name".to_string(),
            }]
        );
    }

    #[test]
    fn escapes_become_literals() {
        let t = parse_template("{{ {x} }}").unwrap();
        assert_eq!(
            t.segments,
            vec![
                Segment::Literal("{ ".to_string()),
                Segment::Placeholder {
                    modifiers: Vec::new(),
                    path: "x".to_string(),
                },
                Segment::Literal(" }".to_string()),
            ]
        );
    }

    #[test]
    fn unclosed_placeholder_reports_position() {
        let err = parse_template("line one\n{name").unwrap_err();
        let TemplateError::Syntax { line, column, .. } = err;
        assert_eq!((line, column), (2, 1));
    }
}
