//! Built-in modifiers.
//!
//! String modifiers work on graphemes, so combining characters and emoji
//! sequences are never split.

use unicode_segmentation::UnicodeSegmentation;

use crate::modifiers::{ModifierFn, ModifierRegistry};
use crate::types::Value;

/// Suffix appended by `truncate` when no argument overrides it.
const DEFAULT_ELLIPSIS: &str = "...";

/// Separator used by `join` when no argument overrides it.
const DEFAULT_GLUE: &str = ", ";

const BUILTINS: &[(&str, ModifierFn)] = &[
    ("first", first),
    ("join", join),
    ("last", last),
    ("length", length),
    ("lower", lower),
    ("reverse", reverse),
    ("slug", slug),
    ("title", title),
    ("trim", trim),
    ("truncate", truncate),
    ("ucfirst", ucfirst),
    ("upper", upper),
];

/// Register every built-in modifier.
pub(crate) fn register_builtins(registry: &mut ModifierRegistry) {
    for (name, modifier) in BUILTINS {
        registry.register(*name, *modifier);
    }
}

/// Apply `f` to string values; other values pass through.
fn map_text(value: Value, f: impl FnOnce(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(f(&s)),
        other => other,
    }
}

fn arg_str(args: &[Value], index: usize) -> Option<String> {
    args.get(index).map(ToString::to_string)
}

fn arg_usize(args: &[Value], index: usize) -> Option<usize> {
    match args.get(index)? {
        Value::Number(n) => usize::try_from(*n).ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn upper(value: Value, _args: &[Value]) -> Value {
    map_text(value, str::to_uppercase)
}

fn lower(value: Value, _args: &[Value]) -> Value {
    map_text(value, str::to_lowercase)
}

fn trim(value: Value, _args: &[Value]) -> Value {
    map_text(value, |s| s.trim().to_string())
}

fn ucfirst(value: Value, _args: &[Value]) -> Value {
    map_text(value, capitalize)
}

/// Uppercase the first grapheme.
fn capitalize(s: &str) -> String {
    let mut graphemes = s.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut result = first.to_uppercase();
            result.push_str(graphemes.as_str());
            result
        }
        None => String::new(),
    }
}

fn title(value: Value, _args: &[Value]) -> Value {
    map_text(value, |s| {
        s.split_word_bounds()
            .map(|word| {
                if word.chars().next().is_some_and(char::is_alphabetic) {
                    capitalize(word)
                } else {
                    word.to_string()
                }
            })
            .collect()
    })
}

/// Lowercase, replace runs of non-alphanumerics with the separator (`-` by
/// default) and trim separators from both ends.
fn slug(value: Value, args: &[Value]) -> Value {
    let separator = arg_str(args, 0).unwrap_or_else(|| "-".to_string());
    map_text(value, |s| {
        let lowered = s.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(&separator)
    })
}

fn length(value: Value, _args: &[Value]) -> Value {
    let len = match &value {
        Value::String(s) => s.graphemes(true).count(),
        Value::List(items) => items.len(),
        Value::Map(map) => map.len(),
        Value::Null => 0,
        _ => value.to_string().graphemes(true).count(),
    };
    Value::from(len)
}

fn reverse(value: Value, _args: &[Value]) -> Value {
    match value {
        Value::String(s) => Value::String(s.graphemes(true).rev().collect()),
        Value::List(mut items) => {
            items.reverse();
            Value::List(items)
        }
        other => other,
    }
}

/// Keep the first `n` graphemes, appending `...` (or the second argument)
/// when anything was cut.
fn truncate(value: Value, args: &[Value]) -> Value {
    let Some(limit) = arg_usize(args, 0) else {
        return value;
    };
    let suffix = arg_str(args, 1).unwrap_or_else(|| DEFAULT_ELLIPSIS.to_string());
    map_text(value, |s| {
        if s.graphemes(true).count() <= limit {
            return s.to_string();
        }
        let mut cut: String = s.graphemes(true).take(limit).collect();
        cut.push_str(&suffix);
        cut
    })
}

fn join(value: Value, args: &[Value]) -> Value {
    match value {
        Value::List(items) => {
            let glue = arg_str(args, 0).unwrap_or_else(|| DEFAULT_GLUE.to_string());
            Value::String(
                items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(&glue),
            )
        }
        other => other,
    }
}

fn first(value: Value, _args: &[Value]) -> Value {
    match value {
        Value::List(items) => items.into_iter().next().unwrap_or_default(),
        Value::String(s) => Value::from(s.graphemes(true).next().unwrap_or_default()),
        other => other,
    }
}

fn last(value: Value, _args: &[Value]) -> Value {
    match value {
        Value::List(items) => items.into_iter().last().unwrap_or_default(),
        Value::String(s) => Value::from(s.graphemes(true).next_back().unwrap_or_default()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Value {
        Value::from(text)
    }

    #[test]
    fn case_modifiers() {
        assert_eq!(upper(s("hello"), &[]), s("HELLO"));
        assert_eq!(lower(s("HeLLo"), &[]), s("hello"));
        assert_eq!(ucfirst(s("élan vital"), &[]), s("Élan vital"));
        assert_eq!(title(s("the quick-brown fox"), &[]), s("The Quick-Brown Fox"));
    }

    #[test]
    fn case_modifiers_ignore_non_strings() {
        assert_eq!(upper(Value::from(3), &[]), Value::from(3));
        assert_eq!(ucfirst(s(""), &[]), s(""));
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slug(s("  Hello, World! 2024 "), &[]), s("hello-world-2024"));
        assert_eq!(slug(s("Hello World"), &[s("_")]), s("hello_world"));
    }

    #[test]
    fn length_counts_graphemes_and_items() {
        assert_eq!(length(s("e\u{301}a"), &[]), Value::from(2));
        assert_eq!(length(Value::from(vec![1, 2, 3]), &[]), Value::from(3));
        assert_eq!(length(Value::Null, &[]), Value::from(0));
    }

    #[test]
    fn reverse_keeps_graphemes_intact() {
        assert_eq!(reverse(s("ae\u{301}"), &[]), s("e\u{301}a"));
        assert_eq!(reverse(Value::from(vec![1, 2]), &[]), Value::from(vec![2, 1]));
    }

    #[test]
    fn truncate_appends_suffix_only_when_cut() {
        assert_eq!(truncate(s("abcdef"), &[Value::from(3)]), s("abc..."));
        assert_eq!(truncate(s("abc"), &[Value::from(3)]), s("abc"));
        assert_eq!(truncate(s("abcdef"), &[s("2"), s("~")]), s("ab~"));
        assert_eq!(truncate(s("abcdef"), &[]), s("abcdef"));
    }

    #[test]
    fn list_modifiers() {
        let list = Value::from(vec!["a", "b", "c"]);
        assert_eq!(join(list.clone(), &[]), s("a, b, c"));
        assert_eq!(join(list.clone(), &[s("|")]), s("a|b|c"));
        assert_eq!(first(list.clone(), &[]), s("a"));
        assert_eq!(last(list, &[]), s("c"));
        assert_eq!(first(Value::List(Vec::new()), &[]), Value::Null);
    }
}
