//! Tests for rendering tag contents: parse, loops, empty results and aliases.

mod common;

use common::{EXTRACTED, ExtractingParser, ParserCall, RecordingParser};
use tagwright::{
    Data, ModifierRegistry, Parser, PlaceholderRenderer, Tag, TagClass, TagProperties,
    TagRegistry, TagRuntime, Value, data,
};

fn items() -> Vec<Data> {
    vec![data! { "title" => "One" }, data! { "title" => "Two" }]
}

fn bound<'a>(
    class: &'a TagClass,
    parser: Option<&'a dyn Parser>,
    content: &str,
    context: Data,
    params: Data,
) -> Tag<'a> {
    let mut tag = Tag::new(class);
    tag.bind(
        TagProperties::builder()
            .maybe_parser(parser)
            .tag(class.handle())
            .content(content)
            .context(context)
            .params(params)
            .build(),
    );
    tag
}

// =============================================================================
// parse
// =============================================================================

#[test]
fn parse_without_parser_returns_data() {
    let class = TagClass::new("entries");
    let tag = bound(&class, None, "", data! {}, data! {});
    let result = tag.parse(data! { "a" => 1 }).unwrap();
    assert_eq!(result, Value::Map(data! { "a" => 1 }));
}

#[test]
fn parse_nests_data_under_scope() {
    let class = TagClass::new("entries");
    let tag = bound(&class, None, "", data! {}, data! { "scope" => "entry" });
    let result = tag.parse(data! { "a" => 1 }).unwrap();
    assert_eq!(
        result,
        Value::Map(data! { "entry" => data! { "a" => 1 } })
    );
}

#[test]
fn parse_merges_data_over_context() {
    let parser = RecordingParser::new();
    let class = TagClass::new("entries");
    let tag = bound(
        &class,
        Some(&parser),
        "{title} / {site}",
        data! { "title" => "Context", "site" => "Docs" },
        data! {},
    );

    let result = tag.parse(data! { "title" => "Data" }).unwrap();

    assert_eq!(result, Value::from("Data / Docs"));
    assert_eq!(
        parser.calls(),
        vec![ParserCall::Parse {
            template: "{title} / {site}".to_string(),
            data: data! { "title" => "Data", "site" => "Docs" },
        }]
    );
}

#[test]
fn parse_falls_back_to_runtime_renderer() {
    let renderer = PlaceholderRenderer::new(ModifierRegistry::with_builtins());
    let mut registry = TagRegistry::new();
    registry.register(TagClass::new("greet").with_method("index", |tag, _args| {
        assert_eq!(tag.templating_language(), "placeholder");
        assert!(tag.can_parse_contents());
        tag.parse(data! { "greeting" => "hello" })
    }));
    let runtime = TagRuntime::new(&registry).with_renderer(&renderer);

    let result = runtime
        .dispatch(
            TagProperties::builder()
                .tag("greet")
                .content("{@ucfirst greeting}, {name}!")
                .context(data! { "name" => "Ada" })
                .build(),
        )
        .unwrap();

    assert_eq!(result, Value::from("Hello, Ada!"));
}

#[test]
fn parse_restores_extracted_regions() {
    let parser = ExtractingParser;
    let class = TagClass::new("entries");
    let tag = bound(&class, Some(&parser), "body", data! {}, data! {});
    let result = tag.parse(data! {}).unwrap();
    assert_eq!(result, Value::from(format!("body:{EXTRACTED}")));
}

// =============================================================================
// parse_loop
// =============================================================================

#[test]
fn parse_loop_without_parser_returns_items() {
    let class = TagClass::new("entries");
    let tag = bound(&class, None, "", data! {}, data! {});
    let result = tag.parse_loop(items(), true).unwrap();
    assert_eq!(
        result,
        Value::List(items().into_iter().map(Value::Map).collect())
    );
}

#[test]
fn parse_loop_with_alias_matches_single_parse() {
    let class = TagClass::new("entries");
    let tag = bound(&class, None, "", data! {}, data! { "as" => "posts" });

    let looped = tag.parse_loop(items(), true).unwrap();
    let single = tag
        .parse(data! { "posts" => items().into_iter().map(Value::Map).collect::<Vec<_>>() })
        .unwrap();

    assert_eq!(looped, single);
}

#[test]
fn parse_loop_with_alias_renders_once() {
    let parser = RecordingParser::new();
    let class = TagClass::new("entries");
    let tag = bound(
        &class,
        Some(&parser),
        "{@length posts}",
        data! {},
        data! { "as" => "posts" },
    );

    let result = tag.parse_loop(items(), true).unwrap();

    assert_eq!(result, Value::from("2"));
    assert!(matches!(
        parser.calls().as_slice(),
        [ParserCall::Parse { .. }]
    ));
}

#[test]
fn parse_loop_nests_each_item_under_scope() {
    let class = TagClass::new("entries");
    let tag = bound(&class, None, "", data! {}, data! { "scope" => "entry" });
    let result = tag.parse_loop(items(), true).unwrap();
    assert_eq!(
        result,
        Value::from(vec![
            data! { "entry" => data! { "title" => "One" } },
            data! { "entry" => data! { "title" => "Two" } },
        ])
    );
}

#[test]
fn parse_loop_passes_supplement_flag_and_context() {
    let parser = RecordingParser::new();
    let class = TagClass::new("entries");
    let tag = bound(
        &class,
        Some(&parser),
        "[{title} {site}]",
        data! { "site" => "Docs" },
        data! {},
    );

    let supplemented = tag.parse_loop(items(), true).unwrap();
    let bare = tag.parse_loop(items(), false).unwrap();

    assert_eq!(supplemented, Value::from("[One Docs][Two Docs]"));
    assert_eq!(bare, Value::from("[One ][Two ]"));
    assert_eq!(
        parser.calls()[1],
        ParserCall::Loop {
            template: "[{title} {site}]".to_string(),
            items: items(),
            supplement: false,
            ambient: data! { "site" => "Docs" },
        }
    );
}

#[test]
fn parse_loop_restores_extracted_regions() {
    let parser = ExtractingParser;
    let class = TagClass::new("entries");
    let tag = bound(&class, Some(&parser), "x", data! {}, data! {});
    let result = tag.parse_loop(items(), true).unwrap();
    assert_eq!(result, Value::from(format!("x:{EXTRACTED}x:{EXTRACTED}")));
}

// =============================================================================
// parse_no_results
// =============================================================================

#[test]
fn no_results_flags_win_over_caller_keys() {
    let class = TagClass::new("entries");
    let tag = bound(&class, None, "", data! {}, data! {});
    let result = tag
        .parse_no_results(data! { "no_results" => false, "total_results" => 7, "query" => "x" })
        .unwrap();
    assert_eq!(
        result,
        Value::Map(data! { "no_results" => true, "total_results" => 0, "query" => "x" })
    );
}

#[test]
fn no_results_renders_content_through_parser() {
    let parser = RecordingParser::new();
    let class = TagClass::new("entries");
    let tag = bound(
        &class,
        Some(&parser),
        "{no_results}/{total_results}",
        data! {},
        data! {},
    );
    let result = tag.parse_no_results(Data::new()).unwrap();
    assert_eq!(result, Value::from("true/0"));
}

// =============================================================================
// aliased_result
// =============================================================================

#[test]
fn aliased_result_wraps_under_alias() {
    let class = TagClass::new("entries");
    let tag = bound(&class, None, "", data! {}, data! { "as" => "total" });
    assert_eq!(
        tag.aliased_result(Value::from(3)),
        Value::Map(data! { "total" => 3 })
    );
}

#[test]
fn aliased_result_passes_through_without_alias() {
    let class = TagClass::new("entries");
    let tag = bound(&class, None, "", data! {}, data! { "as" => "" });
    assert_eq!(tag.aliased_result(Value::from(3)), Value::from(3));
}

#[test]
fn non_string_alias_and_scope_are_ignored() {
    let class = TagClass::new("entries");
    let tag = bound(&class, None, "", data! {}, data! { "as" => 3, "scope" => 4 });

    assert_eq!(tag.aliased_result(Value::from(3)), Value::from(3));
    assert_eq!(
        tag.parse_loop(items(), true).unwrap(),
        Value::List(items().into_iter().map(Value::Map).collect())
    );
    assert_eq!(
        tag.parse(data! { "title" => "One" }).unwrap(),
        Value::Map(data! { "title" => "One" })
    );
}
