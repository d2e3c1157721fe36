//! Implementation of the `tagwright call` command.

use std::path::PathBuf;

use miette::Result;
use serde::Serialize;
use tagwright::{
    ModifierRegistry, PlaceholderRenderer, Settings, TagProperties, TagRegistry, TagRuntime, Value,
};

use super::input::{load_context, params_from_pairs, parse_key_val};
use crate::output::{print_json, report_tag_error};

/// Arguments for the call command.
#[derive(Debug, clap::Args)]
pub struct CallArgs {
    /// Tag to dispatch, e.g. `loop` or `scope:page`
    pub tag: String,

    /// Tag parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Content between the opening and closing tag
    #[arg(long, default_value = "")]
    pub content: String,

    /// JSON file with context variables
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for call results.
#[derive(Serialize)]
struct CallResult<'a> {
    tag: &'a str,
    result: &'a Value,
}

/// Run the call command.
pub fn run_call(args: CallArgs, settings: &Settings) -> Result<i32> {
    let context = match load_context(args.context.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("{e}");
            return Ok(e.exit_code());
        }
    };

    let registry = TagRegistry::with_builtins();
    let renderer = PlaceholderRenderer::new(ModifierRegistry::with_builtins().with_settings(settings));
    let runtime = TagRuntime::new(&registry)
        .with_settings(settings.clone())
        .with_renderer(&renderer);

    let properties = TagProperties::builder()
        .parser(&renderer)
        .tag(args.tag.as_str())
        .content(args.content.as_str())
        .context(context)
        .params(params_from_pairs(args.params))
        .build();

    match runtime.dispatch(properties) {
        Ok(result) => {
            if args.json {
                print_json(&CallResult {
                    tag: &args.tag,
                    result: &result,
                })?;
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => Ok(report_tag_error(&e, &args.content, args.json)),
    }
}
