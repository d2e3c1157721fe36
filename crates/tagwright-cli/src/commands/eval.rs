//! Implementation of the `tagwright eval` command.

use std::path::PathBuf;

use miette::Result;
use serde::Serialize;
use tagwright::{Context, ModifierRegistry, PlaceholderRenderer, Settings, TagRenderer};

use super::input::{load_context, params_from_pairs, parse_key_val};
use crate::output::{print_json, report_tag_error};

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Template string to render
    #[arg(long, required = true)]
    pub template: String,

    /// JSON file with context variables
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Variables in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs, settings: &Settings) -> Result<i32> {
    let context = match load_context(args.context.as_deref()) {
        Ok(data) => Context::new(data),
        Err(e) => {
            eprintln!("{e}");
            return Ok(e.exit_code());
        }
    };
    let data = context.merged(&params_from_pairs(args.params));

    let renderer = PlaceholderRenderer::new(ModifierRegistry::with_builtins().with_settings(settings));
    match renderer.render(&args.template, &data) {
        Ok(result) => {
            if args.json {
                print_json(&EvalResult { result })?;
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => Ok(report_tag_error(&e, &args.template, args.json)),
    }
}
