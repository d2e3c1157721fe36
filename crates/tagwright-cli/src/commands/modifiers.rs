//! Implementation of the `tagwright modifiers` and `tagwright resolve` commands.

use clap::Args;
use miette::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tagwright::{ModifierRegistry, Settings};

use super::ListArgs;
use crate::output::table::format_names_table;
use crate::output::{print_json, ModifierDiagnostic};

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Modifier name to resolve
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Debug, Serialize)]
struct ResolveJson<'a> {
    name: &'a str,
    found: bool,
    message: Option<String>,
    suggestion: Option<&'a str>,
    docs_url: Option<&'a str>,
}

fn registry(settings: &Settings) -> ModifierRegistry {
    ModifierRegistry::with_builtins().with_settings(settings)
}

/// Run the modifiers command.
pub fn run_modifiers(args: ListArgs, settings: &Settings) -> Result<i32> {
    let registry = registry(settings);
    let names: Vec<&str> = registry.names().collect();

    if args.json {
        print_json(&names)?;
    } else {
        println!("{}", format_names_table("Modifier", &names));
    }
    Ok(exitcode::OK)
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs, settings: &Settings) -> Result<i32> {
    let registry = registry(settings);

    match registry.resolve(&args.name) {
        Ok(_) => {
            if args.json {
                print_json(&ResolveJson {
                    name: &args.name,
                    found: true,
                    message: None,
                    suggestion: None,
                    docs_url: None,
                })?;
            } else {
                println!("{} {}", "found".green(), args.name);
            }
            Ok(exitcode::OK)
        }
        Err(err) => {
            if args.json {
                print_json(&ResolveJson {
                    name: &args.name,
                    found: false,
                    message: Some(err.message()),
                    suggestion: err.suggestion(),
                    docs_url: Some(err.docs_url()),
                })?;
            } else {
                let report = miette::Report::new(ModifierDiagnostic::new(&err));
                eprintln!("{:?}", report);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
