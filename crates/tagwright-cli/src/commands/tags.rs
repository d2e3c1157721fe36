//! Implementation of the `tagwright tags` command.

use miette::Result;
use tagwright::{TagClass, TagRegistry};

use super::ListArgs;
use crate::output::print_json;
use crate::output::table::{format_tags_table, TagSummary};

fn summarize(class: &TagClass) -> TagSummary {
    TagSummary {
        handle: class.handle().to_string(),
        aliases: class.aliases().to_vec(),
        methods: class.method_names().map(str::to_string).collect(),
        macros: class.macro_names().map(str::to_string).collect(),
        wildcard: class.has_wildcard(),
    }
}

/// Run the tags command.
pub fn run_tags(args: ListArgs) -> Result<i32> {
    let registry = TagRegistry::with_builtins();
    let summaries: Vec<TagSummary> = registry.classes().map(summarize).collect();

    if args.json {
        print_json(&summaries)?;
    } else {
        println!("{}", format_tags_table(&summaries));
    }
    Ok(exitcode::OK)
}
