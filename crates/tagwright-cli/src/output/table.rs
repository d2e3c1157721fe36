//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Summary of a registered tag class.
#[derive(Debug, Serialize)]
pub struct TagSummary {
    /// Primary handle (e.g., "loop").
    pub handle: String,
    /// Alternative handles.
    pub aliases: Vec<String>,
    /// Explicit method names.
    pub methods: Vec<String>,
    /// Macro names.
    pub macros: Vec<String>,
    /// Whether a wildcard handler is installed.
    pub wildcard: bool,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Format a single column of names as an ASCII table.
pub fn format_names_table(header: &str, names: &[&str]) -> Table {
    let mut table = new_table(vec![header]);
    for name in names {
        table.add_row(vec![*name]);
    }
    table
}

/// Format tag summaries as an ASCII table.
pub fn format_tags_table(tags: &[TagSummary]) -> Table {
    let mut table = new_table(vec!["Tag", "Aliases", "Methods", "Macros", "Wildcard"]);

    for tag in tags {
        table.add_row(vec![
            tag.handle.clone(),
            list_or_dash(&tag.aliases),
            list_or_dash(&tag.methods),
            list_or_dash(&tag.macros),
            if tag.wildcard { "yes" } else { "no" }.to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_table_lists_each_class() {
        let table = format_tags_table(&[TagSummary {
            handle: "scope".to_string(),
            aliases: Vec::new(),
            methods: Vec::new(),
            macros: Vec::new(),
            wildcard: true,
        }]);
        let rendered = table.to_string();
        assert!(rendered.contains("scope"));
        assert!(rendered.contains("yes"));
    }
}
