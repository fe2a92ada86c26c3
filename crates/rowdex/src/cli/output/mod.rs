//! Rendering helpers for CLI output.

use std::collections::BTreeSet;

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use rowdex_index::DatasetSchema;

/// Delimiter joining projected field values in result rows.
pub const FIELD_SEPARATOR: &str = ",";

/// Prints the schema's fields as a table, in header order.
pub fn print_fields(schema: &DatasetSchema) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Field"]);
    for (position, name) in schema.field_names().iter().enumerate() {
        table.add_row(vec![(position + 1).to_string(), name.clone()]);
    }
    println!("{table}");
}

/// Prints one field's lexicon, one term per line under a heading.
pub fn print_lexicon(field: &str, terms: &BTreeSet<String>) {
    println!("Values for: {field}");
    for term in terms {
        println!("  {term}");
    }
}

/// Prints every field's lexicon, in schema order.
pub fn print_lexicons(lexicons: &[(String, BTreeSet<String>)]) {
    for (field, terms) in lexicons {
        print_lexicon(field, terms);
    }
}
