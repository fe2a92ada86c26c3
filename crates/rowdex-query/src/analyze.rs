//! The classifier.
//!
//! Forms are checked in priority order: exact control words first, then the `terms`
//! prefix, then blank input, and finally the free-text search form. Keyword matching is
//! case-insensitive, but the search form splits the original trimmed input so field and
//! value keep their casing.

use crate::op::Operation;

/// Usage message for a malformed `terms` command.
const TERMS_USAGE: &str = "Usage: terms field_name";

/// Classifies one raw input line into an [`Operation`].
///
/// Total: every input maps to exactly one variant. The search form is split exactly once
/// at the first space, so a value like `john smith` survives intact; splitting on every
/// space would silently truncate multi-word queries.
pub fn analyze(raw: &str) -> Operation {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();

    match lowered.as_str() {
        "exit" => return Operation::Exit,
        "desc" => return Operation::ShowFields,
        "all_terms" => return Operation::AllTerms,
        _ => {}
    }

    if lowered.starts_with("terms") {
        let tokens: Vec<&str> = lowered.split(' ').collect();
        return if tokens.len() == 2 {
            Operation::FieldTerms(tokens[1].to_string())
        } else {
            Operation::Malformed(TERMS_USAGE.to_string())
        };
    }

    if trimmed.is_empty() {
        return Operation::NoOp;
    }

    // Free-text search: first word is the field, the rest is the value verbatim.
    match trimmed.split_once(' ') {
        Some((field, value)) => Operation::Query {
            field: field.to_string(),
            value: value.to_string(),
        },
        None => Operation::Query {
            field: trimmed.to_string(),
            value: String::new(),
        },
    }
}
