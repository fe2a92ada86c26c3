//! Implementation of `rowdex search`.

use std::process::ExitCode;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::FIELD_SEPARATOR,
};

/// Runs one query against a dataset and prints matches as delimited rows.
///
/// The raw query goes to the executor with the first schema field as the default, so
/// index syntax like `name:Alice` scopes itself. Result rows go to stdout; the total
/// match count goes to stderr so piped output stays machine-readable.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let searcher = match ctx.open_dataset(&cmd.file) {
        Ok(searcher) => searcher,
        Err(code) => return code,
    };

    let schema = searcher.schema();
    let output_fields: Vec<String> = match &cmd.fields {
        Some(spec) => spec
            .split(',')
            .map(|field| field.trim().to_string())
            .filter(|field| !field.is_empty())
            .collect(),
        None => schema.field_names().to_vec(),
    };

    let Some(default_field) = schema.field_names().first().cloned() else {
        eprintln!("error: dataset has no fields");
        return ExitCode::FAILURE;
    };

    let limit = cmd.limit.unwrap_or(ctx.config.search.limit);

    match searcher.search(&default_field, &cmd.query, &output_fields, limit) {
        Ok((hits, total)) => {
            for hit in &hits {
                println!("{}", hit.joined(FIELD_SEPARATOR));
            }
            eprintln!("Total results: {total}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
