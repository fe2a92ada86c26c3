//! Implementation of `rowdex terms`.

use std::process::ExitCode;

use crate::cli::{args::TermsCommand, context::CommandContext, output};

/// Lists distinct indexed terms for one field or for every field.
pub fn run(ctx: &CommandContext, cmd: &TermsCommand) -> ExitCode {
    let searcher = match ctx.open_dataset(&cmd.file) {
        Ok(searcher) => searcher,
        Err(code) => return code,
    };

    match &cmd.field {
        Some(field) => match searcher.lexicon(field) {
            Ok(terms) => {
                output::print_lexicon(field, &terms);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        None => match searcher.all_lexicons() {
            Ok(lexicons) => {
                output::print_lexicons(&lexicons);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
