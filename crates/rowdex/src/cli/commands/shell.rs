//! Implementation of `rowdex shell`.

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use rowdex_index::Searcher;
use rowdex_query::{Operation, analyze};

use crate::cli::{
    args::ShellCommand,
    context::CommandContext,
    output::{self, FIELD_SEPARATOR},
};

/// Runs the interactive query loop for one dataset.
///
/// Query-level errors are reported and the loop continues; only `exit` or end of
/// input ends the session.
pub fn run(ctx: &CommandContext, cmd: &ShellCommand) -> ExitCode {
    let searcher = match ctx.open_dataset(&cmd.file) {
        Ok(searcher) => searcher,
        Err(code) => return code,
    };
    let limit = ctx.config.search.limit;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter query: ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        // End of input ends the session like `exit`.
        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        };

        match analyze(&line) {
            Operation::Exit => {
                println!("Bye..");
                break;
            }
            Operation::NoOp => {}
            Operation::ShowFields => output::print_fields(searcher.schema()),
            Operation::AllTerms => match searcher.all_lexicons() {
                Ok(lexicons) => output::print_lexicons(&lexicons),
                Err(e) => println!("error: {e}"),
            },
            Operation::FieldTerms(field) => match searcher.lexicon(&field) {
                Ok(terms) => output::print_lexicon(&field, &terms),
                Err(e) => println!("error: {e}"),
            },
            Operation::Malformed(message) => println!("{message}"),
            Operation::Query { field, value } => run_query(&searcher, &field, &value, limit),
        }
    }

    ExitCode::SUCCESS
}

/// Executes one free-text query and prints every projected match.
fn run_query(searcher: &Searcher, field: &str, value: &str, limit: usize) {
    let output_fields = searcher.schema().field_names().to_vec();

    match searcher.search(field, value, &output_fields, limit) {
        Ok((hits, total)) => {
            println!("Total results: {total}");
            for hit in &hits {
                println!("{}", hit.joined(FIELD_SEPARATOR));
            }
        }
        // Reported, never fatal: the loop continues.
        Err(e) => println!("error: {e}"),
    }
}
