//! Implementation of `rowdex fields`.

use std::process::ExitCode;

use rowdex_index::{Dataset, DatasetSchema};

use crate::cli::{args::FieldsCommand, output};

/// Shows the dataset's field names in header order.
///
/// Reads only the header row; no index is built or opened.
pub fn run(cmd: &FieldsCommand) -> ExitCode {
    let dataset = Dataset::new(&cmd.file);

    let headers = match dataset.headers() {
        Ok(headers) => headers,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let schema = match DatasetSchema::derive(&headers) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    output::print_fields(&schema);
    ExitCode::SUCCESS
}
