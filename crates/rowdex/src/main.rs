//! Command-line entry point for the `rowdex` dataset search tool.

use std::process::ExitCode;

use clap::Parser;
use rowdex::cli::{self, CommandContext, args::Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    cli::commands::run(cli.command, &ctx)
}
