//! Command implementations and dispatch.

pub mod fields;
pub mod search;
pub mod shell;
pub mod status;
pub mod terms;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Shell(cmd) => shell::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Fields(cmd) => fields::run(&cmd),
        Commands::Terms(cmd) => terms::run(ctx, &cmd),
        Commands::Status(cmd) => status::run(ctx, &cmd),
    }
}
