//! Clap argument definitions for the `rowdex` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "rowdex")]
#[command(about = "Indexed full-text search over delimited datasets")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `rowdex shell`.
#[derive(Args, Debug, Clone)]
pub struct ShellCommand {
    /// Dataset file to index and query
    pub file: PathBuf,
}

/// Arguments for `rowdex search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Dataset file to index and query
    pub file: PathBuf,

    /// Query string; bare terms search the first field, `field:term` scopes explicitly
    pub query: String,

    /// Comma-separated output fields (defaults to every field, in header order)
    #[arg(short = 'f', long)]
    pub fields: Option<String>,

    /// Maximum matches to print [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for `rowdex fields`.
#[derive(Args, Debug, Clone)]
pub struct FieldsCommand {
    /// Dataset file to describe
    pub file: PathBuf,
}

/// Arguments for `rowdex terms`.
#[derive(Args, Debug, Clone)]
pub struct TermsCommand {
    /// Dataset file to index and inspect
    pub file: PathBuf,

    /// Field to list; omitted lists every field
    pub field: Option<String>,
}

/// Arguments for `rowdex status`.
#[derive(Args, Debug, Clone)]
pub struct StatusCommand {
    /// Dataset file to report on
    pub file: PathBuf,
}

/// Supported `rowdex` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Query a dataset interactively
    #[command(after_help = "\
SHELL COMMANDS:
  <field> <value>   Search <field> for <value>; the value may contain spaces
                    and index query syntax (phrases, AND/OR, field:term)
  desc              Show the dataset's field names
  all_terms         List the indexed terms of every field
  terms <field>     List the indexed terms of one field
  exit              Leave the shell

EXAMPLES:
  rowdex shell people.csv
  Enter query: name john smith
  Enter query: city \"new york\"
  Enter query: terms city")]
    Shell(ShellCommand),

    /// Run one query and print matches as comma-separated rows
    #[command(after_help = "\
EXAMPLES:
  rowdex search people.csv name:Alice --fields id,name
  rowdex search people.csv 'city:\"new york\"' -n 50")]
    Search(SearchCommand),

    /// Show the dataset's field names in header order
    Fields(FieldsCommand),

    /// List distinct indexed terms per field
    Terms(TermsCommand),

    /// Show cache state for a dataset
    Status(StatusCommand),
}
