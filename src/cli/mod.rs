pub mod datasets;
pub mod spaces;
pub mod verbosity;

use crate::cli::verbosity::Verbosity;
use clap::{Parser, Subcommand};

/// Command-line client for the RE-MAT Clowder instance.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log verbosity.
    #[clap(short = 'v', long, global = true, default_value_t = Verbosity::Info)]
    pub verbosity: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List spaces, download a space, or upload files to one.
    Spaces(spaces::Args),

    /// List or download datasets.
    Datasets(datasets::Args),
}
