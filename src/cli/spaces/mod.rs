pub mod download;
pub mod list;
pub mod upload;

use clap::{Parser, Subcommand};

/// List spaces, download a space, or upload files to one.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

/// List spaces, download a space, or upload files to one.
#[derive(Subcommand, Debug)]
#[clap(verbatim_doc_comment)]
pub enum Command {
    /// List spaces.
    List(list::Args),

    /// Download all datasets in a space.
    Download(download::Args),

    /// Upload files to a new dataset in a space.
    Upload(upload::Args),
}
