use crate::space::SpaceName;
use clap::Parser;
use std::path::PathBuf;

/// Upload files to a new dataset in a space.
///
/// An empty dataset is created first, then the files are uploaded into it
/// in the order given.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Space to upload into.
    #[clap(short = 's', long, required = true)]
    pub space: SpaceName,

    /// Name for the new dataset.
    #[clap(short = 'n', long)]
    pub name: Option<String>,

    /// Files to upload.
    #[clap(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}
