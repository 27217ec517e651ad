use clap::Parser;

/// List datasets in a space.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Space identifier.
    pub space: String,
}
