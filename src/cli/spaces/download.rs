use clap::Parser;

/// Download all datasets in a space.
///
/// Each dataset is mirrored to a directory named by its identifier.
/// Datasets whose directory already exists are skipped.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Space identifier.
    pub space_id: String,
}
