use clap::Parser;

/// Download a dataset.
///
/// The dataset is mirrored to a directory named by its identifier,
/// holding its metadata and curve file.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub struct Args {
    /// Dataset identifier.
    pub dataset_id: String,
}
