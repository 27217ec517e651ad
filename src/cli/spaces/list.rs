use clap::Parser;

/// List spaces.
///
/// Every space on the instance is shown with its identifier and the
/// number of datasets it holds.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub struct Args {}
