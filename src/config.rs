use std::path::PathBuf;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

pub const CLOWDER_BASE_URL: &str = "https://re-mat.clowder.ncsa.illinois.edu";
pub const DEFAULT_DATASET_NAME: &str = "Default Dataset";
pub const DATASET_URL_PATH: &str = "datasets";
pub const KEY_FILE: &str = "clowder_key.txt";

// ----------------------------------------------------------------------------
// Config
// ----------------------------------------------------------------------------

/// Static configuration, assembled once at startup and passed explicitly
/// to command handlers.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base url of the Clowder instance.
    pub base_url: String,

    /// Name given to datasets created without an explicit `--name`.
    pub default_dataset_name: String,

    /// Path segment under the base url where datasets are browsable.
    pub dataset_url_path: String,

    /// Local file holding the access key.
    pub key_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: CLOWDER_BASE_URL.to_string(),
            default_dataset_name: DEFAULT_DATASET_NAME.to_string(),
            dataset_url_path: DATASET_URL_PATH.to_string(),
            key_path: PathBuf::from(KEY_FILE),
        }
    }
}
