use crate::cli;
use crate::client::ClowderClient;
use crate::config::Config;
use crate::utils;
use crate::utils::table::Table;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use itertools::Itertools;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir, File};
use std::io::Write;
use std::path::{Path, PathBuf};

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// The one curve artifact mirrored alongside each dataset's metadata.
pub const CURVE_FILE_NAME: &str = "DSC_Curve.csv";

/// Local file name for mirrored dataset metadata.
pub const METADATA_FILE_NAME: &str = "metadata.json";

// ----------------------------------------------------------------------------
// Wire Records
// ----------------------------------------------------------------------------

/// Dataset record as returned by the space listing endpoints.
///
/// Both fields are optional; the instance is known to omit them on
/// some older records.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DatasetRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// File record as returned by `/datasets/{id}/files`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileRecord {
    pub id: String,
    pub filename: String,
}

/// Request body of `/datasets/createempty`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateDataset {
    pub name: String,
    pub description: String,
    pub space: Vec<String>,
    pub collection: Vec<String>,
}

/// Response of `/datasets/createempty`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedDataset {
    pub id: String,
}

// ----------------------------------------------------------------------------
// Dataset List
// ----------------------------------------------------------------------------

/// Render dataset records as a table of name and identifier.
pub fn list_table(datasets: &[DatasetRecord]) -> Table {
    let mut table = Table::new();
    table.headers = vec!["Name", "ID"].into_iter().map(String::from).collect_vec();

    for dataset in datasets {
        table.rows.push(vec![
            dataset.name.clone().unwrap_or_else(|| String::from("N/A")),
            dataset.id.clone().unwrap_or_else(|| String::from("N/A")),
        ]);
    }

    table
}

/// List datasets in a space.
pub async fn list(
    client: &ClowderClient,
    args: &cli::datasets::list::Args,
) -> Result<(), Report> {
    let datasets: Vec<DatasetRecord> = client
        .get(&format!("/spaces/{}/datasets", args.space))
        .await?;

    let table = list_table(&datasets);
    println!("\n{}", table.to_markdown()?);

    Ok(())
}

// ----------------------------------------------------------------------------
// Dataset Download
// ----------------------------------------------------------------------------

/// Create the local mirror directory for a dataset.
///
/// An existing directory means the dataset was already downloaded, and is
/// reported as such rather than as a raw filesystem error.
pub fn create_mirror_dir(dir: &Path) -> Result<(), Report> {
    if dir.is_dir() {
        return Err(eyre!("Dataset is already downloaded: {dir:?}"))
            .suggestion(format!("Delete {dir:?} to download the dataset again."));
    }
    create_dir(dir).wrap_err_with(|| format!("Unable to create directory: {dir:?}"))?;

    Ok(())
}

/// Write dataset metadata as indented json.
pub fn write_metadata(metadata: &serde_json::Value, path: &Path) -> Result<(), Report> {
    let output = serde_json::to_string_pretty(metadata)
        .wrap_err_with(|| format!("Failed to parse: {metadata:?}"))?;

    let mut file =
        File::create(path).wrap_err_with(|| format!("Failed to create file: {path:?}"))?;
    file.write_all(format!("{}\n", output).as_bytes())
        .wrap_err_with(|| format!("Failed to write file: {path:?}"))?;

    Ok(())
}

/// Select the curve artifact from a dataset's file listing.
///
/// Only an exact filename match counts; datasets without one simply have
/// no curve to mirror.
pub fn find_curve_file(files: &[FileRecord]) -> Option<&FileRecord> {
    files.iter().find(|file| file.filename == CURVE_FILE_NAME)
}

/// Download one dataset: metadata first, then the curve file if listed.
pub async fn download(client: &ClowderClient, dataset_id: &str) -> Result<(), Report> {
    let dir = PathBuf::from(dataset_id);
    create_mirror_dir(&dir)?;

    let metadata: serde_json::Value = client
        .get(&format!("/datasets/{dataset_id}/metadata.jsonld"))
        .await?;
    let metadata_path = dir.join(METADATA_FILE_NAME);
    info!("Writing metadata: {metadata_path:?}");
    write_metadata(&metadata, &metadata_path)?;

    let files: Vec<FileRecord> = client
        .get(&format!("/datasets/{dataset_id}/files"))
        .await?;
    if let Some(curve) = find_curve_file(&files) {
        let output_path = dir.join(CURVE_FILE_NAME);
        info!("Downloading curve: {output_path:?}");
        client
            .get_file(&format!("/files/{}", curve.id), &output_path)
            .await?;
    }

    Ok(())
}

// ----------------------------------------------------------------------------
// Dataset Upload
// ----------------------------------------------------------------------------

/// Browsable URL of a dataset within its space.
pub fn dataset_url(config: &Config, dataset_id: &str, space_id: &str) -> String {
    format!(
        "{}/{}/{}?space={}",
        config.base_url.trim_end_matches('/'),
        config.dataset_url_path,
        dataset_id,
        space_id
    )
}

/// Create an empty dataset in a space and upload files into it.
///
/// A failure to create the dataset aborts the command; a failure on an
/// individual file is reported and the remaining files still upload.
pub async fn upload(
    client: &ClowderClient,
    config: &Config,
    args: &cli::spaces::upload::Args,
) -> Result<(), Report> {
    let space_id = args.space.id();
    info!("Uploading to space: {} ({space_id})", args.space.title());

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| config.default_dataset_name.clone());
    let payload = CreateDataset {
        name,
        description: String::from("Dataset created by CLI"),
        space: vec![space_id.to_string()],
        collection: Vec::new(),
    };

    let created: CreatedDataset = client
        .post("/datasets/createempty", &payload)
        .await
        .wrap_err("Failed to create a new dataset.")?;
    let url = dataset_url(config, &created.id, space_id);

    let progress_bar = utils::progress_bar(args.files.len() as u64)?;
    for file in &args.files {
        let mime = utils::upload_mime_type(file);
        let upload_path = format!("/uploadToDataset/{}", created.id);

        // Explicit content type for video, so the remote preview pipeline
        // picks the file up.
        let result = if utils::is_video(mime) {
            client.post_multipart(&upload_path, file, mime).await
        } else {
            client.post_file(&upload_path, file).await.map(|_| ())
        };

        if let Err(error) = result {
            warn!("Failed to upload file {file:?}: {error}");
        }
        progress_bar.inc(1);
    }
    progress_bar.finish();

    println!("Uploaded files to newly created dataset: {url}");

    Ok(())
}
