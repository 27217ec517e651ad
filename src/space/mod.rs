use crate::cli;
use crate::client::ClowderClient;
use crate::dataset;
use crate::dataset::DatasetRecord;
use crate::utils;
use crate::utils::table::Table;
use color_eyre::eyre::{eyre, Report, Result};
use color_eyre::Help;
use itertools::Itertools;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

// ----------------------------------------------------------------------------
// Space Registry
// ----------------------------------------------------------------------------

/// Known spaces on the Clowder instance. New spaces are added here.
#[derive(Clone, Copy, Debug, EnumIter, PartialEq)]
pub enum SpaceName {
    Cure,
    PostCure,
    FrontVelocity,
}

impl SpaceName {
    /// Remote identifier assigned by the Clowder instance.
    pub fn id(&self) -> &'static str {
        match self {
            SpaceName::Cure => "64343b6be4b01a23c58bad90",
            SpaceName::PostCure => "6669d4d0e4b0a2d1b9b9a797",
            SpaceName::FrontVelocity => "6674972be4b0a2d1b9ba0228",
        }
    }

    /// Display name of the space on the remote instance.
    pub fn title(&self) -> &'static str {
        match self {
            SpaceName::Cure => "DSC Cure Kinetics",
            SpaceName::PostCure => "DSC Post Cures",
            SpaceName::FrontVelocity => "Front velocities",
        }
    }
}

impl fmt::Display for SpaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpaceName::Cure => "cure",
            SpaceName::PostCure => "post-cure",
            SpaceName::FrontVelocity => "front-velocity",
        };

        write!(f, "{}", name)
    }
}

impl FromStr for SpaceName {
    type Err = Report;

    fn from_str(name: &str) -> Result<Self, Report> {
        let name = match name {
            "cure" => SpaceName::Cure,
            "post-cure" => SpaceName::PostCure,
            "front-velocity" => SpaceName::FrontVelocity,
            _ => Err(eyre!("Unknown space name: {name}")).suggestion(format!(
                "Please choose from: {}",
                SpaceName::iter().join(", ")
            ))?,
        };

        Ok(name)
    }
}

// ----------------------------------------------------------------------------
// Wire Records
// ----------------------------------------------------------------------------

/// Space record as returned by the `/spaces` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SpaceRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

// ----------------------------------------------------------------------------
// Space List
// ----------------------------------------------------------------------------

/// List spaces on the remote instance, with their dataset counts.
pub async fn list(client: &ClowderClient) -> Result<(), Report> {
    let spaces: Vec<SpaceRecord> = client.get("/spaces").await?;

    let mut table = Table::new();
    table.headers = vec!["Name", "ID", "Datasets"]
        .into_iter()
        .map(String::from)
        .collect_vec();

    for space in spaces {
        let datasets: Vec<DatasetRecord> = client
            .get(&format!("/spaces/{}/datasets", space.id))
            .await?;
        table
            .rows
            .push(vec![space.name, space.id, datasets.len().to_string()]);
    }

    println!("\n{}", table.to_markdown()?);

    Ok(())
}

// ----------------------------------------------------------------------------
// Space Download
// ----------------------------------------------------------------------------

/// Download every dataset in a space that is not already mirrored locally.
pub async fn download(
    client: &ClowderClient,
    args: &cli::spaces::download::Args,
) -> Result<(), Report> {
    let datasets: Vec<DatasetRecord> = client
        .get(&format!("/spaces/{}/datasets", args.space_id))
        .await?;

    // A dataset directory on disk marks that dataset as already downloaded.
    let mut to_download = Vec::new();
    for record in datasets {
        let Some(id) = record.id.clone() else {
            warn!("Skipping dataset record with no id: {record:?}");
            continue;
        };
        if !Path::new(&id).is_dir() {
            to_download.push(id);
        }
    }

    info!(
        "Downloading {} datasets from space: {}",
        to_download.len(),
        args.space_id
    );

    let progress_bar = utils::progress_bar(to_download.len() as u64)?;
    for id in &to_download {
        dataset::download(client, id).await?;
        progress_bar.inc(1);
    }
    progress_bar.finish();

    Ok(())
}
