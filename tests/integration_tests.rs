use remat_data::cli::verbosity::Verbosity;
use remat_data::cli::{self, Cli};
use remat_data::config::Config;
use remat_data::dataset::{self, DatasetRecord, FileRecord};
use remat_data::space::SpaceName;
use remat_data::utils;

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use serde_json::json;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn space_registry() -> Result<(), Report> {
    let mut ids = HashSet::new();
    for space in SpaceName::iter() {
        // every registered space round-trips through its display name
        assert_eq!(SpaceName::from_str(&space.to_string())?, space);
        assert!(!space.id().is_empty());
        assert!(!space.title().is_empty());
        assert!(ids.insert(space.id()));
    }

    assert!(SpaceName::from_str("dsc-cure").is_err());

    Ok(())
}

#[test]
fn upload_mime_types() {
    assert_eq!(
        utils::upload_mime_type(Path::new("DSC_Curve.csv")),
        "text/csv"
    );
    assert_eq!(
        utils::upload_mime_type(Path::new("front.webm")),
        "video/webm"
    );
    assert_eq!(
        utils::upload_mime_type(Path::new("data.bin")),
        "application/octet-stream"
    );
    assert_eq!(
        utils::upload_mime_type(Path::new("no_extension")),
        "application/octet-stream"
    );

    // .mp4 resolves to video even though the generic guess has no entry
    assert_eq!(utils::guess_mime_type(Path::new("video.mp4")), None);
    assert_eq!(utils::upload_mime_type(Path::new("video.mp4")), "video/mp4");
    assert_eq!(utils::upload_mime_type(Path::new("VIDEO.MP4")), "video/mp4");

    assert!(utils::is_video("video/mp4"));
    assert!(utils::is_video("video/quicktime"));
    assert!(!utils::is_video("text/csv"));
    assert!(!utils::is_video("application/octet-stream"));
}

#[test]
fn upload_args_require_one_space_and_files() -> Result<(), Report> {
    // no space selected
    assert!(Cli::try_parse_from(["remat-data", "spaces", "upload", "a.csv"]).is_err());

    // no files given
    assert!(
        Cli::try_parse_from(["remat-data", "spaces", "upload", "--space", "cure"]).is_err()
    );

    // space selected twice
    assert!(Cli::try_parse_from([
        "remat-data",
        "spaces",
        "upload",
        "--space",
        "cure",
        "--space",
        "post-cure",
        "a.csv",
    ])
    .is_err());

    // unknown space name
    assert!(Cli::try_parse_from([
        "remat-data",
        "spaces",
        "upload",
        "--space",
        "unknown",
        "a.csv",
    ])
    .is_err());

    // one space, one or more files
    let args = Cli::try_parse_from([
        "remat-data",
        "spaces",
        "upload",
        "--space",
        "front-velocity",
        "--name",
        "Test_Dataset",
        "a.csv",
        "b.mp4",
    ])?;
    let cli::Command::Spaces(spaces) = args.command else {
        panic!("Expected the spaces command group.");
    };
    let cli::spaces::Command::Upload(upload) = spaces.command else {
        panic!("Expected the upload command.");
    };
    assert_eq!(upload.space, SpaceName::FrontVelocity);
    assert_eq!(upload.name.as_deref(), Some("Test_Dataset"));
    // files upload in input order
    assert_eq!(upload.files, vec![Path::new("a.csv"), Path::new("b.mp4")]);

    Ok(())
}

#[test]
fn dataset_url_embeds_identifiers() {
    let config = Config::default();
    let space = SpaceName::Cure;

    let url = dataset::dataset_url(&config, "abc123xyz", space.id());

    assert_eq!(
        url,
        format!(
            "{}/datasets/abc123xyz?space={}",
            config.base_url,
            space.id()
        )
    );
}

#[test]
fn metadata_write_is_exact() -> Result<(), Report> {
    let tmp_dir = tempfile::tempdir()?;
    let path = tmp_dir.path().join("metadata.json");

    let metadata = json!({
        "@context": "https://clowder.ncsa.illinois.edu/contexts/metadata.jsonld",
        "title": "DSC run 42",
        "temperature": 180,
    });
    dataset::write_metadata(&metadata, &path)?;

    let written = std::fs::read_to_string(&path)?;
    // indented, and parses back to the exact payload
    assert!(written.contains("\n  "));
    let parsed: serde_json::Value = serde_json::from_str(&written)?;
    assert_eq!(parsed, metadata);

    Ok(())
}

#[test]
fn mirror_dir_is_a_completion_marker() -> Result<(), Report> {
    let tmp_dir = tempfile::tempdir()?;
    let dir = tmp_dir.path().join("64343b6be4b01a23c58bad90");

    dataset::create_mirror_dir(&dir)?;
    assert!(dir.is_dir());

    // a second download of the same dataset is refused
    let result = dataset::create_mirror_dir(&dir);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("already downloaded"));

    Ok(())
}

#[test]
fn curve_file_requires_exact_name() {
    let files = vec![
        FileRecord {
            id: String::from("1"),
            filename: String::from("dsc_curve.csv"),
        },
        FileRecord {
            id: String::from("2"),
            filename: String::from("DSC_Curve.csv.bak"),
        },
        FileRecord {
            id: String::from("3"),
            filename: String::from("DSC_Curve.csv"),
        },
    ];

    let curve = dataset::find_curve_file(&files).unwrap();
    assert_eq!(curve.id, "3");

    // near-matches do not count
    assert!(dataset::find_curve_file(&files[..2]).is_none());
    assert!(dataset::find_curve_file(&[]).is_none());
}

#[test]
fn list_table_defaults_missing_fields() -> Result<(), Report> {
    let datasets: Vec<DatasetRecord> = serde_json::from_value(json!([
        {"id": "abc123", "name": "Cure run"},
        {"id": "def456"},
        {"name": "Orphaned"},
    ]))?;

    let table = dataset::list_table(&datasets);
    assert_eq!(table.rows[0], vec!["Cure run", "abc123"]);
    assert_eq!(table.rows[1], vec!["N/A", "def456"]);
    assert_eq!(table.rows[2], vec!["Orphaned", "N/A"]);

    let markdown = table.to_markdown()?;
    assert!(markdown.starts_with('|'));
    assert!(markdown.contains("N/A"));

    Ok(())
}

#[test]
fn verbosity_round_trip() -> Result<(), Report> {
    for level in ["debug", "info", "warn"] {
        assert_eq!(Verbosity::from_str(level)?.to_string(), level);
    }
    assert!(Verbosity::from_str("trace").is_err());

    Ok(())
}
