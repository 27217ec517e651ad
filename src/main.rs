use clap::Parser;
use color_eyre::eyre::{Report, Result};
use remat_data::cli::{Cli, Command};
use remat_data::client::ClowderClient;
use remat_data::config::Config;
use remat_data::{cli, dataset, space};
use std::env;

fn setup(args: &Cli) -> Result<(), Report> {
    color_eyre::install()?;

    // Set default logging level if RUST_LOG is not set.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", args.verbosity.to_string())
    }
    env_logger::init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Parse CLI parameters
    let args = Cli::parse();

    // Misc setup actions like logging
    setup(&args)?;

    // Static configuration, passed explicitly to every command handler.
    let config = Config::default();
    let client = ClowderClient::new(&config)?;

    match args.command {
        Command::Spaces(spaces) => match spaces.command {
            cli::spaces::Command::List(_) => space::list(&client).await?,
            cli::spaces::Command::Download(args) => space::download(&client, &args).await?,
            cli::spaces::Command::Upload(args) => {
                dataset::upload(&client, &config, &args).await?
            }
        },
        Command::Datasets(datasets) => match datasets.command {
            cli::datasets::Command::List(args) => dataset::list(&client, &args).await?,
            cli::datasets::Command::Download(args) => {
                dataset::download(&client, &args.dataset_id).await?
            }
        },
    }

    Ok(())
}
