mod aggregator;
mod auth;
mod cli;
mod error;
mod models;
mod providers;
mod stats;
mod summary;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting workflow-stats");
    cli.execute().await?;

    Ok(())
}
