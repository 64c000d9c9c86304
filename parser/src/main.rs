mod analytics;
mod args;
mod plot;
mod runner;

use crate::args::FlamethrowerArgs;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = FlamethrowerArgs::parse();
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting the flamethrower results parser...");
    runner::run(&args).context("Failed to render flamethrower charts")?;
    info!("Finished the flamethrower results parser.");
    Ok(())
}
