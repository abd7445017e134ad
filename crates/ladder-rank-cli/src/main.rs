mod cli;
mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

/// BakkesMod's data folder under the platform config directory
fn default_data_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Failed to determine config directory")?;
    Ok(config_dir.join("bakkesmod").join("bakkesmod").join("data"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "ladder_rank=debug"
    } else {
        "ladder_rank=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    debug!("Data folder: {}", data_dir.display());

    match cli.command {
        Command::Resolve { rank, json } => commands::resolve::run(&data_dir, rank, json),
        Command::Check { playlist } => commands::check::run(&data_dir, playlist),
        Command::Render {
            rank,
            width,
            height,
            config,
        } => commands::render::run(&data_dir, rank, width, height, config.as_deref()),
    }
}
