//! Render command: print the overlay draw list as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use ladder_rank::{Configuration, DrawCommand, IconSlots, RankSnapshot, ScreenSize, present};
use serde::Serialize;

use super::resolve::snapshot_for;
use crate::cli::RankArgs;

#[derive(Debug, Serialize)]
pub struct RenderOutput {
    pub screen: ScreenSize,
    pub snapshot: RankSnapshot,
    pub commands: Vec<DrawCommand>,
}

/// Icons are not loaded here, so the list carries no image commands.
pub fn render(
    data_dir: &Path,
    rank: RankArgs,
    screen: ScreenSize,
    config: &Configuration,
) -> Result<RenderOutput> {
    let snapshot = snapshot_for(data_dir, rank)?;
    let commands = present(&snapshot, &IconSlots::default(), config, screen);
    Ok(RenderOutput {
        screen,
        snapshot,
        commands,
    })
}

pub fn run(
    data_dir: &Path,
    rank: RankArgs,
    width: u32,
    height: u32,
    config: Option<&Path>,
) -> Result<()> {
    let config = match config {
        Some(path) => Configuration::load_from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Configuration::default(),
    };

    let output = render(data_dir, rank, ScreenSize::new(width, height), &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
