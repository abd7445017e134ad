//! CLI command implementations.

pub mod check;
pub mod render;
pub mod resolve;

use std::path::Path;

use anyhow::{Context, Result};
use ladder_rank::{DataLayout, Playlist, ThresholdTable};

/// Load `playlist`'s threshold table from the data folder
pub fn load_table(data_dir: &Path, playlist: Playlist) -> Result<ThresholdTable> {
    let path = DataLayout::new(data_dir).threshold_file(playlist);
    ThresholdTable::load_from_path(playlist, &path)
        .with_context(|| format!("Failed to load thresholds for {}", playlist))
}
