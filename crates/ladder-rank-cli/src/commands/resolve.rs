//! Resolve command: the snapshot the overlay would show.

use std::path::Path;

use anyhow::{Context, Result};
use ladder_rank::{RankPosition, RankSnapshot, resolve};

use super::load_table;
use crate::cli::RankArgs;

pub fn snapshot_for(data_dir: &Path, rank: RankArgs) -> Result<RankSnapshot> {
    let table = load_table(data_dir, rank.playlist)?;
    let position = RankPosition::new(rank.tier, rank.division)?;
    let adjacent = resolve(&table, rank.playlist, position)
        .with_context(|| format!("Failed to resolve {} in {}", position, rank.playlist))?;
    Ok(RankSnapshot::new(rank.playlist, position, rank.mmr, adjacent))
}

pub fn summary(snapshot: &RankSnapshot) -> String {
    let label = |name: &str| match name.trim() {
        "" => String::new(),
        name => format!(" {}", name),
    };

    [
        format!(
            "Playlist:  {} ({})",
            snapshot.playlist,
            snapshot.playlist.id()
        ),
        format!(
            "Current:   tier {}{}  MMR {}",
            snapshot.position.tier(),
            label(&snapshot.name_current),
            snapshot.display_mmr()
        ),
        format!(
            "Upper:     tier {}{}  from {}",
            snapshot.upper.tier(),
            label(&snapshot.name_upper),
            snapshot.upper_bound_mmr
        ),
        format!(
            "Lower:     tier {}{}  up to {}",
            snapshot.lower.tier(),
            label(&snapshot.name_lower),
            snapshot.lower_bound_mmr
        ),
        format!("Next tier: {}", snapshot.next_tier_min_mmr),
        format!("This tier: {}", snapshot.prev_tier_max_mmr),
    ]
    .join("\n")
}

pub fn run(data_dir: &Path, rank: RankArgs, json: bool) -> Result<()> {
    let snapshot = snapshot_for(data_dir, rank)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", summary(&snapshot));
    }
    Ok(())
}
