//! Check command: validate a playlist's threshold table.

use std::path::Path;

use anyhow::{Result, bail};
use ladder_rank::{Playlist, TableIssue};
use tracing::info;

use super::load_table;

pub fn issues(data_dir: &Path, playlist: Playlist) -> Result<Vec<TableIssue>> {
    let table = load_table(data_dir, playlist)?;
    info!("Checking {} rows for {}", table.rows().len(), playlist);
    Ok(table.validate())
}

pub fn run(data_dir: &Path, playlist: Playlist) -> Result<()> {
    let issues = issues(data_dir, playlist)?;
    if issues.is_empty() {
        println!("{} ({}): OK", playlist, playlist.id());
        return Ok(());
    }

    for issue in &issues {
        println!("{}", issue);
    }
    bail!("{} issue(s) in the {} threshold table", issues.len(), playlist)
}
