use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ladder_rank::Playlist;
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(name = "ladder-rank")]
#[command(about = "Ladder rank thresholds and overlay preview")]
#[command(version)]
pub struct Cli {
    /// Host data folder containing LadderRank/ (defaults to the BakkesMod data folder)
    #[arg(long, global = true, env = "LADDER_RANK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the rank snapshot for a tier/division
    Resolve {
        #[command(flatten)]
        rank: RankArgs,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a playlist's threshold table
    Check {
        /// Playlist id or name (e.g. 11, 2v2, hoops)
        #[arg(short, long, value_parser = parse_playlist)]
        playlist: Playlist,
    },
    /// Print the overlay draw list as JSON
    Render {
        #[command(flatten)]
        rank: RankArgs,

        #[arg(long, default_value_t = 1920)]
        width: u32,

        #[arg(long, default_value_t = 1080)]
        height: u32,

        /// Overlay configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct RankArgs {
    /// Playlist id or name (e.g. 11, 2v2, hoops)
    #[arg(short, long, value_parser = parse_playlist)]
    pub playlist: Playlist,

    #[arg(short, long)]
    pub tier: u8,

    #[arg(short, long)]
    pub division: u8,

    #[arg(short, long, default_value_t = 0.0)]
    pub mmr: f32,
}

pub fn parse_playlist(value: &str) -> Result<Playlist, String> {
    if let Ok(id) = value.parse::<i32>() {
        return Playlist::from_id(id).ok_or_else(|| format!("{} is not a ranked playlist", id));
    }
    Playlist::iter()
        .find(|p| {
            p.short_name().eq_ignore_ascii_case(value)
                || format!("{:?}", p).eq_ignore_ascii_case(value)
        })
        .ok_or_else(|| format!("unknown playlist: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_playlist() {
        assert_eq!(parse_playlist("11"), Ok(Playlist::Doubles));
        assert_eq!(parse_playlist("3v3"), Ok(Playlist::Standard));
        assert_eq!(parse_playlist("hoops"), Ok(Playlist::Hoops));
        assert_eq!(parse_playlist("duel"), Ok(Playlist::Duel));
        assert!(parse_playlist("12").is_err());
        assert!(parse_playlist("casual").is_err());
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::try_parse_from([
            "ladder-rank",
            "resolve",
            "-p",
            "2v2",
            "-t",
            "7",
            "-d",
            "2",
            "--data-dir",
            "/tmp/data",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/data")));
        let Command::Resolve { rank, json } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(rank.tier, 7);
        assert!(!json);
    }
}
