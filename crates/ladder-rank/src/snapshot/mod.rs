//! Rank snapshots and the refresh cycle that produces them.
//!
//! A [`RankSnapshot`] is built in full by [`SnapshotManager`] and swapped in
//! only once every lookup has succeeded; readers never see a half-updated
//! value.

mod manager;

pub use manager::*;

use serde::Serialize;

use crate::rank::{AdjacentRanks, Playlist, RankPosition};

/// Current-rank label shown until the first refresh completes
pub const LOADING_NAME: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankSnapshot {
    pub playlist: Playlist,
    pub position: RankPosition,
    pub mmr: f32,
    pub upper: RankPosition,
    pub lower: RankPosition,
    pub upper_bound_mmr: i32,
    pub lower_bound_mmr: i32,
    pub next_tier_min_mmr: i32,
    pub prev_tier_max_mmr: i32,
    pub name_current: String,
    pub name_upper: String,
    pub name_lower: String,
    #[serde(skip)]
    loaded: bool,
}

impl Default for RankSnapshot {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl RankSnapshot {
    /// Empty snapshot displayed before any refresh has succeeded
    pub fn placeholder() -> Self {
        Self {
            playlist: Playlist::default(),
            position: RankPosition::default(),
            mmr: 0.0,
            upper: RankPosition::default(),
            lower: RankPosition::default(),
            upper_bound_mmr: 0,
            lower_bound_mmr: 0,
            next_tier_min_mmr: 0,
            prev_tier_max_mmr: 0,
            name_current: LOADING_NAME.to_string(),
            name_upper: String::new(),
            name_lower: String::new(),
            loaded: false,
        }
    }

    pub fn new(playlist: Playlist, position: RankPosition, mmr: f32, adjacent: AdjacentRanks) -> Self {
        Self {
            playlist,
            position,
            mmr,
            upper: adjacent.upper,
            lower: adjacent.lower,
            upper_bound_mmr: adjacent.upper_bound_mmr,
            lower_bound_mmr: adjacent.lower_bound_mmr,
            next_tier_min_mmr: adjacent.next_tier_min_mmr,
            prev_tier_max_mmr: adjacent.prev_tier_max_mmr,
            name_current: position.name().to_string(),
            name_upper: adjacent.upper_name,
            name_lower: adjacent.lower_name,
            loaded: true,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !self.loaded
    }

    /// MMR as displayed (truncated)
    pub fn display_mmr(&self) -> i32 {
        self.mmr as i32
    }
}
