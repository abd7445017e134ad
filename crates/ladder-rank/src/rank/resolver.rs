//! Adjacent-rank resolution.
//!
//! Given a tier/division, find the division directly above and below and the
//! MMR that has to be crossed to reach each one. Four regimes:
//!
//! | Regime    | Condition               | upper          | lower          | bounds     |
//! |-----------|-------------------------|----------------|----------------|------------|
//! | Placement | tier 0                  | (22, 0)        | (1, 0)         | max / min  |
//! | Floor     | tier 1, div 0           | (1, 1)         | (1, 0)         | min / min  |
//! | Ceiling   | tier 22                 | (22, 0)        | (21, 3)        | max / max  |
//! | Normal    | everything else         | next division  | prev division  | min / max  |
//!
//! Promotion thresholds are the minimum of the division above and demotion
//! thresholds the maximum of the division below, except at the two ends of
//! the ladder where nothing exists beyond the neighbor.

use strum::{Display, IntoStaticStr};
use tracing::debug;

use super::{LOWEST_TIER, MAX_DIVISION, Playlist, RankPosition, TOP_TIER};
use crate::error::Result;
use crate::threshold::{Bound, ThresholdSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum Regime {
    Placement,
    Floor,
    Ceiling,
    Normal,
}

impl Regime {
    pub fn classify(position: RankPosition) -> Self {
        match (position.tier(), position.division()) {
            (0, _) => Self::Placement,
            (LOWEST_TIER, 0) => Self::Floor,
            (TOP_TIER, _) => Self::Ceiling,
            _ => Self::Normal,
        }
    }
}

/// Neighboring divisions and which bound to read from each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub regime: Regime,
    pub upper: RankPosition,
    pub lower: RankPosition,
    pub upper_bound: Bound,
    pub lower_bound: Bound,
}

impl Neighbors {
    pub fn of(position: RankPosition) -> Self {
        let regime = Regime::classify(position);
        let tier = position.tier();
        let division = position.division();

        let (upper, lower, upper_bound, lower_bound) = match regime {
            Regime::Placement => (
                RankPosition::at(TOP_TIER, 0),
                RankPosition::at(LOWEST_TIER, 0),
                Bound::Max,
                Bound::Min,
            ),
            Regime::Floor => (
                RankPosition::at(LOWEST_TIER, 1),
                RankPosition::at(LOWEST_TIER, 0),
                Bound::Min,
                Bound::Min,
            ),
            Regime::Ceiling => (
                RankPosition::at(TOP_TIER, 0),
                RankPosition::at(TOP_TIER - 1, MAX_DIVISION),
                Bound::Max,
                Bound::Max,
            ),
            Regime::Normal => {
                let (upper, lower) = match division {
                    0 => (
                        RankPosition::at(tier, 1),
                        RankPosition::at(tier - 1, MAX_DIVISION),
                    ),
                    MAX_DIVISION => (
                        RankPosition::at(tier + 1, 0),
                        RankPosition::at(tier, division - 1),
                    ),
                    _ => (
                        RankPosition::at(tier, division + 1),
                        RankPosition::at(tier, division - 1),
                    ),
                };
                (upper, lower, Bound::Min, Bound::Max)
            }
        };

        Self {
            regime,
            upper,
            lower,
            upper_bound,
            lower_bound,
        }
    }
}

/// Result of [`resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacentRanks {
    pub regime: Regime,
    pub upper: RankPosition,
    pub lower: RankPosition,
    pub upper_name: String,
    pub lower_name: String,
    /// MMR to cross to reach `upper`
    pub upper_bound_mmr: i32,
    /// MMR below which the player drops to `lower`
    pub lower_bound_mmr: i32,
    /// Minimum MMR of the next tier's first division
    pub next_tier_min_mmr: i32,
    /// Minimum MMR of the current tier's first division.
    ///
    /// Named for the display slot it fills, not for the tier below.
    pub prev_tier_max_mmr: i32,
}

pub fn resolve<S>(source: &S, playlist: Playlist, position: RankPosition) -> Result<AdjacentRanks>
where
    S: ThresholdSource + ?Sized,
{
    let neighbors = Neighbors::of(position);

    let upper_bound_mmr = source.lookup(playlist, neighbors.upper, neighbors.upper_bound)?;
    let lower_bound_mmr = source.lookup(playlist, neighbors.lower, neighbors.lower_bound)?;

    // Tier-level values for the simplified display. Placement reads tier 1,
    // since tier 0 has no row.
    let next_tier = RankPosition::at((position.tier() + 1).min(TOP_TIER), 0);
    let current_tier = RankPosition::at(position.tier().max(LOWEST_TIER), 0);
    let next_tier_min_mmr = source.lookup(playlist, next_tier, Bound::Min)?;
    let prev_tier_max_mmr = source.lookup(playlist, current_tier, Bound::Min)?;

    debug!(
        "Adjacent ranks ({}): lower={}, current={}, upper={}",
        neighbors.regime, neighbors.lower, position, neighbors.upper
    );
    debug!(
        "Division MMR thresholds: lower={}, upper={}; tier display: currentTierMin={}, nextTierMin={}",
        lower_bound_mmr, upper_bound_mmr, prev_tier_max_mmr, next_tier_min_mmr
    );

    Ok(AdjacentRanks {
        regime: neighbors.regime,
        upper: neighbors.upper,
        lower: neighbors.lower,
        upper_name: neighbors.upper.name().to_string(),
        lower_name: neighbors.lower.name().to_string(),
        upper_bound_mmr,
        lower_bound_mmr,
        next_tier_min_mmr,
        prev_tier_max_mmr,
    })
}
