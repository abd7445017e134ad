use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tier 0: unranked / placement matches
pub const UNRANKED_TIER: u8 = 0;
/// Lowest ranked tier
pub const LOWEST_TIER: u8 = 1;
/// Top tier; only division 0 is meaningful
pub const TOP_TIER: u8 = 22;
/// Highest division index within a tier (displayed as IV)
pub const MAX_DIVISION: u8 = 3;

/// A tier/division pair on the ladder.
///
/// Always within 0..=22 × 0..=3; construct through [`RankPosition::new`] or
/// [`RankPosition::from_raw`] to keep that invariant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct RankPosition {
    tier: u8,
    division: u8,
}

impl RankPosition {
    pub fn new(tier: u8, division: u8) -> Result<Self> {
        if tier > TOP_TIER || division > MAX_DIVISION {
            return Err(Error::InvalidRank {
                tier: tier as i32,
                division: division as i32,
            });
        }
        Ok(Self { tier, division })
    }

    /// Validate raw values as handed back by the host.
    pub fn from_raw(tier: i32, division: i32) -> Result<Self> {
        let tier_ok = (0..=TOP_TIER as i32).contains(&tier);
        let division_ok = (0..=MAX_DIVISION as i32).contains(&division);
        if !tier_ok || !division_ok {
            return Err(Error::InvalidRank { tier, division });
        }
        Ok(Self {
            tier: tier as u8,
            division: division as u8,
        })
    }

    pub(crate) const fn at(tier: u8, division: u8) -> Self {
        Self { tier, division }
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }

    pub fn division(&self) -> u8 {
        self.division
    }

    pub fn is_unranked(&self) -> bool {
        self.tier == UNRANKED_TIER
    }

    pub fn is_top(&self) -> bool {
        self.tier == TOP_TIER
    }

    /// Threshold table row holding this position's bounds.
    ///
    /// `None` for tier 0, which has no thresholds.
    pub fn table_row(&self) -> Option<usize> {
        if self.is_unranked() {
            return None;
        }
        Some((self.tier as usize - 1) * 4 + self.division as usize + 1)
    }

    /// Display label ("DIV I" .. "DIV IV", blank for tier 0 and 22)
    pub fn name(&self) -> &'static str {
        super::division_name(self.tier as i32, self.division as i32)
    }

    /// Every valid position in ladder order
    pub fn all() -> impl Iterator<Item = RankPosition> {
        (UNRANKED_TIER..=TOP_TIER)
            .flat_map(|tier| (0..=MAX_DIVISION).map(move |division| Self::at(tier, division)))
    }
}

impl std::fmt::Display for RankPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(div {})", self.tier, self.division)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(RankPosition::new(22, 3).is_ok());
        assert!(RankPosition::new(23, 0).is_err());
        assert!(RankPosition::new(5, 4).is_err());
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(
            RankPosition::from_raw(5, 2).unwrap(),
            RankPosition::at(5, 2)
        );
        assert!(matches!(
            RankPosition::from_raw(-1, 0),
            Err(Error::InvalidRank { tier: -1, division: 0 })
        ));
        assert!(RankPosition::from_raw(3, -1).is_err());
    }

    #[test]
    fn test_table_row() {
        assert_eq!(RankPosition::at(0, 2).table_row(), None);
        assert_eq!(RankPosition::at(1, 0).table_row(), Some(1));
        assert_eq!(RankPosition::at(1, 3).table_row(), Some(4));
        assert_eq!(RankPosition::at(2, 0).table_row(), Some(5));
        assert_eq!(RankPosition::at(22, 0).table_row(), Some(85));
    }

    #[test]
    fn test_all_positions_in_ladder_order() {
        let all: Vec<_> = RankPosition::all().collect();
        assert_eq!(all.len(), 23 * 4);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }
}
