//! MMR threshold lookup.
//!
//! Each ranked playlist has a static table of `{minMMR, maxMMR}` rows, one
//! per tier/division, at row `(tier - 1) * 4 + division + 1`. Tier 0 has no
//! row of its own; callers special-case it.
//!
//! - [`ThresholdTable`]: one parsed playlist table
//! - [`ThresholdFiles`]: reads the playlist's file on every lookup

mod files;
mod table;

pub use files::*;
pub use table::*;

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use crate::error::Result;
use crate::rank::{Playlist, RankPosition};

/// Which side of a division's MMR range to read
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, Display,
)]
pub enum Bound {
    #[strum(serialize = "minMMR")]
    Min,
    #[strum(serialize = "maxMMR")]
    Max,
}

/// Source of per-playlist MMR thresholds
pub trait ThresholdSource {
    /// MMR boundary of `position` in `playlist`.
    ///
    /// Fails with `DataUnavailable` when the table cannot be loaded or has no
    /// row for `position` (including tier 0).
    fn lookup(&self, playlist: Playlist, position: RankPosition, bound: Bound) -> Result<i32>;
}

impl<T: ThresholdSource + ?Sized> ThresholdSource for &T {
    fn lookup(&self, playlist: Playlist, position: RankPosition, bound: Bound) -> Result<i32> {
        (**self).lookup(playlist, position, bound)
    }
}

impl<T: ThresholdSource + ?Sized> ThresholdSource for Box<T> {
    fn lookup(&self, playlist: Playlist, position: RankPosition, bound: Bound) -> Result<i32> {
        (**self).lookup(playlist, position, bound)
    }
}
