use std::path::PathBuf;

use super::{Bound, ThresholdSource, ThresholdTable};
use crate::data::DataLayout;
use crate::error::Result;
use crate::rank::{Playlist, RankPosition};

/// Threshold tables read from `RankNumbers/<playlist>.json`.
///
/// The file is read on every lookup so edited tables take effect on the
/// next refresh.
#[derive(Debug, Clone)]
pub struct ThresholdFiles {
    dir: PathBuf,
}

impl ThresholdFiles {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_layout(layout: &DataLayout) -> Self {
        Self::new(layout.thresholds_dir())
    }

    pub fn path_for(&self, playlist: Playlist) -> PathBuf {
        self.dir.join(format!("{}.json", playlist.id()))
    }

    pub fn load(&self, playlist: Playlist) -> Result<ThresholdTable> {
        ThresholdTable::load_from_path(playlist, self.path_for(playlist))
    }
}

impl ThresholdSource for ThresholdFiles {
    fn lookup(&self, playlist: Playlist, position: RankPosition, bound: Bound) -> Result<i32> {
        self.load(playlist)?.bound(position, bound)
    }
}
