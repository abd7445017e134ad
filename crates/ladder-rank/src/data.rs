//! On-disk layout of the plugin's static data.
//!
//! ```text
//! <data folder>/LadderRank/
//! ├── RankNumbers/<playlist id>.json   threshold tables
//! └── RankIcons/<tier>.png             tier icons
//! ```

use std::path::{Path, PathBuf};

use crate::rank::Playlist;

pub const PLUGIN_DIR: &str = "LadderRank";
pub const THRESHOLD_DIR: &str = "RankNumbers";
pub const ICON_DIR: &str = "RankIcons";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    /// `data_folder` is the host's data folder, not the plugin directory
    pub fn new<P: Into<PathBuf>>(data_folder: P) -> Self {
        Self {
            root: data_folder.into().join(PLUGIN_DIR),
        }
    }

    pub fn plugin_dir(&self) -> &Path {
        &self.root
    }

    pub fn thresholds_dir(&self) -> PathBuf {
        self.root.join(THRESHOLD_DIR)
    }

    pub fn threshold_file(&self, playlist: Playlist) -> PathBuf {
        self.thresholds_dir()
            .join(format!("{}.json", playlist.id()))
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.root.join(ICON_DIR)
    }

    pub fn icon_path(&self, tier: u8) -> PathBuf {
        self.icons_dir().join(format!("{}.png", tier))
    }
}
