//! Capabilities the host game client provides.
//!
//! The core never talks to the game directly; the plugin is generic over a
//! [`Host`] that implements these traits.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::overlay::ScreenSize;
use crate::snapshot::ScheduledCheck;

/// Opaque identity of the local player
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlayerId(pub String);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw rank as reported by the host; may be outside the ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillRank {
    pub tier: i32,
    pub division: i32,
}

/// Readiness of the host's rank data for one playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, Display)]
pub enum SyncStatus {
    Synced,
    NotSynced,
    Syncing,
}

impl SyncStatus {
    pub fn is_ready(&self) -> bool {
        *self == SyncStatus::Synced
    }
}

/// Player rank and MMR data source
pub trait RankProvider {
    fn local_player(&self) -> PlayerId;

    fn rank(&self, player: &PlayerId, playlist: i32) -> SkillRank;

    fn mmr(&self, player: &PlayerId, playlist: i32) -> f32;

    fn is_synced(&self, player: &PlayerId, playlist: i32) -> bool;

    fn is_syncing(&self, player: &PlayerId) -> bool;

    fn current_playlist(&self) -> i32;

    fn is_ranked_playlist(&self, playlist: i32) -> bool;

    fn in_online_match(&self) -> bool {
        true
    }

    fn in_replay(&self) -> bool {
        false
    }

    /// A background sync in progress wins over a stale "synced" flag.
    fn sync_status(&self, player: &PlayerId, playlist: i32) -> SyncStatus {
        if self.is_syncing(player) {
            SyncStatus::Syncing
        } else if self.is_synced(player, playlist) {
            SyncStatus::Synced
        } else {
            SyncStatus::NotSynced
        }
    }
}

/// Handle to an image owned by the host's asset system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageHandle {
    id: u64,
    width: u32,
    height: u32,
}

impl ImageHandle {
    pub fn new(id: u64, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

pub trait AssetLoader {
    /// `None` when the image is missing or not ready for drawing
    fn load_image(&mut self, path: &Path) -> Option<ImageHandle>;

    fn release_image(&mut self, _handle: ImageHandle) {}
}

/// Deferred invocation; the host calls back [`crate::plugin::LadderRank::on_timer`]
pub trait Scheduler {
    fn after(&mut self, delay: Duration, check: ScheduledCheck);
}

/// Game events the plugin listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum HostEvent {
    #[strum(serialize = "Function TAGame.GameEvent_Soccar_TA.OnMatchWinnerSet")]
    MatchWinnerSet,
    #[strum(serialize = "Function TAGame.GameEvent_Soccar_TA.Destroyed")]
    MatchDestroyed,
}

impl HostEvent {
    pub fn hook_name(&self) -> &'static str {
        self.into()
    }
}

pub trait EventHooks {
    fn hook_event(&mut self, event: HostEvent);

    fn unhook_event(&mut self, event: HostEvent);
}

/// Everything the plugin needs from the game client
pub trait Host: RankProvider + AssetLoader + Scheduler + EventHooks {
    fn screen_size(&self) -> ScreenSize;

    fn data_folder(&self) -> PathBuf;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRankProvider;

    #[test]
    fn test_sync_status_prefers_syncing() {
        let mut provider = MockRankProvider::new(11, 5, 0, 900.0);
        let player = provider.local_player();
        assert_eq!(provider.sync_status(&player, 11), SyncStatus::Synced);

        provider.syncing = true;
        assert_eq!(provider.sync_status(&player, 11), SyncStatus::Syncing);

        provider.syncing = false;
        provider.unsynced_checks.set(1);
        assert_eq!(provider.sync_status(&player, 11), SyncStatus::NotSynced);
        assert!(provider.sync_status(&player, 11).is_ready());
    }

    #[test]
    fn test_hook_names() {
        assert_eq!(
            HostEvent::MatchWinnerSet.hook_name(),
            "Function TAGame.GameEvent_Soccar_TA.OnMatchWinnerSet"
        );
    }
}
