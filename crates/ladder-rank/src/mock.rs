//! Test doubles for the host capabilities.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::host::{
    AssetLoader, EventHooks, Host, HostEvent, ImageHandle, PlayerId, RankProvider, Scheduler,
    SkillRank,
};
use crate::overlay::ScreenSize;
use crate::rank::Playlist;
use crate::snapshot::ScheduledCheck;
use crate::threshold::{ThresholdRow, ThresholdTable};

/// Height and width of every mock image
pub const MOCK_IMAGE_SIZE: u32 = 128;

/// Strictly increasing table with a few spare rows past the top tier.
///
/// Row `r` covers `r * 20 ..= r * 20 + 19`.
pub fn sample_table(playlist: Playlist) -> ThresholdTable {
    let rows = (0..89)
        .map(|r| ThresholdRow {
            min_mmr: r * 20,
            max_mmr: r * 20 + 19,
        })
        .collect();
    ThresholdTable::new(playlist, rows)
}

#[derive(Debug)]
pub struct MockRankProvider {
    pub player: PlayerId,
    pub playlist: i32,
    pub tier: i32,
    pub division: i32,
    pub mmr: f32,
    pub syncing: bool,
    /// `is_synced` answers `false` this many more times
    pub unsynced_checks: Cell<u32>,
    /// Calls to `is_synced` so far
    pub sync_checks: Cell<u32>,
    pub online: bool,
    pub replay: bool,
}

impl MockRankProvider {
    pub fn new(playlist: i32, tier: i32, division: i32, mmr: f32) -> Self {
        Self {
            player: PlayerId("player-1".to_string()),
            playlist,
            tier,
            division,
            mmr,
            syncing: false,
            unsynced_checks: Cell::new(0),
            sync_checks: Cell::new(0),
            online: true,
            replay: false,
        }
    }
}

impl RankProvider for MockRankProvider {
    fn local_player(&self) -> PlayerId {
        self.player.clone()
    }

    fn rank(&self, _player: &PlayerId, _playlist: i32) -> SkillRank {
        SkillRank {
            tier: self.tier,
            division: self.division,
        }
    }

    fn mmr(&self, _player: &PlayerId, _playlist: i32) -> f32 {
        self.mmr
    }

    fn is_synced(&self, _player: &PlayerId, _playlist: i32) -> bool {
        self.sync_checks.set(self.sync_checks.get() + 1);
        let remaining = self.unsynced_checks.get();
        if remaining > 0 {
            self.unsynced_checks.set(remaining - 1);
            return false;
        }
        true
    }

    fn is_syncing(&self, _player: &PlayerId) -> bool {
        self.syncing
    }

    fn current_playlist(&self) -> i32 {
        self.playlist
    }

    fn is_ranked_playlist(&self, playlist: i32) -> bool {
        Playlist::is_ranked(playlist)
    }

    fn in_online_match(&self) -> bool {
        self.online
    }

    fn in_replay(&self) -> bool {
        self.replay
    }
}

#[derive(Debug, Default)]
pub struct MockAssetLoader {
    pub loaded: Vec<PathBuf>,
    pub released: Vec<ImageHandle>,
    /// Paths that fail to load
    pub missing: Vec<PathBuf>,
    next_id: u64,
}

impl AssetLoader for MockAssetLoader {
    fn load_image(&mut self, path: &Path) -> Option<ImageHandle> {
        if self.missing.iter().any(|m| m == path) {
            return None;
        }
        self.loaded.push(path.to_path_buf());
        self.next_id += 1;
        Some(ImageHandle::new(self.next_id, MOCK_IMAGE_SIZE, MOCK_IMAGE_SIZE))
    }

    fn release_image(&mut self, handle: ImageHandle) {
        self.released.push(handle);
    }
}

#[derive(Debug, Default)]
pub struct MockScheduler {
    pub scheduled: Vec<(Duration, ScheduledCheck)>,
}

impl MockScheduler {
    /// Take the most recently scheduled check
    pub fn pop(&mut self) -> Option<ScheduledCheck> {
        self.scheduled.pop().map(|(_, check)| check)
    }
}

impl Scheduler for MockScheduler {
    fn after(&mut self, delay: Duration, check: ScheduledCheck) {
        self.scheduled.push((delay, check));
    }
}

/// All capabilities in one value, for driving the plugin
#[derive(Debug)]
pub struct MockHost {
    pub provider: MockRankProvider,
    pub assets: MockAssetLoader,
    pub scheduler: MockScheduler,
    pub hooked: Vec<HostEvent>,
    pub screen: ScreenSize,
    pub data_folder: PathBuf,
}

impl MockHost {
    pub fn new(provider: MockRankProvider, data_folder: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            assets: MockAssetLoader::default(),
            scheduler: MockScheduler::default(),
            hooked: Vec::new(),
            screen: ScreenSize::default(),
            data_folder: data_folder.into(),
        }
    }
}

impl RankProvider for MockHost {
    fn local_player(&self) -> PlayerId {
        self.provider.local_player()
    }

    fn rank(&self, player: &PlayerId, playlist: i32) -> SkillRank {
        self.provider.rank(player, playlist)
    }

    fn mmr(&self, player: &PlayerId, playlist: i32) -> f32 {
        self.provider.mmr(player, playlist)
    }

    fn is_synced(&self, player: &PlayerId, playlist: i32) -> bool {
        self.provider.is_synced(player, playlist)
    }

    fn is_syncing(&self, player: &PlayerId) -> bool {
        self.provider.is_syncing(player)
    }

    fn current_playlist(&self) -> i32 {
        self.provider.current_playlist()
    }

    fn is_ranked_playlist(&self, playlist: i32) -> bool {
        self.provider.is_ranked_playlist(playlist)
    }

    fn in_online_match(&self) -> bool {
        self.provider.in_online_match()
    }

    fn in_replay(&self) -> bool {
        self.provider.in_replay()
    }
}

impl AssetLoader for MockHost {
    fn load_image(&mut self, path: &Path) -> Option<ImageHandle> {
        self.assets.load_image(path)
    }

    fn release_image(&mut self, handle: ImageHandle) {
        self.assets.release_image(handle)
    }
}

impl Scheduler for MockHost {
    fn after(&mut self, delay: Duration, check: ScheduledCheck) {
        self.scheduler.after(delay, check)
    }
}

impl EventHooks for MockHost {
    fn hook_event(&mut self, event: HostEvent) {
        self.hooked.push(event);
    }

    fn unhook_event(&mut self, event: HostEvent) {
        self.hooked.retain(|e| *e != event);
    }
}

impl Host for MockHost {
    fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    fn data_folder(&self) -> PathBuf {
        self.data_folder.clone()
    }
}
