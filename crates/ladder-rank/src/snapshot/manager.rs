use std::time::Duration;

use strum::{Display, IntoStaticStr};
use tracing::{debug, error, info, warn};

use super::RankSnapshot;
use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::host::{PlayerId, RankProvider};
use crate::icons::IconRequest;
use crate::rank::{Playlist, RankPosition, resolve};
use crate::threshold::ThresholdSource;

/// Refresh timing defaults
pub mod timing {
    use std::time::Duration;

    /// Settle time after the plugin loads
    pub const STARTUP_DELAY: Duration = Duration::from_secs(2);
    /// Interval between sync checks while the startup load waits
    pub const STARTUP_RETRY_DELAY: Duration = Duration::from_secs(1);
    /// Retry cap for the startup load
    pub const STARTUP_MAX_RETRIES: u32 = 20;

    /// Delay between a match result and the first sync check
    pub const MATCH_END_DELAY: Duration = Duration::from_secs(3);
    /// Back-off plus the check delay applied to every retry
    pub const MATCH_END_RETRY_DELAY: Duration = Duration::from_millis(3500);
    pub const MATCH_END_MAX_RETRIES: u32 = 5;

    pub const PLAYLIST_CHANGE_DELAY: Duration = Duration::from_millis(100);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub initial_delay: Duration,
    pub retry_delay: Duration,
    pub max_retries: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicies {
    pub startup: RefreshPolicy,
    pub playlist_changed: RefreshPolicy,
    pub match_ended: RefreshPolicy,
    pub manual: RefreshPolicy,
}

impl Default for RefreshPolicies {
    fn default() -> Self {
        let startup = RefreshPolicy {
            initial_delay: timing::STARTUP_DELAY,
            retry_delay: timing::STARTUP_RETRY_DELAY,
            max_retries: timing::STARTUP_MAX_RETRIES,
        };
        Self {
            startup,
            playlist_changed: RefreshPolicy {
                initial_delay: timing::PLAYLIST_CHANGE_DELAY,
                ..startup
            },
            match_ended: RefreshPolicy {
                initial_delay: timing::MATCH_END_DELAY,
                retry_delay: timing::MATCH_END_RETRY_DELAY,
                max_retries: timing::MATCH_END_MAX_RETRIES,
            },
            manual: RefreshPolicy {
                initial_delay: Duration::ZERO,
                retry_delay: timing::STARTUP_RETRY_DELAY,
                max_retries: timing::MATCH_END_MAX_RETRIES,
            },
        }
    }
}

impl RefreshPolicies {
    pub fn get(&self, trigger: Trigger) -> RefreshPolicy {
        match trigger {
            Trigger::Startup => self.startup,
            Trigger::PlaylistChanged => self.playlist_changed,
            Trigger::MatchEnded => self.match_ended,
            Trigger::Manual => self.manual,
        }
    }
}

/// What started a refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum Trigger {
    /// Plugin loaded; shows the configured playlist
    Startup,
    /// Playlist picked in the settings panel
    PlaylistChanged,
    /// A match result is in; shows the playlist just played
    MatchEnded,
    Manual,
}

/// Callback the host must deliver to [`SnapshotManager::check`] after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledCheck {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Checking { trigger: Trigger, retries_left: u32 },
    Ready,
    GaveUp,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    NotInOnlineMatch,
    UnrankedPlaylist(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Scheduled(ScheduledCheck),
    /// A cycle for the same trigger is already running
    Coalesced,
    Skipped(SkipReason),
}

#[derive(Debug)]
pub enum CheckOutcome {
    /// Superseded by a newer cycle; nothing changed
    Stale,
    Retry(ScheduledCheck),
    GaveUp,
    Skipped(SkipReason),
    /// Static data error; the previous snapshot is kept
    Failed(Error),
    Refreshed { icon_requests: [IconRequest; 3] },
}

#[derive(Debug, Clone, Copy)]
struct Chain {
    trigger: Trigger,
    playlist: i32,
    retries_left: u32,
    policy: RefreshPolicy,
}

/// Owns the published snapshot and drives refresh cycles.
///
/// Single-threaded: the host calls [`trigger`](Self::trigger) on events and
/// [`check`](Self::check) from its timer, one step at a time. Each trigger
/// starts a new generation; checks carrying an older generation are no-ops.
#[derive(Debug, Default)]
pub struct SnapshotManager {
    policies: RefreshPolicies,
    state: RefreshState,
    generation: u64,
    chain: Option<Chain>,
    snapshot: RankSnapshot,
}

impl SnapshotManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policies(policies: RefreshPolicies) -> Self {
        Self {
            policies,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> &RankSnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn policies(&self) -> &RefreshPolicies {
        &self.policies
    }

    /// Start a refresh cycle, superseding any running cycle unless it is for
    /// the same trigger and playlist.
    pub fn trigger<P>(&mut self, trigger: Trigger, config: &Configuration, provider: &P) -> TriggerOutcome
    where
        P: RankProvider + ?Sized,
    {
        let playlist = match trigger {
            Trigger::MatchEnded => {
                if !config.enabled {
                    return TriggerOutcome::Skipped(SkipReason::Disabled);
                }
                if !provider.in_online_match() || provider.in_replay() {
                    return TriggerOutcome::Skipped(SkipReason::NotInOnlineMatch);
                }
                let playlist = provider.current_playlist();
                if !provider.is_ranked_playlist(playlist) {
                    debug!("Match ended in unranked playlist {}", playlist);
                    return TriggerOutcome::Skipped(SkipReason::UnrankedPlaylist(playlist));
                }
                playlist
            }
            Trigger::Startup | Trigger::PlaylistChanged | Trigger::Manual => config.playlist,
        };

        if let Some(chain) = &self.chain {
            if chain.trigger == trigger && chain.playlist == playlist {
                debug!("{} refresh already in progress for playlist {}", trigger, playlist);
                return TriggerOutcome::Coalesced;
            }
        }

        let policy = self.policies.get(trigger);
        self.generation += 1;
        self.chain = Some(Chain {
            trigger,
            playlist,
            retries_left: policy.max_retries,
            policy,
        });
        self.state = RefreshState::Checking {
            trigger,
            retries_left: policy.max_retries,
        };

        debug!(
            "{} refresh scheduled for playlist {} (generation {})",
            trigger, playlist, self.generation
        );
        TriggerOutcome::Scheduled(ScheduledCheck {
            generation: self.generation,
            delay: policy.initial_delay,
        })
    }

    /// Drop any running cycle; its pending checks become stale
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.chain = None;
        self.state = RefreshState::Idle;
    }

    /// Run one step of the cycle identified by `check`
    pub fn check<P, T>(&mut self, check: ScheduledCheck, provider: &P, thresholds: &T) -> CheckOutcome
    where
        P: RankProvider + ?Sized,
        T: ThresholdSource + ?Sized,
    {
        let Some(mut chain) = self.chain else {
            return CheckOutcome::Stale;
        };
        if check.generation != self.generation {
            debug!(
                "Ignoring stale check (generation {}, current {})",
                check.generation, self.generation
            );
            return CheckOutcome::Stale;
        }

        if chain.trigger == Trigger::MatchEnded
            && (!provider.in_online_match() || provider.in_replay())
        {
            debug!("Left the online match, dropping refresh");
            self.finish(RefreshState::Idle);
            return CheckOutcome::Skipped(SkipReason::NotInOnlineMatch);
        }

        let player = provider.local_player();
        let status = provider.sync_status(&player, chain.playlist);
        debug!("Playlist {} sync status: {}", chain.playlist, status);

        if !status.is_ready() {
            if chain.retries_left == 0 {
                warn!(
                    "MMR data for playlist {} never synced, keeping last snapshot",
                    chain.playlist
                );
                self.finish(RefreshState::GaveUp);
                return CheckOutcome::GaveUp;
            }

            chain.retries_left -= 1;
            self.chain = Some(chain);
            self.state = RefreshState::Checking {
                trigger: chain.trigger,
                retries_left: chain.retries_left,
            };
            info!(
                "MMR data not synced yet, will retry in {:.1}s ({} retries left)",
                chain.policy.retry_delay.as_secs_f32(),
                chain.retries_left
            );
            return CheckOutcome::Retry(ScheduledCheck {
                generation: self.generation,
                delay: chain.policy.retry_delay,
            });
        }

        let Some(playlist) = Playlist::from_id(chain.playlist) else {
            info!("Not a ranked playlist: {}", chain.playlist);
            self.finish(RefreshState::Idle);
            return CheckOutcome::Skipped(SkipReason::UnrankedPlaylist(chain.playlist));
        };

        match build_snapshot(provider, thresholds, &player, playlist) {
            Ok(snapshot) => {
                info!(
                    "Loaded playlist {} rank data: tier={}, div={}, mmr={}",
                    playlist.id(),
                    snapshot.position.tier(),
                    snapshot.position.division(),
                    snapshot.mmr
                );
                let icon_requests = IconRequest::for_tier(snapshot.position.tier());
                self.snapshot = snapshot;
                self.finish(RefreshState::Ready);
                CheckOutcome::Refreshed { icon_requests }
            }
            Err(e) => {
                error!("Rank refresh failed, keeping last snapshot: {}", e);
                self.finish(RefreshState::Failed);
                CheckOutcome::Failed(e)
            }
        }
    }

    fn finish(&mut self, state: RefreshState) {
        self.chain = None;
        self.state = state;
    }
}

/// Read the player's rank from the host and resolve its neighbors.
///
/// Nothing is published here; the caller swaps the result in.
pub fn build_snapshot<P, T>(
    provider: &P,
    thresholds: &T,
    player: &PlayerId,
    playlist: Playlist,
) -> Result<RankSnapshot>
where
    P: RankProvider + ?Sized,
    T: ThresholdSource + ?Sized,
{
    let mmr = provider.mmr(player, playlist.id());
    let raw = provider.rank(player, playlist.id());
    let position = RankPosition::from_raw(raw.tier, raw.division)?;
    let adjacent = resolve(thresholds, playlist, position)?;

    Ok(RankSnapshot::new(playlist, position, mmr, adjacent))
}
