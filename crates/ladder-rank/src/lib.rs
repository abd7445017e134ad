//! # ladder-rank
//!
//! Core library for the ladder rank overlay.
//!
//! This crate provides:
//! - Rank positions, playlists and division names
//! - Per-playlist MMR threshold tables and the adjacent-rank resolver
//! - Rank snapshots and the sync/retry refresh cycle that publishes them
//! - The overlay presenter (layout to draw list) and icon slots
//! - Host capability traits and the plugin that wires them together

pub mod config;
pub mod data;
pub mod error;
pub mod host;
pub mod icons;
pub mod overlay;
pub mod plugin;
pub mod rank;
pub mod snapshot;
pub mod threshold;

#[cfg(test)]
pub mod mock;

pub use config::{Configuration, ConfigurationBuilder, Setting, Toggle};
pub use data::DataLayout;
pub use error::{Error, Result};
pub use host::{
    AssetLoader, EventHooks, Host, HostEvent, ImageHandle, PlayerId, RankProvider, Scheduler,
    SkillRank, SyncStatus,
};
pub use icons::{IconRequest, IconSlot, IconSlotKind, IconSlots};
pub use overlay::{Canvas, Color, DrawCommand, ScreenSize, Vec2, present};
pub use plugin::{
    ConfigurablePanel, LadderRank, Lifecycle, PanelAction, PanelControl, Renderable,
};
pub use rank::{AdjacentRanks, Playlist, RankPosition, Regime, division_name, resolve};
pub use snapshot::{
    CheckOutcome, RankSnapshot, RefreshPolicies, RefreshPolicy, RefreshState, ScheduledCheck,
    SkipReason, SnapshotManager, Trigger, TriggerOutcome, build_snapshot,
};
pub use threshold::{Bound, TableIssue, ThresholdFiles, ThresholdRow, ThresholdSource, ThresholdTable};
