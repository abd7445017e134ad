//! Host-facing plugin.
//!
//! [`LadderRank`] owns the configuration, the snapshot manager and the icon
//! slots, and implements the capabilities the host drives:
//! [`Lifecycle`], [`Renderable`] and [`ConfigurablePanel`]. Timer callbacks
//! scheduled through [`Scheduler`](crate::host::Scheduler) come back through
//! [`LadderRank::on_timer`].

mod panel;

pub use panel::*;

use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::config::Configuration;
use crate::data::DataLayout;
use crate::host::{Host, HostEvent};
use crate::icons::IconSlots;
use crate::overlay::{Canvas, DrawCommand, present};
use crate::snapshot::{
    CheckOutcome, RankSnapshot, RefreshPolicies, RefreshState, ScheduledCheck, SnapshotManager,
    Trigger, TriggerOutcome,
};
use crate::threshold::{ThresholdFiles, ThresholdSource};

pub trait Lifecycle {
    fn on_load(&mut self);

    /// Unhook every event and release every drawable
    fn on_unload(&mut self);
}

pub trait Renderable {
    /// This frame's draw commands
    fn draw_list(&self) -> Vec<DrawCommand>;

    fn render(&self, canvas: &mut dyn Canvas) {
        for command in self.draw_list() {
            command.draw_on(canvas);
        }
    }
}

pub trait ConfigurablePanel {
    fn controls(&self) -> Vec<PanelControl>;

    fn apply(&mut self, action: PanelAction);
}

pub struct LadderRank<H: Host, T: ThresholdSource = ThresholdFiles> {
    host: H,
    thresholds: T,
    layout: DataLayout,
    config: Configuration,
    manager: SnapshotManager,
    icons: IconSlots,
    visible: bool,
}

impl<H: Host> LadderRank<H> {
    /// Plugin reading thresholds from the host's data folder
    pub fn new(host: H, config: Configuration) -> Self {
        let layout = DataLayout::new(host.data_folder());
        let thresholds = ThresholdFiles::from_layout(&layout);
        Self::with_thresholds(host, config, thresholds)
    }
}

impl<H: Host, T: ThresholdSource> LadderRank<H, T> {
    pub fn with_thresholds(host: H, config: Configuration, thresholds: T) -> Self {
        let layout = DataLayout::new(host.data_folder());
        Self {
            host,
            thresholds,
            layout,
            config,
            manager: SnapshotManager::new(),
            icons: IconSlots::default(),
            visible: true,
        }
    }

    pub fn with_policies(mut self, policies: RefreshPolicies) -> Self {
        self.manager = SnapshotManager::with_policies(policies);
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn snapshot(&self) -> &RankSnapshot {
        self.manager.snapshot()
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.manager.state()
    }

    pub fn icons(&self) -> &IconSlots {
        &self.icons
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Start a refresh cycle and hand its first check to the host
    pub fn refresh(&mut self, trigger: Trigger) -> TriggerOutcome {
        let outcome = self.manager.trigger(trigger, &self.config, &self.host);
        if let TriggerOutcome::Scheduled(check) = outcome {
            self.host.after(check.delay, check);
        }
        outcome
    }

    pub fn on_event(&mut self, event: HostEvent) {
        debug!("Event: {}", event.hook_name());
        match event {
            HostEvent::MatchWinnerSet => {
                self.refresh(Trigger::MatchEnded);
            }
            HostEvent::MatchDestroyed => {
                self.visible = false;
            }
        }
    }

    /// Timer callback for a check scheduled through the host
    pub fn on_timer(&mut self, check: ScheduledCheck) -> CheckOutcome {
        let outcome = self.manager.check(check, &self.host, &self.thresholds);
        match &outcome {
            CheckOutcome::Retry(next) => self.host.after(next.delay, *next),
            CheckOutcome::Refreshed { icon_requests } => {
                for request in icon_requests {
                    self.icons.apply(*request, &self.layout, &mut self.host);
                }
                self.visible = true;
            }
            _ => {}
        }
        outcome
    }
}

impl<H: Host, T: ThresholdSource> Lifecycle for LadderRank<H, T> {
    fn on_load(&mut self) {
        let screen = self.host.screen_size();
        info!("Plugin loaded, screen size: {}x{}", screen.width, screen.height);

        for event in HostEvent::iter() {
            self.host.hook_event(event);
        }
        self.icons.reset(&self.layout, &mut self.host);
        self.visible = true;
        self.refresh(Trigger::Startup);

        info!("Plugin initialization complete");
    }

    fn on_unload(&mut self) {
        for event in HostEvent::iter() {
            self.host.unhook_event(event);
        }
        self.icons.release_all(&mut self.host);
        self.manager.cancel();
        info!("Plugin unloaded");
    }
}

impl<H: Host, T: ThresholdSource> Renderable for LadderRank<H, T> {
    fn draw_list(&self) -> Vec<DrawCommand> {
        if !self.visible {
            return Vec::new();
        }
        present(
            self.manager.snapshot(),
            &self.icons,
            &self.config,
            self.host.screen_size(),
        )
    }
}

impl<H: Host, T: ThresholdSource> ConfigurablePanel for LadderRank<H, T> {
    fn controls(&self) -> Vec<PanelControl> {
        panel::controls(&self.config)
    }

    fn apply(&mut self, action: PanelAction) {
        if panel::apply(&mut self.config, action) {
            // A pending cycle still targets the old playlist
            self.manager.cancel();
            self.refresh(Trigger::PlaylistChanged);
        }
    }
}
