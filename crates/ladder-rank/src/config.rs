//! Overlay configuration.
//!
//! A plain value passed by reference to the presenter and the snapshot
//! manager. Numeric settings are addressed through [`Setting`], which knows
//! each value's valid range; toggles through [`Toggle`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::rank::Playlist;

/// Numeric settings and their valid ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Setting {
    Playlist,
    OffsetX,
    OffsetY,
    RectWidth,
    RectHeight,
    LeftMargin,
    IconSize,
    RightIconOffset,
    TextOffset,
    TopSpacing,
    MiddleSpacing,
    BottomSpacing,
    Opacity,
}

impl Setting {
    pub fn key(&self) -> &'static str {
        self.into()
    }

    pub fn range(&self) -> (f32, f32) {
        match self {
            Self::Playlist => (10.0, 34.0),
            Self::OffsetX | Self::OffsetY => (-1000.0, 1000.0),
            Self::RectWidth => (50.0, 800.0),
            Self::RectHeight => (150.0, 1000.0),
            Self::LeftMargin => (0.0, 200.0),
            Self::IconSize => (30.0, 150.0),
            Self::RightIconOffset => (50.0, 200.0),
            Self::TextOffset => (50.0, 300.0),
            Self::TopSpacing => (50.0, 200.0),
            Self::MiddleSpacing => (0.0, 100.0),
            Self::BottomSpacing => (30.0, 150.0),
            Self::Opacity => (0.0, 255.0),
        }
    }

    pub fn default_value(&self) -> f32 {
        Configuration::default().get(*self)
    }

    pub fn clamp(&self, value: f32) -> f32 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }

    pub fn is_layout(&self) -> bool {
        *self != Self::Playlist
    }
}

/// On/off settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Toggle {
    /// Refresh after matches
    Enabled,
    ShowDisplay,
    ShowNext,
    ShowPrevious,
    ShowCurrentRight,
    ShowCurrentLeft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub enabled: bool,
    pub show_display: bool,
    pub show_next: bool,
    pub show_previous: bool,
    pub show_current_right: bool,
    pub show_current_left: bool,
    pub playlist: i32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub rect_width: f32,
    pub rect_height: f32,
    pub left_margin: f32,
    pub icon_size: f32,
    pub right_icon_offset: f32,
    pub text_offset: f32,
    pub top_spacing: f32,
    pub middle_spacing: f32,
    pub bottom_spacing: f32,
    pub opacity: f32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            enabled: true,
            show_display: true,
            show_next: true,
            show_previous: true,
            show_current_right: true,
            show_current_left: true,
            playlist: Playlist::Doubles.id(),
            offset_x: 700.0,
            offset_y: -400.0,
            rect_width: 470.0,
            rect_height: 250.0,
            left_margin: 30.0,
            icon_size: 60.0,
            right_icon_offset: 80.0,
            text_offset: 150.0,
            top_spacing: 120.0,
            middle_spacing: 30.0,
            bottom_spacing: 60.0,
            opacity: 255.0,
        }
    }
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn get(&self, setting: Setting) -> f32 {
        match setting {
            Setting::Playlist => self.playlist as f32,
            Setting::OffsetX => self.offset_x,
            Setting::OffsetY => self.offset_y,
            Setting::RectWidth => self.rect_width,
            Setting::RectHeight => self.rect_height,
            Setting::LeftMargin => self.left_margin,
            Setting::IconSize => self.icon_size,
            Setting::RightIconOffset => self.right_icon_offset,
            Setting::TextOffset => self.text_offset,
            Setting::TopSpacing => self.top_spacing,
            Setting::MiddleSpacing => self.middle_spacing,
            Setting::BottomSpacing => self.bottom_spacing,
            Setting::Opacity => self.opacity,
        }
    }

    /// Set a value, clamped into the setting's range
    pub fn set(&mut self, setting: Setting, value: f32) {
        let value = if value.is_nan() {
            setting.default_value()
        } else {
            setting.clamp(value)
        };

        match setting {
            Setting::Playlist => self.playlist = value.round() as i32,
            Setting::OffsetX => self.offset_x = value,
            Setting::OffsetY => self.offset_y = value,
            Setting::RectWidth => self.rect_width = value,
            Setting::RectHeight => self.rect_height = value,
            Setting::LeftMargin => self.left_margin = value,
            Setting::IconSize => self.icon_size = value,
            Setting::RightIconOffset => self.right_icon_offset = value,
            Setting::TextOffset => self.text_offset = value,
            Setting::TopSpacing => self.top_spacing = value,
            Setting::MiddleSpacing => self.middle_spacing = value,
            Setting::BottomSpacing => self.bottom_spacing = value,
            Setting::Opacity => self.opacity = value,
        }
    }

    pub fn toggle(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Enabled => self.enabled,
            Toggle::ShowDisplay => self.show_display,
            Toggle::ShowNext => self.show_next,
            Toggle::ShowPrevious => self.show_previous,
            Toggle::ShowCurrentRight => self.show_current_right,
            Toggle::ShowCurrentLeft => self.show_current_left,
        }
    }

    pub fn set_toggle(&mut self, toggle: Toggle, on: bool) {
        let field = match toggle {
            Toggle::Enabled => &mut self.enabled,
            Toggle::ShowDisplay => &mut self.show_display,
            Toggle::ShowNext => &mut self.show_next,
            Toggle::ShowPrevious => &mut self.show_previous,
            Toggle::ShowCurrentRight => &mut self.show_current_right,
            Toggle::ShowCurrentLeft => &mut self.show_current_left,
        };
        *field = on;
    }

    /// The configured playlist, if it is a ranked one
    pub fn ranked_playlist(&self) -> Option<Playlist> {
        Playlist::from_id(self.playlist)
    }

    /// Restore layout values; toggles and playlist are kept
    pub fn reset_layout(&mut self) {
        let defaults = Self::default();
        for setting in Setting::iter().filter(Setting::is_layout) {
            self.set(setting, defaults.get(setting));
        }
    }

    /// Pull every value back into its range
    pub fn clamp_all(&mut self) {
        for setting in Setting::iter() {
            self.set(setting, self.get(setting));
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config: Configuration = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.clamp_all();
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the file, falling back to defaults if it is missing or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) if e.is_not_found() => {
                debug!("No configuration at {}, using defaults", path.as_ref().display());
                Self::default()
            }
            Err(e) => {
                warn!("Failed to load configuration: {}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved configuration to {}", path.as_ref().display());
        Ok(())
    }
}

/// Builder for Configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    config: Option<Configuration>,
}

impl ConfigurationBuilder {
    fn config(&mut self) -> &mut Configuration {
        self.config.get_or_insert_with(Configuration::default)
    }

    pub fn playlist(mut self, playlist: Playlist) -> Self {
        self.config().playlist = playlist.id();
        self
    }

    pub fn setting(mut self, setting: Setting, value: f32) -> Self {
        self.config().set(setting, value);
        self
    }

    pub fn toggle(mut self, toggle: Toggle, on: bool) -> Self {
        self.config().set_toggle(toggle, on);
        self
    }

    pub fn build(self) -> Configuration {
        self.config.unwrap_or_default()
    }
}
