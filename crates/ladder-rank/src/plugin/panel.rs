//! Settings panel described as data.
//!
//! The host renders [`PanelControl`]s with its own widget toolkit and feeds
//! user input back as [`PanelAction`]s.

use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::config::{Configuration, Setting, Toggle};
use crate::rank::Playlist;

pub const PANEL_TITLE: &str = "Ladder Rank Viewer";
pub const RESET_LABEL: &str = "Reset to Default";
const PLAYLIST_TOOLTIP: &str = "Choose which playlist rank to display";

/// Toggles shown as checkboxes, in panel order
const CHECKBOXES: [Toggle; 5] = [
    Toggle::ShowDisplay,
    Toggle::ShowNext,
    Toggle::ShowPrevious,
    Toggle::ShowCurrentRight,
    Toggle::ShowCurrentLeft,
];

const SECTIONS: [(&str, &[Setting]); 6] = [
    ("Global Position", &[Setting::OffsetX, Setting::OffsetY]),
    ("Rectangle Settings", &[Setting::RectWidth, Setting::RectHeight]),
    ("Left Side Settings", &[Setting::LeftMargin]),
    (
        "Right Side Settings",
        &[Setting::IconSize, Setting::RightIconOffset, Setting::TextOffset],
    ),
    (
        "Vertical Spacing",
        &[Setting::TopSpacing, Setting::MiddleSpacing, Setting::BottomSpacing],
    ),
    ("Customization", &[Setting::Opacity]),
];

#[derive(Debug, Clone, PartialEq)]
pub enum PanelControl {
    Header(&'static str),
    Checkbox {
        toggle: Toggle,
        label: &'static str,
        checked: bool,
    },
    PlaylistCombo {
        options: Vec<&'static str>,
        selected: usize,
        tooltip: &'static str,
    },
    Slider {
        setting: Setting,
        label: &'static str,
        min: f32,
        max: f32,
        value: f32,
        tooltip: &'static str,
    },
    Separator,
    ResetButton,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    SetToggle(Toggle, bool),
    SetValue(Setting, f32),
    /// Index into the playlist combo's options
    SelectPlaylist(usize),
    ResetDefaults,
}

fn checkbox_label(toggle: Toggle) -> &'static str {
    match toggle {
        Toggle::Enabled => "Refresh After Matches",
        Toggle::ShowDisplay => "Enable Display",
        Toggle::ShowNext => "Show Next Rank",
        Toggle::ShowPrevious => "Show Previous Rank",
        Toggle::ShowCurrentRight => "Show Current Rank (Right)",
        Toggle::ShowCurrentLeft => "Show Current Rank (Left)",
    }
}

/// Label and tooltip of a setting's slider
fn slider_text(setting: Setting) -> (&'static str, &'static str) {
    match setting {
        Setting::Playlist => ("Playlist", PLAYLIST_TOOLTIP),
        Setting::OffsetX => ("Horizontal Offset", "Move entire canvas left/right"),
        Setting::OffsetY => ("Vertical Offset", "Move entire canvas up/down"),
        Setting::RectWidth => ("Rectangle Width", "Width of the main rectangle"),
        Setting::RectHeight => ("Rectangle Height", "Height of the main rectangle"),
        Setting::LeftMargin => ("Left Margin", "Distance from left edge to text"),
        Setting::IconSize => ("Icon Size", "Size of rank icons on the right"),
        Setting::RightIconOffset => ("Icon Offset From Right", "Distance of icons from right edge"),
        Setting::TextOffset => ("Text Offset", "Distance of text from icons"),
        Setting::TopSpacing => ("Top Rank Spacing", "Vertical position of top rank"),
        Setting::MiddleSpacing => ("Middle Rank Spacing", "Vertical position of middle rank"),
        Setting::BottomSpacing => ("Bottom Rank Spacing", "Vertical position of bottom rank"),
        Setting::Opacity => (
            "Opacity",
            "Background opacity (0 = transparent, 255 = opaque)",
        ),
    }
}

/// Combo index of the configured playlist; unknown ids select 2v2
pub fn playlist_index(playlist: i32) -> usize {
    let fallback = Playlist::iter()
        .position(|p| p == Playlist::Doubles)
        .unwrap_or_default();
    Playlist::iter()
        .position(|p| p.id() == playlist)
        .unwrap_or(fallback)
}

/// Controls for the current configuration, in display order
pub fn controls(config: &Configuration) -> Vec<PanelControl> {
    let mut controls = vec![PanelControl::Header(PANEL_TITLE)];

    controls.extend(CHECKBOXES.iter().map(|&toggle| PanelControl::Checkbox {
        toggle,
        label: checkbox_label(toggle),
        checked: config.toggle(toggle),
    }));

    controls.push(PanelControl::Separator);
    controls.push(PanelControl::Header("Rank Selection"));
    controls.push(PanelControl::PlaylistCombo {
        options: Playlist::iter().map(|p| p.short_name()).collect(),
        selected: playlist_index(config.playlist),
        tooltip: PLAYLIST_TOOLTIP,
    });

    for (header, settings) in SECTIONS {
        controls.push(PanelControl::Separator);
        controls.push(PanelControl::Header(header));
        for &setting in settings {
            let (label, tooltip) = slider_text(setting);
            let (min, max) = setting.range();
            controls.push(PanelControl::Slider {
                setting,
                label,
                min,
                max,
                value: config.get(setting),
                tooltip,
            });
        }
    }

    controls.push(PanelControl::Separator);
    controls.push(PanelControl::ResetButton);
    controls
}

/// Apply one user action.
///
/// Returns `true` if the displayed playlist was changed and rank data must
/// be reloaded.
pub fn apply(config: &mut Configuration, action: PanelAction) -> bool {
    match action {
        PanelAction::SetToggle(toggle, on) => {
            config.set_toggle(toggle, on);
            false
        }
        PanelAction::SetValue(setting, value) => {
            let playlist = config.playlist;
            config.set(setting, value);
            setting == Setting::Playlist && config.playlist != playlist
        }
        PanelAction::SelectPlaylist(index) => match Playlist::iter().nth(index) {
            Some(playlist) => {
                debug!("Playlist selected: {} ({})", playlist.short_name(), playlist.id());
                config.playlist = playlist.id();
                true
            }
            None => {
                warn!("Ignoring playlist selection {}", index);
                false
            }
        },
        PanelAction::ResetDefaults => {
            config.reset_layout();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sliders(controls: &[PanelControl]) -> Vec<Setting> {
        controls
            .iter()
            .filter_map(|c| match c {
                PanelControl::Slider { setting, .. } => Some(*setting),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_layout_setting_has_a_slider() {
        let controls = controls(&Configuration::default());
        let sliders = sliders(&controls);
        let layout: Vec<Setting> = Setting::iter().filter(Setting::is_layout).collect();
        assert_eq!(sliders, layout);
        assert_eq!(controls.last(), Some(&PanelControl::ResetButton));
    }

    #[test]
    fn test_slider_carries_range_and_value() {
        let config = Configuration::builder().setting(Setting::IconSize, 90.0).build();
        let slider = controls(&config)
            .into_iter()
            .find(|c| matches!(c, PanelControl::Slider { setting: Setting::IconSize, .. }));
        assert_eq!(
            slider,
            Some(PanelControl::Slider {
                setting: Setting::IconSize,
                label: "Icon Size",
                min: 30.0,
                max: 150.0,
                value: 90.0,
                tooltip: "Size of rank icons on the right",
            })
        );
    }

    #[test]
    fn test_checkboxes_reflect_toggles() {
        let config = Configuration::builder().toggle(Toggle::ShowNext, false).build();
        let checkboxes: Vec<(Toggle, bool)> = controls(&config)
            .into_iter()
            .filter_map(|c| match c {
                PanelControl::Checkbox { toggle, checked, .. } => Some((toggle, checked)),
                _ => None,
            })
            .collect();
        assert_eq!(checkboxes.len(), 5);
        assert!(checkboxes.contains(&(Toggle::ShowNext, false)));
        assert!(checkboxes.contains(&(Toggle::ShowDisplay, true)));
    }

    #[test]
    fn test_playlist_combo() {
        assert_eq!(playlist_index(10), 0);
        assert_eq!(playlist_index(13), 2);
        assert_eq!(playlist_index(34), 7);
        assert_eq!(playlist_index(12), 1);

        let combo = controls(&Configuration::default())
            .into_iter()
            .find(|c| matches!(c, PanelControl::PlaylistCombo { .. }));
        let Some(PanelControl::PlaylistCombo { options, selected, .. }) = combo else {
            panic!("no playlist combo");
        };
        assert_eq!(options[0], "1v1");
        assert_eq!(options[selected], "2v2");
        assert_eq!(options.len(), 8);
    }

    #[test]
    fn test_select_playlist() {
        let mut config = Configuration::default();
        assert!(apply(&mut config, PanelAction::SelectPlaylist(2)));
        assert_eq!(config.playlist, 13);

        assert!(!apply(&mut config, PanelAction::SelectPlaylist(8)));
        assert_eq!(config.playlist, 13);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut config = Configuration::default();
        assert!(!apply(&mut config, PanelAction::SetValue(Setting::Opacity, 400.0)));
        assert_eq!(config.opacity, 255.0);
    }

    #[test]
    fn test_unchanged_playlist_value_skips_reload() {
        let mut config = Configuration::default();
        let current = config.playlist as f32;
        assert!(!apply(&mut config, PanelAction::SetValue(Setting::Playlist, current)));
        assert!(apply(&mut config, PanelAction::SetValue(Setting::Playlist, 13.0)));
        assert_eq!(config.playlist, 13);
        assert!(!apply(&mut config, PanelAction::SetValue(Setting::Playlist, 13.0)));
    }

    #[test]
    fn test_reset_keeps_toggles_and_playlist() {
        let mut config = Configuration::builder()
            .playlist(Playlist::Hoops)
            .toggle(Toggle::ShowPrevious, false)
            .setting(Setting::OffsetX, -20.0)
            .build();
        assert!(!apply(&mut config, PanelAction::ResetDefaults));
        assert_eq!(config.offset_x, 700.0);
        assert_eq!(config.playlist, 27);
        assert!(!config.show_previous);
    }
}
