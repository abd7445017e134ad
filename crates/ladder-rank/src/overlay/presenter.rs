use super::{Color, DrawCommand, ScreenSize, Vec2};
use crate::config::Configuration;
use crate::icons::{IconSlotKind, IconSlots};
use crate::snapshot::RankSnapshot;

const LEFT_TEXT_SCALE: f32 = 2.0;
const ENTRY_TEXT_SCALE: f32 = 1.5;
/// Height of the current-rank icon in the left block, at reference resolution
const LEFT_ICON_SIZE: f32 = 40.0;

/// Scaled geometry for one frame
struct Frame {
    sx: f32,
    sy: f32,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl Frame {
    fn new(config: &Configuration, screen: ScreenSize) -> Self {
        let sx = screen.scale_x();
        let sy = screen.scale_y();
        let width = config.rect_width * sx;
        let height = config.rect_height * sy;

        let left = (screen.width as f32 - width) / 2.0 + config.offset_x * sx;
        let top = (screen.height as f32 - height) / 2.0 + config.offset_y * sy;

        Self {
            sx,
            sy,
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

/// One MMR/icon row in the right block
struct Entry {
    slot: IconSlotKind,
    text_y: f32,
    icon_y: f32,
    mmr: i32,
}

/// Build this frame's draw list.
///
/// The background box comes first; each block is skipped when its toggle
/// is off.
pub fn present(
    snapshot: &RankSnapshot,
    icons: &IconSlots,
    config: &Configuration,
    screen: ScreenSize,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    if !config.show_display {
        return commands;
    }

    let frame = Frame::new(config, screen);
    commands.push(DrawCommand::FillRect {
        position: Vec2::pixel(frame.left, frame.top),
        size: Vec2::pixel(frame.right - frame.left, frame.bottom - frame.top),
        color: Color::black(config.opacity),
    });

    if config.show_current_left {
        present_left(&mut commands, &frame, snapshot, icons, config);
    }
    present_right(&mut commands, &frame, snapshot, icons, config);

    commands
}

fn present_left(
    commands: &mut Vec<DrawCommand>,
    frame: &Frame,
    snapshot: &RankSnapshot,
    icons: &IconSlots,
    config: &Configuration,
) {
    let text_x = frame.left + config.left_margin * frame.sx;
    let rank_y = frame.center_y() - 30.0 * frame.sy;

    commands.push(text(text_x, rank_y, "Rank :", LEFT_TEXT_SCALE));

    let icon_x = text_x + 100.0 * frame.sx;
    let icon_size = LEFT_ICON_SIZE * frame.sy;
    push_icon(commands, icons, IconSlotKind::Current, icon_x, rank_y - 5.0, icon_size);

    let name = snapshot.name_current.trim();
    if !name.is_empty() {
        let name_x = icon_x + icon_size + 10.0 * frame.sx;
        commands.push(text(name_x, rank_y, name, LEFT_TEXT_SCALE));
    }

    let mmr_y = frame.center_y() + 10.0 * frame.sy;
    let mmr = format!("MMR : {}", snapshot.display_mmr());
    commands.push(text(text_x, mmr_y, &mmr, LEFT_TEXT_SCALE));
}

fn present_right(
    commands: &mut Vec<DrawCommand>,
    frame: &Frame,
    snapshot: &RankSnapshot,
    icons: &IconSlots,
    config: &Configuration,
) {
    let icon_x = frame.right - config.right_icon_offset * frame.sx;
    let text_x = icon_x - config.text_offset * frame.sx;
    let center_y = frame.center_y();
    let icon_size = config.icon_size * frame.sy;

    let entries = [
        (
            config.show_next,
            Entry {
                slot: IconSlotKind::Next,
                text_y: center_y - config.top_spacing * frame.sy,
                icon_y: center_y - (config.top_spacing - 20.0) * frame.sy,
                mmr: snapshot.next_tier_min_mmr,
            },
        ),
        (
            config.show_current_right,
            Entry {
                slot: IconSlotKind::Current,
                text_y: center_y - config.middle_spacing * frame.sy,
                icon_y: center_y - 10.0 * frame.sy,
                mmr: snapshot.display_mmr(),
            },
        ),
        (
            config.show_previous,
            Entry {
                slot: IconSlotKind::Previous,
                text_y: center_y + 40.0 * frame.sy,
                icon_y: center_y + config.bottom_spacing * frame.sy,
                mmr: snapshot.prev_tier_max_mmr,
            },
        ),
    ];

    for (_, entry) in entries.iter().filter(|(shown, _)| *shown) {
        commands.push(text(text_x, entry.text_y, "MMR :", ENTRY_TEXT_SCALE));
        commands.push(text(
            text_x + 80.0 * frame.sx,
            entry.text_y,
            &entry.mmr.to_string(),
            ENTRY_TEXT_SCALE,
        ));
        commands.push(text(
            text_x,
            entry.text_y + 30.0 * frame.sy,
            "Rank :",
            ENTRY_TEXT_SCALE,
        ));
        push_icon(commands, icons, entry.slot, icon_x, entry.icon_y, icon_size);
    }
}

fn text(x: f32, y: f32, text: &str, scale: f32) -> DrawCommand {
    DrawCommand::Text {
        position: Vec2::pixel(x, y),
        text: text.to_string(),
        scale,
        color: Color::WHITE,
    }
}

/// Push the slot's image scaled to `size` pixels tall, if it is loaded
fn push_icon(
    commands: &mut Vec<DrawCommand>,
    icons: &IconSlots,
    slot: IconSlotKind,
    x: f32,
    y: f32,
    size: f32,
) {
    let Some(image) = icons.get(slot).image() else {
        return;
    };
    if image.height() == 0 {
        return;
    }

    commands.push(DrawCommand::Image {
        position: Vec2::pixel(x, y),
        slot,
        image,
        scale: size / image.height() as f32,
    });
}
