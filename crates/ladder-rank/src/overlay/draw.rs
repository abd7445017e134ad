use serde::Serialize;

use crate::host::ImageHandle;
use crate::icons::IconSlotKind;

/// Resolution all configured offsets are authored at
pub const REFERENCE_WIDTH: f32 = 1920.0;
pub const REFERENCE_HEIGHT: f32 = 1080.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn scale_x(&self) -> f32 {
        self.width as f32 / REFERENCE_WIDTH
    }

    pub fn scale_y(&self) -> f32 {
        self.height as f32 / REFERENCE_HEIGHT
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(REFERENCE_WIDTH as u32, REFERENCE_HEIGHT as u32)
    }
}

/// Canvas positions are whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn pixel(x: f32, y: f32) -> Self {
        Self {
            x: x.trunc(),
            y: y.trunc(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Black with `opacity` in 0..=255
    pub fn black(opacity: f32) -> Self {
        Self::rgba(0, 0, 0, opacity.clamp(0.0, 255.0) as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        position: Vec2,
        size: Vec2,
        color: Color,
    },
    Text {
        position: Vec2,
        text: String,
        scale: f32,
        color: Color,
    },
    Image {
        position: Vec2,
        slot: IconSlotKind,
        image: ImageHandle,
        scale: f32,
    },
}

/// Drawing surface handed to the plugin once per frame
pub trait Canvas {
    fn fill_rect(&mut self, position: Vec2, size: Vec2, color: Color);

    fn draw_text(&mut self, position: Vec2, text: &str, scale: f32, color: Color);

    fn draw_image(&mut self, position: Vec2, image: ImageHandle, scale: f32);
}

impl DrawCommand {
    pub fn draw_on<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match self {
            DrawCommand::FillRect {
                position,
                size,
                color,
            } => canvas.fill_rect(*position, *size, *color),
            DrawCommand::Text {
                position,
                text,
                scale,
                color,
            } => canvas.draw_text(*position, text, *scale, *color),
            DrawCommand::Image {
                position,
                image,
                scale,
                ..
            } => canvas.draw_image(*position, *image, *scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factors() {
        let screen = ScreenSize::new(2560, 1440);
        assert!((screen.scale_x() - 4.0 / 3.0).abs() < 1e-6);
        assert!((screen.scale_y() - 4.0 / 3.0).abs() < 1e-6);

        let ultrawide = ScreenSize::new(3440, 1440);
        assert!(ultrawide.scale_x() > ultrawide.scale_y());
    }

    #[test]
    fn test_pixel_truncates() {
        assert_eq!(Vec2::pixel(10.9, -3.5), Vec2 { x: 10.0, y: -3.0 });
    }

    #[test]
    fn test_black_opacity() {
        assert_eq!(Color::black(128.4).a, 128);
        assert_eq!(Color::black(400.0).a, 255);
    }

    #[test]
    fn test_serialized_kind_tag() {
        let command = DrawCommand::Text {
            position: Vec2::pixel(1.0, 2.0),
            text: "MMR :".to_string(),
            scale: 1.5,
            color: Color::WHITE,
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["text"], "MMR :");
    }
}
