//! Rendering output
//!
//! The simulation never draws. Each tick it captures a `Snapshot`, which is
//! turned into primitive `DrawCommand`s and pushed to a `RenderSink`.

pub mod commands;
pub mod snapshot;

pub use commands::{frame_commands, game_over_commands};
pub use snapshot::{Hud, PowerUpView, Snapshot};

use glam::Vec2;
use serde::Serialize;

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

pub mod colors {
    use super::Color;

    pub const PLAYER: Color = [0.0, 0.0, 1.0, 1.0];
    pub const SHIELD: Color = [0.0, 1.0, 1.0, 1.0];
    pub const PLAYER_BULLET: Color = [1.0, 0.0, 0.0, 1.0];
    pub const ENEMY: Color = [0.0, 0.5, 0.0, 1.0];
    pub const ENEMY_BULLET: Color = [1.0, 0.65, 0.0, 1.0];
    pub const POWER_UP: Color = [1.0, 1.0, 0.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER: Color = [1.0, 0.0, 0.0, 1.0];
}

/// Font description: pixel size and family
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size_px: f32,
    pub family: &'static str,
}

impl Font {
    pub const fn px(size_px: f32) -> Self {
        Self {
            size_px,
            family: "Arial",
        }
    }

    /// Rough advance width of `text`; sinks without text metrics use this for centering
    pub fn approx_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size_px * 0.5
    }
}

/// A primitive draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear,
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        line_width: f32,
    },
    /// Text with its baseline-left corner at `pos`
    Text {
        text: String,
        pos: Vec2,
        font: Font,
        color: Color,
    },
}

/// A drawing surface that accepts primitive commands
pub trait RenderSink {
    fn draw(&mut self, command: &DrawCommand);

    /// Draw a whole frame, in order
    fn submit(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw(&mut self, _command: &DrawCommand) {}
}

/// Sink that keeps the most recent frame (headless runs and tests)
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    pub frames: u64,
    pub last_frame: Vec<DrawCommand>,
}

impl RenderSink for FrameRecorder {
    fn draw(&mut self, command: &DrawCommand) {
        if *command == DrawCommand::Clear {
            self.frames += 1;
            self.last_frame.clear();
        }
        self.last_frame.push(command.clone());
    }
}

impl FrameRecorder {
    /// All text drawn in the last frame
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
