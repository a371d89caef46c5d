//! Draw command generation
//!
//! Frame order: clear, player, shield ring, player bullets, enemies, enemy
//! bullets, power-ups with label and countdown, HUD, control hint.

use glam::Vec2;

use super::colors;
use super::snapshot::Snapshot;
use super::{Color, DrawCommand, Font};
use crate::sim::Rect;

const HUD_FONT: Font = Font::px(20.0);
const LABEL_FONT: Font = Font::px(12.0);
const HINT_FONT: Font = Font::px(16.0);
const GAME_OVER_FONT: Font = Font::px(40.0);

const SHIELD_LINE_WIDTH: f32 = 5.0;

pub const CONTROL_HINT: &str = "Move: W/A/S/D | Shoot: Arrow Keys | Dash: E | Shield: Q | Pause: P";

fn fill(rect: &Rect, color: Color) -> DrawCommand {
    DrawCommand::FillRect {
        pos: rect.pos,
        size: rect.size,
        color,
    }
}

fn text(text: impl Into<String>, x: f32, y: f32, font: Font, color: Color) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        pos: Vec2::new(x, y),
        font,
        color,
    }
}

/// Build the draw commands for one running frame
pub fn frame_commands(snap: &Snapshot) -> Vec<DrawCommand> {
    let mut cmds = Vec::with_capacity(
        8 + snap.player_bullets.len()
            + snap.enemies.len()
            + snap.enemy_bullets.len()
            + snap.power_ups.len() * 3,
    );

    cmds.push(DrawCommand::Clear);
    cmds.push(fill(&snap.player, colors::PLAYER));
    if snap.shield_active {
        // Ring radius is the full player width
        cmds.push(DrawCommand::StrokeCircle {
            center: snap.player.center(),
            radius: snap.player.size.x,
            color: colors::SHIELD,
            line_width: SHIELD_LINE_WIDTH,
        });
    }

    cmds.extend(snap.player_bullets.iter().map(|r| fill(r, colors::PLAYER_BULLET)));
    cmds.extend(snap.enemies.iter().map(|r| fill(r, colors::ENEMY)));
    cmds.extend(snap.enemy_bullets.iter().map(|r| fill(r, colors::ENEMY_BULLET)));

    for pu in &snap.power_ups {
        let r = &pu.rect;
        cmds.push(fill(r, colors::POWER_UP));
        cmds.push(text(pu.kind.as_str(), r.pos.x, r.pos.y - 5.0, LABEL_FONT, colors::TEXT));
        cmds.push(text(
            format!("({})", pu.remaining_secs),
            r.pos.x + r.size.x - 12.0,
            r.pos.y + r.size.y + 12.0,
            LABEL_FONT,
            colors::TEXT,
        ));
    }

    let hud = &snap.hud;
    let lines = [
        format!("Health: {}", hud.health),
        format!("Score: {}", hud.score),
        format!("Wave: {}", hud.wave),
        format!("Time: {}s", hud.elapsed_secs),
    ];
    for (i, line) in lines.into_iter().enumerate() {
        cmds.push(text(line, 10.0, 30.0 * (i as f32 + 1.0), HUD_FONT, colors::TEXT));
    }

    if snap.show_control_hints {
        let w = HINT_FONT.approx_width(CONTROL_HINT);
        cmds.push(text(
            CONTROL_HINT,
            snap.field.x / 2.0 - w / 2.0,
            snap.field.y / 2.0,
            HINT_FONT,
            colors::TEXT,
        ));
    }

    cmds
}

/// Build the final frame shown when the run ends
pub fn game_over_commands(field: Vec2, player_name: &str) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Clear,
        text(
            format!("{player_name}, Game Over"),
            field.x / 2.0 - 150.0,
            field.y / 2.0,
            GAME_OVER_FONT,
            colors::GAME_OVER,
        ),
    ]
}
