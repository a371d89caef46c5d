//! Per-tick renderable snapshot

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GameState, PowerUpKind, Rect};

/// A power-up as drawn: box, label and countdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUpView {
    pub rect: Rect,
    pub kind: PowerUpKind,
    /// Seconds until expiry, rounded up
    pub remaining_secs: u64,
}

/// Heads-up display values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub health: u32,
    pub score: u64,
    pub wave: u32,
    pub elapsed_secs: u64,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub field: Vec2,
    pub player: Rect,
    pub shield_active: bool,
    pub player_bullets: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub enemy_bullets: Vec<Rect>,
    pub power_ups: Vec<PowerUpView>,
    pub hud: Hud,
    pub show_control_hints: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState, now_ms: u64, show_control_hints: bool) -> Self {
        let player = &state.player;
        Self {
            field: state.field,
            player: player.rect(),
            shield_active: player.shield_active,
            player_bullets: player.bullets.iter().map(|b| b.rect()).collect(),
            enemies: state.enemies.iter().map(|e| e.rect()).collect(),
            enemy_bullets: state.enemy_bullets.iter().map(|b| b.rect()).collect(),
            power_ups: state
                .power_ups
                .iter()
                .map(|pu| PowerUpView {
                    rect: pu.rect(),
                    kind: pu.kind,
                    remaining_secs: pu.remaining_secs(now_ms),
                })
                .collect(),
            hud: Hud {
                health: player.health,
                score: player.score,
                wave: state.wave(now_ms),
                elapsed_secs: state.elapsed_ms(now_ms) / 1000,
            },
            show_control_hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{Bullet, PowerUp};

    #[test]
    fn test_capture() {
        let mut state = GameState::new(1, FIELD_WIDTH, FIELD_HEIGHT);
        state.reset(1000);
        state.player.score = 30;
        state.player.bullets.push(Bullet::new(Vec2::new(5.0, 5.0), Vec2::ZERO));
        state.power_ups.push(PowerUp {
            pos: Vec2::new(50.0, 50.0),
            size: Vec2::splat(POWER_UP_SIZE),
            kind: PowerUpKind::Shield,
            spawned_at_ms: 60_000,
        });

        let snap = Snapshot::capture(&state, 62_500, true);
        assert_eq!(snap.hud.score, 30);
        assert_eq!(snap.hud.health, MAX_HEALTH);
        assert_eq!(snap.hud.wave, 3);
        assert_eq!(snap.hud.elapsed_secs, 61);
        assert_eq!(snap.player_bullets.len(), 1);
        assert_eq!(snap.power_ups[0].remaining_secs, 3);
    }
}
