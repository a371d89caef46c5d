//! Enemy and power-up spawning
//!
//! Spawns are driven by the lifecycle controller's fixed-period timers; these
//! functions only build the new entity.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, PowerUp, PowerUpKind};
use crate::consts::*;

/// Difficulty wave for a run that has been going for `elapsed_ms` (1-indexed)
pub fn wave_at(elapsed_ms: u64) -> u32 {
    (elapsed_ms / WAVE_LENGTH_MS) as u32 + 1
}

/// Create an enemy just above the top edge at a random x.
///
/// Speed is a random base in [1, 3) plus 0.2 per wave; health is 30 + 5 per wave.
pub fn spawn_enemy<R: Rng + ?Sized>(rng: &mut R, field: Vec2, wave: u32, now_ms: u64) -> Enemy {
    let span = (field.x - ENEMY_SIZE).max(0.0);
    let x = rng.random::<f32>() * span;
    let jitter = rng.random::<f32>() * 2.0 + 1.0;

    Enemy {
        pos: Vec2::new(x, -ENEMY_SIZE),
        size: Vec2::splat(ENEMY_SIZE),
        speed: jitter + wave as f32 * ENEMY_SPEED_PER_WAVE,
        health: ENEMY_BASE_HEALTH + wave as i32 * ENEMY_HEALTH_PER_WAVE,
        last_shot_ms: now_ms,
    }
}

/// Create a power-up of a random kind at a random in-bounds position
pub fn spawn_power_up<R: Rng + ?Sized>(rng: &mut R, field: Vec2, now_ms: u64) -> PowerUp {
    let span = (field - Vec2::splat(POWER_UP_SIZE)).max(Vec2::ZERO);
    let pos = Vec2::new(rng.random::<f32>() * span.x, rng.random::<f32>() * span.y);
    let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];

    PowerUp {
        pos,
        size: Vec2::splat(POWER_UP_SIZE),
        kind,
        spawned_at_ms: now_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> Vec2 {
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT)
    }

    #[test]
    fn test_wave_buckets() {
        assert_eq!(wave_at(0), 1);
        assert_eq!(wave_at(29_999), 1);
        assert_eq!(wave_at(30_000), 2);
        assert_eq!(wave_at(95_000), 4);
    }

    #[test]
    fn test_enemy_stats_scale_with_wave() {
        let mut rng = Pcg32::seed_from_u64(1);
        for wave in 1..6 {
            let enemy = spawn_enemy(&mut rng, field(), wave, 123);
            assert_eq!(enemy.health, 30 + 5 * wave as i32);
            let base = enemy.speed - 0.2 * wave as f32;
            assert!((1.0 - 1e-4..3.0 + 1e-4).contains(&base), "speed jitter {base}");
            assert_eq!(enemy.pos.y, -ENEMY_SIZE);
            assert!(enemy.pos.x >= 0.0 && enemy.pos.x <= FIELD_WIDTH - ENEMY_SIZE);
            assert_eq!(enemy.last_shot_ms, 123);
        }
    }

    #[test]
    fn test_power_ups_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let pu = spawn_power_up(&mut rng, field(), 0);
            assert!(pu.pos.x >= 0.0 && pu.pos.x + pu.size.x <= FIELD_WIDTH);
            assert!(pu.pos.y >= 0.0 && pu.pos.y + pu.size.y <= FIELD_HEIGHT);
            if !seen.contains(&pu.kind) {
                seen.push(pu.kind);
            }
        }
        assert_eq!(seen.len(), PowerUpKind::ALL.len());
    }

    #[test]
    fn test_tiny_field_does_not_panic() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tiny = Vec2::new(10.0, 10.0);
        let enemy = spawn_enemy(&mut rng, tiny, 1, 0);
        assert_eq!(enemy.pos.x, 0.0);
        let pu = spawn_power_up(&mut rng, tiny, 0);
        assert_eq!(pu.pos, Vec2::ZERO);
    }
}
