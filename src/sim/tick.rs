//! Simulation tick
//!
//! Advances the arena by one step. Displacements are fixed per tick (not
//! scaled by elapsed time); cooldowns count down by `TICK_MS` per tick while
//! shot/fire/expiry timers compare wall-clock timestamps.

use glam::Vec2;

use super::collision::{intersects, outside_field};
use super::input::ControlIntent;
use super::state::{Bullet, GameEvent, GamePhase, GameState, PowerUpKind};
use crate::consts::*;

/// Advance the game state by one tick at wall-clock time `now_ms`.
///
/// Does nothing unless the phase is `Running`. Returns the side effects the
/// tick produced, in order.
pub fn tick(state: &mut GameState, intent: &ControlIntent, now_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }
    state.ticks += 1;
    let field = state.field;

    // Dash
    let player = &mut state.player;
    if intent.dash && player.dash() {
        events.push(GameEvent::Dashed);
    }
    player.update_dash(TICK_MS);

    // Shield: held key, or latched by a power-up until the key is released
    if intent.shield_released {
        player.shield_forced = false;
    }
    player.shield_active = intent.shield_held || player.shield_forced;

    // Movement
    if intent.movement != Vec2::ZERO {
        player.pos += intent.movement * player.speed;
    }
    player.clamp_to_field(field);

    // Shooting
    let can_shoot = player
        .last_shot_ms
        .is_none_or(|t| now_ms.saturating_sub(t) >= SHOT_COOLDOWN_MS);
    if intent.fire && can_shoot {
        let dir = unit_or(intent.shoot_dir, Vec2::NEG_Y);
        let spawn = player.center() - Vec2::splat(BULLET_SIZE / 2.0);
        player.bullets.push(Bullet::new(spawn, dir * PLAYER_BULLET_SPEED));
        player.last_shot_ms = Some(now_ms);
        events.push(GameEvent::Shot);
    }

    // Player bullets
    player.bullets.retain_mut(|b| {
        b.integrate();
        !outside_field(b.pos, field.x, field.y)
    });

    update_enemies(state, now_ms, &mut events);
    update_enemy_bullets(state, &mut events);
    update_power_ups(state, now_ms, &mut events);

    if state.player.is_dead() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, score {}",
            state.ticks,
            state.player.score
        );
        events.push(GameEvent::GameOver {
            score: state.player.score,
        });
    }

    events
}

/// Move enemies, let them fire, and resolve ram and bullet hits
fn update_enemies(state: &mut GameState, now_ms: u64, events: &mut Vec<GameEvent>) {
    let field = state.field;
    let player = &mut state.player;
    let enemy_bullets = &mut state.enemy_bullets;

    state.enemies.retain_mut(|enemy| {
        enemy.pos.y += enemy.speed;

        if enemy.ready_to_fire(now_ms) {
            enemy.last_shot_ms = now_ms;
            let origin = enemy.center();
            let dir = unit_or(player.center() - origin, Vec2::Y);
            enemy_bullets.push(Bullet::new(
                origin - Vec2::splat(BULLET_SIZE / 2.0),
                dir * ENEMY_BULLET_SPEED,
            ));
        }

        // Ramming the player destroys the enemy either way
        if intersects(&player.rect(), &enemy.rect()) {
            let shielded = player.shield_active;
            push_damage(events, shielded, player.take_damage(CONTACT_DAMAGE));
            return false;
        }

        let enemy_rect = enemy.rect();
        let mut alive = true;
        player.bullets.retain(|b| {
            if !alive || !intersects(&b.rect(), &enemy_rect) {
                return true;
            }
            enemy.health -= BULLET_DAMAGE_TO_ENEMY;
            alive = enemy.health > 0;
            false
        });

        if !alive {
            player.score += KILL_SCORE;
            log::debug!("Enemy destroyed at {:?}, score {}", enemy.pos, player.score);
            events.push(GameEvent::EnemyKilled { pos: enemy.pos });
            return false;
        }

        // Drifted past the bottom edge
        enemy.pos.y <= field.y
    });
}

fn update_enemy_bullets(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let field = state.field;
    let player = &mut state.player;

    state.enemy_bullets.retain_mut(|b| {
        b.integrate();
        if outside_field(b.pos, field.x, field.y) {
            return false;
        }
        if intersects(&b.rect(), &player.rect()) {
            let shielded = player.shield_active;
            push_damage(events, shielded, player.take_damage(BULLET_DAMAGE_TO_PLAYER));
            return false;
        }
        true
    });
}

/// Expire old power-ups, then apply any the player is touching
fn update_power_ups(state: &mut GameState, now_ms: u64, events: &mut Vec<GameEvent>) {
    let player_rect = state.player.rect();

    let mut collected: Vec<PowerUpKind> = Vec::new();
    state.power_ups.retain(|pu| {
        if pu.expired(now_ms) {
            events.push(GameEvent::PowerUpExpired(pu.kind));
            false
        } else if intersects(&player_rect, &pu.rect()) {
            collected.push(pu.kind);
            false
        } else {
            true
        }
    });

    let player = &mut state.player;
    for kind in collected {
        match kind {
            PowerUpKind::Health => player.heal(HEAL_AMOUNT),
            PowerUpKind::Shield => {
                player.shield_forced = true;
                player.shield_active = true;
            }
            PowerUpKind::Speed => player.add_speed_bonus(SPEED_BONUS),
            PowerUpKind::Bullet => {
                for b in &mut player.bullets {
                    b.vel *= BULLET_BOOST;
                }
            }
        }
        log::debug!("Collected {} power-up", kind.as_str());
        events.push(GameEvent::PowerUpCollected(kind));
    }
}

/// Unit vector along `v`, or `fallback` when `v` has no usable direction
fn unit_or(v: Vec2, fallback: Vec2) -> Vec2 {
    v.try_normalize().unwrap_or(fallback)
}

fn push_damage(events: &mut Vec<GameEvent>, shielded: bool, taken: u32) {
    if shielded {
        events.push(GameEvent::ShieldBlocked);
    } else if taken > 0 {
        events.push(GameEvent::PlayerHit { damage: taken });
    }
}
