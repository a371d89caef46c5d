//! Game state and core simulation types
//!
//! `GameState` is the explicit simulation context: everything a tick reads or
//! mutates lives here and is owned by the lifecycle controller.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Rect;
use crate::consts::*;

/// Current phase of the run. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GamePhase {
    /// No run started yet
    #[default]
    Idle,
    /// Active gameplay, ticks execute
    Running,
    /// Ticks and spawn timers suspended, entities frozen
    Paused,
    /// Run ended (health reached zero)
    GameOver,
}

/// A projectile, fired by the player or by an enemy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(BULLET_SIZE),
            vel,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// A descending enemy that periodically fires at the player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed per tick (wave-scaled)
    pub speed: f32,
    pub health: i32,
    /// Timestamp of the last shot (spawn time until the first shot)
    pub last_shot_ms: u64,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn ready_to_fire(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_shot_ms) >= ENEMY_FIRE_PERIOD_MS
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerUpKind {
    /// Heal up to the health cap
    Health,
    /// Force the shield on until the shield key is released
    Shield,
    /// Permanent movement speed bonus (stacks)
    Speed,
    /// Speed up every player bullet currently in flight
    Bullet,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::Shield,
        PowerUpKind::Speed,
        PowerUpKind::Bullet,
    ];

    /// Label drawn above the power-up
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Health => "health",
            PowerUpKind::Shield => "shield",
            PowerUpKind::Speed => "speed",
            PowerUpKind::Bullet => "bullet",
        }
    }
}

/// A timed pickup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PowerUpKind,
    pub spawned_at_ms: u64,
}

impl PowerUp {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.spawned_at_ms)
    }

    pub fn expired(&self, now_ms: u64) -> bool {
        self.age_ms(now_ms) > POWER_UP_LIFETIME_MS
    }

    /// Whole seconds left before expiry, rounded up
    pub fn remaining_secs(&self, now_ms: u64) -> u64 {
        POWER_UP_LIFETIME_MS
            .saturating_sub(self.age_ms(now_ms))
            .div_ceil(1000)
    }
}

/// The player's avatar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Current movement speed (cruising or dashing)
    pub speed: f32,
    pub base_speed: f32,
    /// Accumulated bonus from speed power-ups
    pub speed_bonus: f32,
    /// Always within [0, MAX_HEALTH]
    pub health: u32,
    pub score: u64,
    pub bullets: Vec<Bullet>,
    /// Shield state as of the latest tick
    pub shield_active: bool,
    /// Latched by a shield power-up, cleared when the shield key is released
    pub shield_forced: bool,
    /// Remaining dash cooldown (ms). May dip slightly below zero.
    pub dash_cooldown_ms: i64,
    /// Remaining dash boost (ms)
    pub dash_remaining_ms: i64,
    pub last_shot_ms: Option<u64>,
}

impl Player {
    /// Fresh player at the start position for a field of the given size
    pub fn new(field: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                field.x / 2.0 - PLAYER_SIZE / 2.0,
                field.y - PLAYER_START_OFFSET_Y,
            ),
            size: Vec2::splat(PLAYER_SIZE),
            speed: PLAYER_BASE_SPEED,
            base_speed: PLAYER_BASE_SPEED,
            speed_bonus: 0.0,
            health: MAX_HEALTH,
            score: 0,
            bullets: Vec::new(),
            shield_active: false,
            shield_forced: false,
            dash_cooldown_ms: 0,
            dash_remaining_ms: 0,
            last_shot_ms: None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Speed outside of a dash: base plus every speed bonus collected
    pub fn cruising_speed(&self) -> f32 {
        self.base_speed + self.speed_bonus
    }

    pub fn is_dashing(&self) -> bool {
        self.dash_remaining_ms > 0
    }

    /// Start a dash unless the cooldown is still running.
    ///
    /// Returns true if the dash started.
    pub fn dash(&mut self) -> bool {
        if self.dash_cooldown_ms > 0 {
            return false;
        }
        self.speed = self.base_speed * DASH_MULTIPLIER;
        self.dash_remaining_ms = DASH_DURATION_MS;
        self.dash_cooldown_ms = DASH_COOLDOWN_MS;
        true
    }

    /// Advance dash timers by one tick quantum, reverting speed when the boost ends
    pub fn update_dash(&mut self, quantum_ms: i64) {
        if self.dash_remaining_ms > 0 {
            self.dash_remaining_ms -= quantum_ms;
            if self.dash_remaining_ms <= 0 {
                self.dash_remaining_ms = 0;
                self.speed = self.cruising_speed();
            }
        }
        if self.dash_cooldown_ms > 0 {
            self.dash_cooldown_ms -= quantum_ms;
        }
    }

    /// Apply a permanent speed bonus (also boosts an ongoing dash)
    pub fn add_speed_bonus(&mut self, bonus: f32) {
        self.speed_bonus += bonus;
        self.speed += bonus;
    }

    /// Apply damage unless shielded. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        if self.shield_active {
            return 0;
        }
        let before = self.health;
        self.health = self.health.saturating_sub(amount);
        before - self.health
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Keep the player fully inside the playfield
    pub fn clamp_to_field(&mut self, field: Vec2) {
        let max = (field - self.size).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }
}

/// Side effects produced by a tick, consumed by audio/presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Player fired a bullet
    Shot,
    /// Player started a dash
    Dashed,
    /// An enemy was destroyed by player fire
    EnemyKilled { pos: Vec2 },
    /// Player lost health (contact or projectile)
    PlayerHit { damage: u32 },
    /// A hit was absorbed by the shield
    ShieldBlocked,
    PowerUpCollected(PowerUpKind),
    PowerUpExpired(PowerUpKind),
    /// Health reached zero
    GameOver { score: u64 },
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield size (width, height)
    pub field: Vec2,
    pub phase: GamePhase,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
    /// Monotonic timestamp of the run start (ms)
    pub started_at_ms: u64,
    /// Ticks executed in this run
    pub ticks: u64,
    /// Seed the spawn RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Create an idle state for a playfield of the given size
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let field = Vec2::new(width, height);
        Self {
            field,
            phase: GamePhase::Idle,
            player: Player::new(field),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            power_ups: Vec::new(),
            started_at_ms: 0,
            ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset every entity and player field for a new run starting at `now_ms`.
    ///
    /// The RNG keeps its stream so consecutive runs differ.
    pub fn reset(&mut self, now_ms: u64) {
        self.player = Player::new(self.field);
        self.enemies.clear();
        self.enemy_bullets.clear();
        self.power_ups.clear();
        self.started_at_ms = now_ms;
        self.ticks = 0;
        self.phase = GamePhase::Running;
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms)
    }

    /// Current difficulty wave (1-indexed)
    pub fn wave(&self, now_ms: u64) -> u32 {
        super::spawn::wave_at(self.elapsed_ms(now_ms))
    }
}
