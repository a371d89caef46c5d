//! Survival Arena - single-screen arcade survival shooter
//!
//! Core modules:
//! - `sim`: Simulation (movement, spawns, collisions, power-ups, game state)
//! - `game`: Lifecycle controller driving the tick loop and spawn timers
//! - `render`: Per-tick snapshot and draw command emission
//! - `audio`: Fire-and-forget sound triggers
//! - `ui`: Pause / game-over overlay presentation
//! - `settings`: JSON configuration

pub mod audio;
pub mod game;
pub mod render;
pub mod schedule;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::Game;
pub use settings::{KeyBindings, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed tick quantum used for cooldown countdowns (ms)
    pub const TICK_MS: i64 = 16;

    /// Default playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_BASE_SPEED: f32 = 5.0;
    pub const MAX_HEALTH: u32 = 100;
    /// Distance of the spawn position above the bottom edge
    pub const PLAYER_START_OFFSET_Y: f32 = 100.0;

    /// Bullets
    pub const BULLET_SIZE: f32 = 10.0;
    pub const PLAYER_BULLET_SPEED: f32 = 6.0;
    pub const ENEMY_BULLET_SPEED: f32 = 4.0;
    /// Minimum time between player shots (ms)
    pub const SHOT_COOLDOWN_MS: u64 = 300;

    /// Dash: speed multiplier, boost duration and cooldown (ms)
    pub const DASH_MULTIPLIER: f32 = 3.0;
    pub const DASH_DURATION_MS: i64 = 300;
    pub const DASH_COOLDOWN_MS: i64 = 2000;

    /// Enemies
    pub const ENEMY_SIZE: f32 = 50.0;
    pub const ENEMY_FIRE_PERIOD_MS: u64 = 2000;
    pub const ENEMY_BASE_HEALTH: i32 = 30;
    pub const ENEMY_HEALTH_PER_WAVE: i32 = 5;
    pub const ENEMY_SPEED_PER_WAVE: f32 = 0.2;

    /// Power-ups
    pub const POWER_UP_SIZE: f32 = 30.0;
    pub const POWER_UP_LIFETIME_MS: u64 = 5000;
    pub const HEAL_AMOUNT: u32 = 20;
    pub const SPEED_BONUS: f32 = 2.0;
    pub const BULLET_BOOST: f32 = 1.5;

    /// Damage and scoring
    pub const CONTACT_DAMAGE: u32 = 10;
    pub const BULLET_DAMAGE_TO_PLAYER: u32 = 10;
    pub const BULLET_DAMAGE_TO_ENEMY: i32 = 20;
    pub const KILL_SCORE: u64 = 10;

    /// Spawner periods (ms)
    pub const ENEMY_SPAWN_PERIOD_MS: u64 = 2000;
    pub const POWER_UP_SPAWN_PERIOD_MS: u64 = 10_000;

    /// Length of one difficulty wave (ms)
    pub const WAVE_LENGTH_MS: u64 = 30_000;
}
