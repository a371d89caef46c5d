//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Time arrives as an explicit millisecond timestamp
//! - Randomness comes from the RNG owned by `GameState`
//! - Side effects leave the tick as `GameEvent`s
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, intersects};
pub use input::{ControlIntent, KeyState};
pub use spawn::{spawn_enemy, spawn_power_up, wave_at};
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player, PowerUp, PowerUpKind};
pub use tick::tick;
