//! Keyboard state and per-tick control mapping
//!
//! Raw key-down/key-up signals update a case-folded key map. Once per tick the
//! map is sampled into a `ControlIntent`, which is all the simulation sees.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::settings::KeyBindings;

/// Controls derived from the key map for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlIntent {
    /// Unit movement direction, or zero when no movement key is held
    pub movement: Vec2,
    /// Fire key held
    pub fire: bool,
    /// Unit shoot direction (defaults to up)
    pub shoot_dir: Vec2,
    /// Shield key currently held
    pub shield_held: bool,
    /// Shield key went from held to released since the previous sample
    pub shield_released: bool,
    /// Dash key held
    pub dash: bool,
}

impl ControlIntent {
    /// No keys held: stand still, shoot direction up
    pub fn idle() -> Self {
        Self {
            shoot_dir: Vec2::NEG_Y,
            ..Default::default()
        }
    }
}

/// Pressed/released state per lowercase key name
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashMap<String, bool>,
    /// Keys released since the last `sample`
    released: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    ///
    /// Returns true only on the released -> pressed edge, so auto-repeat
    /// signals for a held key report false.
    pub fn key_down(&mut self, key: &str) -> bool {
        let key = key.to_lowercase();
        let was_down = self.pressed.insert(key, true).unwrap_or(false);
        !was_down
    }

    /// Record a key release
    pub fn key_up(&mut self, key: &str) {
        let key = key.to_lowercase();
        if self.pressed.insert(key.clone(), false).unwrap_or(false) {
            self.released.insert(key);
        }
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }

    /// Derive this tick's controls and reset release tracking
    pub fn sample(&mut self, bindings: &KeyBindings) -> ControlIntent {
        let axis = |neg: &str, pos: &str| -> f32 {
            let mut v = 0.0;
            if self.is_down(neg) {
                v -= 1.0;
            }
            if self.is_down(pos) {
                v += 1.0;
            }
            v
        };

        let movement = Vec2::new(
            axis(bindings.left.as_str(), bindings.right.as_str()),
            axis(bindings.up.as_str(), bindings.down.as_str()),
        )
        .normalize_or_zero();

        let mut shoot = Vec2::ZERO;
        if self.is_down(&bindings.shoot_up) {
            shoot.y = -1.0;
        }
        if self.is_down(&bindings.shoot_down) {
            shoot.y = 1.0;
        }
        if self.is_down(&bindings.shoot_left) {
            shoot.x = -1.0;
        }
        if self.is_down(&bindings.shoot_right) {
            shoot.x = 1.0;
        }
        let shoot_dir = shoot.try_normalize().unwrap_or(Vec2::NEG_Y);

        let shield_released = self.released.contains(bindings.shield.as_str());
        self.released.clear();

        ControlIntent {
            movement,
            fire: self.is_down(&bindings.fire),
            shoot_dir,
            shield_held: self.is_down(&bindings.shield),
            shield_released,
            dash: self.is_down(&bindings.dash),
        }
    }
}
