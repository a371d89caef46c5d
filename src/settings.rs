//! Game settings and key bindings
//!
//! Loaded from a JSON file. Missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Key names (as reported by the input source, case-folded) for each control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
    pub fire: String,
    pub shoot_up: String,
    pub shoot_down: String,
    pub shoot_left: String,
    pub shoot_right: String,
    pub shield: String,
    pub dash: String,
    pub pause: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "a".into(),
            right: "d".into(),
            up: "w".into(),
            down: "s".into(),
            fire: " ".into(),
            shoot_up: "arrowup".into(),
            shoot_down: "arrowdown".into(),
            shoot_left: "arrowleft".into(),
            shoot_right: "arrowright".into(),
            shield: "q".into(),
            dash: "e".into(),
            pause: "p".into(),
        }
    }
}

impl KeyBindings {
    /// Lowercase every binding so they match the case-folded key map
    pub fn normalized(mut self) -> Self {
        for key in [
            &mut self.left,
            &mut self.right,
            &mut self.up,
            &mut self.down,
            &mut self.fire,
            &mut self.shoot_up,
            &mut self.shoot_down,
            &mut self.shoot_left,
            &mut self.shoot_right,
            &mut self.shield,
            &mut self.dash,
            &mut self.pause,
        ] {
            *key = key.to_lowercase();
        }
        self
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    /// Name shown on the game-over screen
    pub player_name: String,
    /// Spawn RNG seed (None = from entropy)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === HUD ===
    /// Draw the centred control hint line
    pub show_control_hints: bool,

    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            player_name: "Player".into(),
            seed: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            show_control_hints: true,
            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, then sanitize
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Clamp volumes, reject degenerate playfields, case-fold key bindings
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        if !(self.field_width.is_finite() && self.field_width > 0.0) {
            self.field_width = FIELD_WIDTH;
        }
        if !(self.field_height.is_finite() && self.field_height > 0.0) {
            self.field_height = FIELD_HEIGHT;
        }
        if self.player_name.trim().is_empty() {
            self.player_name = "Player".into();
        }
        self.keys = self.keys.normalized();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings.field_width, FIELD_WIDTH);
        assert_eq!(settings.player_name, "Player");
        assert_eq!(settings.keys, KeyBindings::default());
    }

    #[test]
    fn test_partial_overrides() {
        let json = r#"{"player_name": "Ada", "keys": {"fire": "Enter", "dash": "Shift"}}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.player_name, "Ada");
        assert_eq!(settings.keys.fire, "enter");
        assert_eq!(settings.keys.dash, "shift");
        assert_eq!(settings.keys.left, "a");
    }

    #[test]
    fn test_sanitize() {
        let json = r#"{"master_volume": 3.0, "field_width": -1, "player_name": "  "}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.field_width, FIELD_WIDTH);
        assert_eq!(settings.player_name, "Player");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/survival-arena/settings.json");
        assert_eq!(settings.player_name, "Player");
    }
}
