//! Menu overlays
//!
//! The host shell owns the actual pause and game-over screens. A missing
//! overlay must never stop the game, so every method has a no-op default.

/// Pause / game-over presentation hooks
pub trait Overlay {
    fn show_pause(&mut self) {}
    fn hide_pause(&mut self) {}
    /// Show the game-over screen for `player_name` with the final score
    fn show_game_over(&mut self, _player_name: &str, _score: u64) {}
    fn hide_game_over(&mut self) {}
}

/// Overlay that presents nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOverlay;

impl Overlay for NoOverlay {}
