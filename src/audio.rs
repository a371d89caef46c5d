//! Audio triggers
//!
//! The game only fires sounds and never waits on them. Playback is delegated
//! to an `AudioBackend`; without one, audio is silently disabled.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired
    Shoot,
    /// Enemy destroyed
    EnemyDeath,
    /// Run ended
    GameOver,
}

/// Background music control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCommand {
    /// Rewind and start looping
    Start,
    Pause,
    Resume,
    /// Run ended; stop and rewind
    Stop,
}

/// Something that can actually make noise
pub trait AudioBackend {
    /// Play a one-shot effect, restarting it if already playing
    fn play(&mut self, effect: SoundEffect, volume: f32);
    fn music(&mut self, command: MusicCommand, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for AudioManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioManager")
            .field("enabled", &self.backend.is_some())
            .field("master_volume", &self.master_volume)
            .field("muted", &self.muted)
            .finish()
    }
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn AudioBackend>>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }

    /// Take volume and mute preferences from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.music_volume = settings.music_volume.clamp(0.0, 1.0);
        self.muted = settings.muted;
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    fn effective_volume(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(self.sfx_volume);
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else { return };
        backend.play(effect, vol);
    }

    /// Control the background music loop.
    ///
    /// Music commands are forwarded even when muted so the loop stays in sync.
    pub fn music(&mut self, command: MusicCommand) {
        let vol = self.effective_volume(self.music_volume);
        let Some(backend) = self.backend.as_mut() else { return };
        backend.music(command, vol);
    }
}
