//! Lifecycle controller
//!
//! Owns the simulation context and decides when ticks run:
//! `Idle -> Running <-> Paused -> GameOver -> (play again) -> Running`.
//! Spawn timers are polled at the start of every frame, so spawns, input and
//! the tick all happen on the caller's thread.

use crate::audio::{AudioManager, MusicCommand, SoundEffect};
use crate::consts::{ENEMY_SPAWN_PERIOD_MS, POWER_UP_SPAWN_PERIOD_MS};
use crate::render::{RenderSink, Snapshot, frame_commands, game_over_commands};
use crate::schedule::{Clock, RepeatingTask};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, KeyState, spawn_enemy, spawn_power_up, tick};
use crate::ui::{NoOverlay, Overlay};

/// Game instance holding all state
pub struct Game {
    settings: Settings,
    state: GameState,
    keys: KeyState,
    clock: Box<dyn Clock>,
    enemy_spawner: RepeatingTask,
    power_up_spawner: RepeatingTask,
    /// True while the host should keep requesting frames
    loop_scheduled: bool,
    audio: AudioManager,
    overlay: Box<dyn Overlay>,
}

impl Game {
    /// Create an idle game. Audio and overlays default to absent.
    pub fn new(settings: Settings, clock: Box<dyn Clock>) -> Self {
        let settings = settings.sanitized();
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "Arena {}x{}, seed {}",
            settings.field_width,
            settings.field_height,
            seed
        );
        let mut audio = AudioManager::new(None);
        audio.apply_settings(&settings);
        Self {
            state: GameState::new(seed, settings.field_width, settings.field_height),
            settings,
            keys: KeyState::new(),
            clock,
            enemy_spawner: RepeatingTask::new(ENEMY_SPAWN_PERIOD_MS),
            power_up_spawner: RepeatingTask::new(POWER_UP_SPAWN_PERIOD_MS),
            loop_scheduled: false,
            audio,
            overlay: Box::new(NoOverlay),
        }
    }

    pub fn with_audio(mut self, mut audio: AudioManager) -> Self {
        audio.apply_settings(&self.settings);
        self.audio = audio;
        self
    }

    pub fn with_overlay(mut self, overlay: Box<dyn Overlay>) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current time on the game's clock
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Whether the host should request another frame
    pub fn is_loop_scheduled(&self) -> bool {
        self.loop_scheduled
    }

    /// Begin a fresh run: reset everything, arm spawners, start the loop
    pub fn start_game(&mut self) {
        let now = self.clock.now_ms();
        self.state.reset(now);

        self.enemy_spawner.disarm();
        self.power_up_spawner.disarm();
        self.enemy_spawner.arm(now);
        self.power_up_spawner.arm(now);
        self.loop_scheduled = true;

        if !self.audio.is_enabled() {
            log::warn!("No audio backend - audio disabled");
        }
        self.overlay.hide_pause();
        self.audio.music(MusicCommand::Start);
        log::info!("Run started at {now} ms");
    }

    /// Pause a running game or resume a paused one
    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::Idle | GamePhase::GameOver => {}
        }
    }

    /// Suspend ticks and spawners; entities stay as they are
    pub fn pause(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        self.state.phase = GamePhase::Paused;
        self.enemy_spawner.disarm();
        self.power_up_spawner.disarm();
        self.loop_scheduled = false;

        self.overlay.show_pause();
        self.audio.music(MusicCommand::Pause);
        log::info!("Paused");
    }

    /// Restart ticks and spawners after a pause
    pub fn resume(&mut self) {
        if self.state.phase != GamePhase::Paused {
            return;
        }
        let now = self.clock.now_ms();
        self.state.phase = GamePhase::Running;
        self.enemy_spawner.arm(now);
        self.power_up_spawner.arm(now);
        self.loop_scheduled = true;

        self.overlay.hide_pause();
        self.audio.music(MusicCommand::Resume);
        log::info!("Resumed");
    }

    /// Dismiss the game-over screen and start over
    pub fn play_again(&mut self) {
        self.overlay.hide_game_over();
        self.start_game();
    }

    /// Raw key press; the pause key toggles once per physical press
    pub fn key_down(&mut self, key: &str) {
        let pressed = self.keys.key_down(key);
        if pressed && key.to_lowercase() == self.settings.keys.pause {
            self.toggle_pause();
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.key_up(key);
    }

    /// Run one frame: fire due spawners, tick, and push the frame to `sink`.
    ///
    /// Returns true if another frame should be scheduled.
    pub fn frame(&mut self, sink: &mut dyn RenderSink) -> bool {
        if !self.loop_scheduled || self.state.phase != GamePhase::Running {
            self.loop_scheduled = false;
            return false;
        }
        let now = self.clock.now_ms();
        self.run_spawners(now);

        let intent = self.keys.sample(&self.settings.keys);
        let events = tick(&mut self.state, &intent, now);
        self.dispatch(&events);

        let snapshot = Snapshot::capture(&self.state, now, self.settings.show_control_hints);
        sink.submit(&frame_commands(&snapshot));

        if self.state.phase == GamePhase::GameOver {
            self.game_over(sink);
            return false;
        }
        true
    }

    fn run_spawners(&mut self, now: u64) {
        let wave = self.state.wave(now);
        if self.enemy_spawner.poll(now) {
            let enemy = spawn_enemy(&mut self.state.rng, self.state.field, wave, now);
            log::debug!("Wave {wave} enemy at x={:.0}", enemy.pos.x);
            self.state.enemies.push(enemy);
        }
        if self.power_up_spawner.poll(now) {
            let pu = spawn_power_up(&mut self.state.rng, self.state.field, now);
            log::debug!("{} power-up at {:?}", pu.kind.as_str(), pu.pos);
            self.state.power_ups.push(pu);
        }
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Shot => self.audio.play(SoundEffect::Shoot),
                GameEvent::EnemyKilled { .. } => self.audio.play(SoundEffect::EnemyDeath),
                _ => {}
            }
        }
    }

    /// Freeze the run, disarm spawners, present the summary
    fn game_over(&mut self, sink: &mut dyn RenderSink) {
        self.loop_scheduled = false;
        self.enemy_spawner.disarm();
        self.power_up_spawner.disarm();

        self.audio.music(MusicCommand::Stop);
        self.audio.play(SoundEffect::GameOver);

        let name = self.settings.player_name.as_str();
        sink.submit(&game_over_commands(self.state.field, name));
        self.overlay.show_game_over(name, self.state.player.score);
        log::info!("{name}, game over - final score {}", self.state.player.score);
    }
}
