//! Survival Arena headless driver
//!
//! Runs the game loop against a simulated 16 ms clock with a simple autopilot
//! holding the keys, then prints the final HUD values as JSON.
//!
//! Usage: `survival-arena [settings.json] [--frames N] [--realtime]`
//!
//! `--realtime` paces frames against the wall clock instead.

use std::time::Duration;

use survival_arena::audio::{AudioBackend, AudioManager, MusicCommand, SoundEffect};
use survival_arena::render::{FrameRecorder, Snapshot};
use survival_arena::schedule::{Clock, ManualClock, SystemClock};
use survival_arena::sim::GamePhase;
use survival_arena::ui::Overlay;
use survival_arena::{Game, Settings};

const FRAME_MS: u64 = 16;
const DEFAULT_FRAMES: u64 = 60 * 120;

/// Logs every sound instead of playing it
struct LogAudio;

impl AudioBackend for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("sfx {effect:?} @ {volume:.2}");
    }

    fn music(&mut self, command: MusicCommand, volume: f32) {
        log::debug!("music {command:?} @ {volume:.2}");
    }
}

struct LogOverlay;

impl Overlay for LogOverlay {
    fn show_pause(&mut self) {
        log::info!("[overlay] paused");
    }

    fn show_game_over(&mut self, player_name: &str, score: u64) {
        log::info!("[overlay] {player_name}, Game Over (score {score})");
    }
}

/// Key presses the autopilot wants held this frame
fn autopilot(game: &Game) -> Vec<&'static str> {
    let state = game.state();
    let player = &state.player;
    let mut keys = vec![" ", "arrowup"];

    // Line up under the lowest enemy
    if let Some(target) = state
        .enemies
        .iter()
        .filter(|e| e.pos.y >= 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    {
        let dx = target.center().x - player.center().x;
        if dx < -10.0 {
            keys.push("a");
        } else if dx > 10.0 {
            keys.push("d");
        }
    }

    // Shield against anything about to hit
    let threat = player.rect();
    let incoming = state
        .enemy_bullets
        .iter()
        .any(|b| b.pos.distance(threat.center()) < 60.0);
    if incoming {
        keys.push("q");
    }
    if player.health < 30 {
        keys.push("e");
    }
    keys
}

struct Options {
    settings: Settings,
    frames: u64,
    realtime: bool,
}

fn parse_args() -> Options {
    let mut settings = Settings::default();
    let mut frames = DEFAULT_FRAMES;
    let mut realtime = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--realtime" {
            realtime = true;
        } else if arg == "--frames" {
            match args.next().map(|n| n.parse::<u64>()) {
                Some(Ok(n)) => frames = n,
                _ => log::warn!("--frames expects a number; using {frames}"),
            }
        } else {
            settings = Settings::load(&arg);
        }
    }
    Options {
        settings,
        frames,
        realtime,
    }
}

fn main() {
    env_logger::init();
    log::info!("Survival Arena (headless) starting...");

    let opts = parse_args();
    let manual = ManualClock::new(0);
    let clock: Box<dyn Clock> = if opts.realtime {
        Box::new(SystemClock::new())
    } else {
        Box::new(manual.clone())
    };
    let mut game = Game::new(opts.settings, clock)
        .with_audio(AudioManager::new(Some(Box::new(LogAudio))))
        .with_overlay(Box::new(LogOverlay));
    let mut sink = FrameRecorder::default();

    game.start_game();
    let mut held: Vec<&'static str> = Vec::new();
    for _ in 0..opts.frames {
        if opts.realtime {
            std::thread::sleep(Duration::from_millis(FRAME_MS));
        } else {
            manual.advance(FRAME_MS);
        }

        let wanted = autopilot(&game);
        for key in &held {
            if !wanted.contains(key) {
                game.key_up(key);
            }
        }
        for key in &wanted {
            game.key_down(key);
        }
        held = wanted;

        if !game.frame(&mut sink) {
            break;
        }
    }

    let now = game.now_ms();
    let state = game.state();
    let snapshot = Snapshot::capture(state, now, game.settings().show_control_hints);
    match serde_json::to_string_pretty(&snapshot.hud) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize summary: {e}"),
    }
    let outcome = if game.phase() == GamePhase::GameOver {
        "died"
    } else {
        "survived"
    };
    log::info!(
        "{} after {} ticks ({} frames drawn), score {}",
        outcome,
        state.ticks,
        sink.frames,
        state.player.score
    );
}

