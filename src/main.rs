//! Advanced Pong entry point
//!
//! Loads assets, opens the terminal and runs the game loop.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use advanced_pong::Settings;
use advanced_pong::app::{ExitReason, FrameClock, run_loop};
use advanced_pong::audio::AudioAssets;
use advanced_pong::platform::{BellAudio, TerminalSession};
use advanced_pong::sim::{FixedStep, GameState};

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Advanced Pong starting...");

    let settings = Settings::default();
    let assets = AudioAssets::load(&settings.assets_dir)?;

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut state = GameState::with_difficulty(seed, settings.difficulty);
    log::info!(
        "Game initialized with seed: {} ({})",
        seed,
        state.difficulty.as_str()
    );

    let reason = {
        let session = TerminalSession::start()?;
        let mut render = session.render_sink()?;
        let mut input = session.input();
        let mut audio = BellAudio::new(io::stdout(), &settings, &assets);
        let mut clock = FrameClock::new(settings.frame_budget());
        let stepper = FixedStep::new(settings.tick_rate_hz.max(1));
        run_loop(
            &mut state,
            &mut input,
            &mut render,
            &mut audio,
            &mut clock,
            stepper,
        )
        // Terminal restored here so the summary lands on the normal screen
    };

    let summary = serde_json::json!({
        "score": state.score,
        "difficulty": state.difficulty,
        "time_ticks": state.time_ticks,
        "seed": state.seed,
    });
    match reason {
        ExitReason::Quit => log::info!("Quit from menu: {summary}"),
        ExitReason::Closed => log::info!("Closed: {summary}"),
    }
    Ok(())
}
