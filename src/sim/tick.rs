//! Fixed timestep simulation tick
//!
//! Core game step that advances simulation deterministically.

use super::ai;
use super::collision::{EdgeExit, bounce_off_paddles, bounce_off_walls, edge_exit};
use super::menu::{MenuCommand, MenuKey};
use super::paddle::Direction;
use super::state::{GameEvent, GameState, Side};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Human paddle up key is held
    pub move_up: bool,
    /// Human paddle down key is held
    pub move_down: bool,
    /// Discrete menu key presses, in arrival order
    pub menu_keys: Vec<MenuKey>,
}

/// What a tick did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Quit was chosen; no further ticks should run
    pub quit: bool,
}

impl TickReport {
    fn merge(&mut self, other: TickReport) {
        self.events.extend(other.events);
        self.quit |= other.quit;
    }

    pub fn count(&self, event: GameEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    // Menu keys first; each is handled exactly once
    for &key in &input.menu_keys {
        let Some(command) = state.menu.handle(key, state.difficulty) else {
            continue;
        };
        match command {
            MenuCommand::Restart => {
                state.restart();
                log::info!("Game restarted");
                report.events.push(GameEvent::Restarted);
            }
            MenuCommand::SetDifficulty(level) => {
                state.set_difficulty(level);
                log::info!("Difficulty set to {}", level.as_str());
                report.events.push(GameEvent::DifficultyChanged(level));
            }
            MenuCommand::Quit => {
                log::info!("Quit selected");
                report.events.push(GameEvent::QuitRequested);
                report.quit = true;
                return report;
            }
        }
    }

    // Don't simulate while a menu is up
    if state.menu.is_paused() {
        return report;
    }

    state.time_ticks += 1;

    if input.move_up {
        state.player.move_dir(Direction::Up);
    }
    if input.move_down {
        state.player.move_dir(Direction::Down);
    }
    ai::drive(&mut state.opponent, &state.ball);

    state.ball.update();

    if bounce_off_paddles(&mut state.ball, [&state.player, &state.opponent], &mut state.rng) {
        report.events.push(GameEvent::PaddleHit);
    }
    if bounce_off_walls(&mut state.ball, HEIGHT, &mut state.rng) {
        report.events.push(GameEvent::WallBounce);
    }

    if let Some(exit) = edge_exit(&state.ball, WIDTH) {
        let side = match exit {
            EdgeExit::Left => Side::Opponent,
            EdgeExit::Right => Side::Player,
        };
        state.point_to(side);
        log::debug!(
            "Point to {:?}: {} : {}",
            side,
            state.score.player,
            state.score.opponent
        );
        report.events.push(GameEvent::Scored(side));
    }

    report
}

/// Anything that can be advanced one tick at a time
///
/// Keeps stepping separate from the frame loop so rendering can run at a
/// different rate without touching physics.
pub trait Simulation {
    fn step(&mut self, input: &TickInput) -> TickReport;
}

impl Simulation for GameState {
    fn step(&mut self, input: &TickInput) -> TickReport {
        tick(self, input)
    }
}

/// Accumulator that runs whole ticks for variable frame times
#[derive(Debug, Clone)]
pub struct FixedStep {
    /// Seconds per tick
    pub dt: f32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_RATE_HZ)
    }
}

impl FixedStep {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            dt: 1.0 / rate_hz as f32,
            accumulator: 0.0,
        }
    }

    /// Run as many ticks as `frame_dt` covers, capped at `MAX_SUBSTEPS`
    ///
    /// Menu keys go to the first tick that runs and are then cleared; if no
    /// tick runs this frame they stay queued in `input`.
    pub fn advance<S: Simulation>(
        &mut self,
        sim: &mut S,
        input: &mut TickInput,
        frame_dt: f32,
    ) -> TickReport {
        // Long stalls are dropped rather than replayed
        self.accumulator += frame_dt.min(self.dt * MAX_SUBSTEPS as f32);

        let mut report = TickReport::default();
        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < MAX_SUBSTEPS {
            report.merge(sim.step(input));
            self.accumulator -= self.dt;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.menu_keys.clear();

            if report.quit {
                break;
            }
        }
        report
    }
}
