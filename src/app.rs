//! Orchestrator loop
//!
//! One frame: poll input, run the ticks the elapsed time covers, render, pace.
//! At a steady frame rate equal to the tick rate that is one tick per frame.
//! The loop ends on a Quit menu selection or a close request.

use std::thread;
use std::time::{Duration, Instant};

use crate::audio::{AudioSink, SoundEffect};
use crate::input::InputSource;
use crate::render::{RenderSink, build_draw_list};
use crate::sim::{FixedStep, GameState, TickInput};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Quit chosen from the pause menu
    Quit,
    /// Window or terminal close request
    Closed,
}

/// Frame pacing
pub trait Clock {
    /// Called at the end of every frame; returns seconds since the previous call
    fn end_frame(&mut self) -> f32;
}

/// Sleeps out the rest of each frame's budget
///
/// An overrun frame is not made up for; the next frame simply starts late.
#[derive(Debug)]
pub struct FrameClock {
    budget: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }
}

impl Clock for FrameClock {
    fn end_frame(&mut self) -> f32 {
        let elapsed = self.frame_start.elapsed();
        if let Some(remaining) = self.budget.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
        let now = Instant::now();
        let frame_dt = now.duration_since(self.frame_start).as_secs_f32();
        self.frame_start = now;
        frame_dt
    }
}

/// Run frames until quit or close
///
/// Menu presses that arrive on a frame too short for a tick are kept for the
/// next tick that runs.
pub fn run_loop<I, R, A, C>(
    state: &mut GameState,
    input: &mut I,
    render: &mut R,
    audio: &mut A,
    clock: &mut C,
    mut stepper: FixedStep,
) -> ExitReason
where
    I: InputSource,
    R: RenderSink,
    A: AudioSink,
    C: Clock,
{
    audio.play_music_loop();
    render.present(&build_draw_list(state));

    let mut tick_input = TickInput::default();
    let mut frame_dt = stepper.dt;
    loop {
        let frame = input.poll();
        if frame.close_requested() {
            log::info!("Close requested");
            return ExitReason::Closed;
        }

        let fresh = frame.to_tick_input();
        tick_input.move_up = fresh.move_up;
        tick_input.move_down = fresh.move_down;
        tick_input.menu_keys.extend(fresh.menu_keys);

        let report = stepper.advance(state, &mut tick_input, frame_dt);
        for effect in report.events.iter().filter_map(SoundEffect::for_event) {
            audio.play(effect);
        }
        if report.quit {
            return ExitReason::Quit;
        }

        render.present(&build_draw_list(state));
        frame_dt = clock.end_frame();
    }
}
