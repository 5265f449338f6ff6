//! Advanced Pong - a paddle-and-ball arcade game against a computer opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, particles, AI, menu, tick)
//! - `input`: Key vocabulary and the input source seam
//! - `render`: Draw-list construction and render sinks
//! - `audio`: Sound effect seam and asset validation
//! - `app`: Fixed-rate orchestrator loop
//! - `platform`: Terminal glue for the native binary

pub mod app;
pub mod audio;
pub mod input;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Target tick rate; one simulation tick per rendered frame
    pub const TICK_RATE_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Left edge of the human paddle
    pub const PLAYER_X: f32 = 50.0;
    /// Left edge of the computer paddle (mirrors the player's inset)
    pub const OPPONENT_X: f32 = WIDTH - 70.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Multiplier applied to both velocity components on a paddle hit
    pub const AMPLIFICATION: f32 = 1.1;
    /// Highlight countdown set on a paddle hit (ticks)
    pub const HIT_HIGHLIGHT_TICKS: u32 = 10;
    /// Base radius of the highlight ring; the countdown is added on top
    pub const HIGHLIGHT_RING_RADIUS: f32 = 15.0;
    pub const HIGHLIGHT_RING_WIDTH: f32 = 3.0;

    /// Particle bursts
    pub const PARTICLE_BURST: usize = 20;
    pub const PARTICLE_LIFETIME: i32 = 30;
    pub const PARTICLE_MIN_SIZE: u32 = 2;
    pub const PARTICLE_MAX_SIZE: u32 = 5;
    pub const PARTICLE_MIN_SPEED: f32 = 1.0;
    pub const PARTICLE_MAX_SPEED: f32 = 3.0;
}

/// RGB color used by the simulation palette and the draw list
pub type Rgb = [u8; 3];

pub mod colors {
    use super::Rgb;

    pub const WHITE: Rgb = [255, 255, 255];
    pub const BLACK: Rgb = [0, 0, 0];
    pub const RED: Rgb = [255, 0, 0];
    pub const BLUE: Rgb = [0, 0, 255];
    pub const GREEN: Rgb = [0, 255, 0];

    /// Particle palette
    pub const PARTICLE_PALETTE: [Rgb; 4] = [RED, BLUE, GREEN, WHITE];
}
