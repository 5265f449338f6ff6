//! Runtime settings
//!
//! Built in code at startup; nothing is read from or written to disk.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE_HZ;
use crate::sim::Difficulty;

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Simulation ticks (and frames) per second
    pub tick_rate_hz: u32,
    /// Difficulty applied before the first frame
    pub difficulty: Difficulty,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Directory holding the sound files
    pub assets_dir: PathBuf,

    // === Audio ===
    /// Background track volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            difficulty: Difficulty::default(),
            seed: None,
            assets_dir: PathBuf::from("assets"),

            music_volume: 0.1,
            sfx_volume: 1.0,
        }
    }
}

impl Settings {
    /// Wall-clock budget of one frame
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz.max(1) as f64)
    }
}
