//! Decorative particles spawned in bursts on collisions
//!
//! Particles never interact with anything; they drift at constant velocity
//! until their lifetime runs out.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Rgb;
use crate::colors::PARTICLE_PALETTE;
use crate::consts::*;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Radius in pixels
    pub size: u32,
    pub color: Rgb,
    /// Heading (radians)
    pub angle: f32,
    /// Pixels per tick
    pub speed: f32,
    /// Remaining ticks
    pub lifetime: i32,
}

impl Particle {
    /// Spawn a particle at `pos` with randomized size, color, heading and speed
    pub fn spawn<R: Rng + ?Sized>(pos: Vec2, rng: &mut R) -> Self {
        Self {
            pos,
            size: rng.random_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE),
            color: PARTICLE_PALETTE[rng.random_range(0..PARTICLE_PALETTE.len())],
            angle: rng.random_range(0.0..std::f32::consts::TAU),
            speed: rng.random_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED),
            lifetime: PARTICLE_LIFETIME,
        }
    }

    /// Per-tick velocity along the fixed heading
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::from_angle(self.angle) * self.speed
    }

    /// Advance one tick
    pub fn update(&mut self) {
        self.pos += self.velocity();
        self.lifetime -= 1;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }
}
