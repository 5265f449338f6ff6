//! The ball, its particle bursts and its hit highlight

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::particle::Particle;
use super::rect::Rect;
use crate::consts::*;

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick; components may be negative
    pub vel: Vec2,
    /// Speed of each velocity component after `reset`
    ///
    /// This is per axis, not the magnitude: a serve at base speed 6 moves
    /// at (±6, ±6), so its overall speed is `6 * sqrt(2)`.
    pub base_speed: f32,
    /// Particles owned by this ball
    pub particles: Vec<Particle>,
    /// Ticks left on the post-hit highlight ring
    pub hit_highlight: u32,
}

impl Ball {
    /// Create a ball at the center of the playfield, already launched
    pub fn new<R: Rng + ?Sized>(base_speed: f32, rng: &mut R) -> Self {
        let mut ball = Self {
            rect: Rect::centered(Vec2::new(WIDTH / 2.0, HEIGHT / 2.0), Vec2::splat(BALL_SIZE)),
            vel: Vec2::ZERO,
            base_speed,
            particles: Vec::new(),
            hit_highlight: 0,
        };
        ball.reset(rng);
        ball
    }

    /// Re-center and launch diagonally at base speed
    ///
    /// Each velocity sign is picked independently, so the four diagonals are
    /// equally likely. Any speed gained during the previous rally is discarded.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rect = Rect::centered(Vec2::new(WIDTH / 2.0, HEIGHT / 2.0), Vec2::splat(BALL_SIZE));
        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx, sy) * self.base_speed;
    }

    /// Advance one tick: move, tick the highlight down, age particles
    ///
    /// Particles are aged before pruning, so one is dropped on the same tick
    /// its lifetime reaches zero.
    pub fn update(&mut self) {
        self.rect.pos += self.vel;
        self.hit_highlight = self.hit_highlight.saturating_sub(1);

        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    /// Spawn a burst of particles at the ball's center
    pub fn create_particles<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let center = self.rect.center();
        self.particles
            .extend((0..PARTICLE_BURST).map(|_| Particle::spawn(center, rng)));
    }

    /// Start the highlight ring
    pub fn flash(&mut self) {
        self.hit_highlight = HIT_HIGHLIGHT_TICKS;
    }

    /// Velocity magnitude
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}
