//! Paddles for the human player and the computer opponent

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Vertical movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// A paddle that slides vertically inside the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Pixels per move
    pub speed: f32,
    /// Lower bound of the paddle's travel is 0, upper bound is this height
    pub field_height: f32,
}

impl Paddle {
    /// Paddle with its left edge at `x`, vertically centered in the playfield
    pub fn new(x: f32) -> Self {
        Self {
            rect: Rect::new(x, HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            field_height: HEIGHT,
        }
    }

    /// Move by one step, unless that step would leave the playfield
    ///
    /// A rejected move leaves the paddle where it is; there is no partial
    /// clamping toward the edge.
    pub fn move_dir(&mut self, dir: Direction) {
        let dy = match dir {
            Direction::Up => -self.speed,
            Direction::Down => self.speed,
        };
        let new_top = self.rect.top() + dy;
        if new_top >= 0.0 && new_top + self.rect.size.y <= self.field_height {
            self.rect.pos.y = new_top;
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}
