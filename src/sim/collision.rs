//! Collision response for the ball against paddles, walls and goal edges
//!
//! Paddle hits reverse and amplify the ball, so every rally speeds up until
//! someone scores. Wall bounces only mirror the vertical component.

use rand::Rng;

use super::ball::Ball;
use super::paddle::Paddle;
use crate::consts::AMPLIFICATION;

/// Which goal edge the ball crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeExit {
    /// Crossed the left edge; the opponent scores
    Left,
    /// Crossed the right edge; the player scores
    Right,
}

/// Bounce off whichever paddle the ball overlaps
///
/// Both paddles are tested as a single condition: a ball overlapping both in
/// the same tick gets one amplification step, not two. Returns true on a hit.
pub fn bounce_off_paddles<R: Rng + ?Sized>(
    ball: &mut Ball,
    paddles: [&Paddle; 2],
    rng: &mut R,
) -> bool {
    if !paddles.iter().any(|p| ball.rect.intersects(&p.rect)) {
        return false;
    }

    ball.vel.x *= -AMPLIFICATION;
    ball.vel.y *= AMPLIFICATION;
    ball.create_particles(rng);
    ball.flash();
    true
}

/// Bounce off the top or bottom edge if touching or past it
///
/// Returns true on a bounce.
pub fn bounce_off_walls<R: Rng + ?Sized>(ball: &mut Ball, field_height: f32, rng: &mut R) -> bool {
    if ball.rect.top() > 0.0 && ball.rect.bottom() < field_height {
        return false;
    }

    ball.vel.y = -ball.vel.y;
    ball.create_particles(rng);
    true
}

/// Check whether the ball has reached a goal edge
pub fn edge_exit(ball: &Ball, field_width: f32) -> Option<EdgeExit> {
    if ball.rect.left() <= 0.0 {
        Some(EdgeExit::Left)
    } else if ball.rect.right() >= field_width {
        Some(EdgeExit::Right)
    } else {
        None
    }
}
