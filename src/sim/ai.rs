//! Computer opponent
//!
//! A stateless tracker: every tick the opponent paddle steps toward the
//! ball's current height. Difficulty only changes how far each step goes.

use super::ball::Ball;
use super::paddle::{Direction, Paddle};

/// Movement decision for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiCommand {
    Move(Direction),
    Hold,
}

/// Decide which way the paddle should move to follow the ball
pub fn decide(paddle: &Paddle, ball: &Ball) -> AiCommand {
    let paddle_y = paddle.center().y;
    let ball_y = ball.center().y;

    // Screen y grows downward: a smaller y is higher up
    if paddle_y < ball_y {
        AiCommand::Move(Direction::Down)
    } else if paddle_y > ball_y {
        AiCommand::Move(Direction::Up)
    } else {
        AiCommand::Hold
    }
}

/// Apply the decision to the paddle
pub fn drive(paddle: &mut Paddle, ball: &Ball) {
    if let AiCommand::Move(dir) = decide(paddle, ball) {
        paddle.move_dir(dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ball_at_center_y(y: f32) -> Ball {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut ball = Ball::new(5.0, &mut rng);
        ball.rect.pos.y = y - BALL_SIZE / 2.0;
        ball
    }

    #[test]
    fn test_moves_down_toward_lower_ball() {
        let paddle = Paddle::new(OPPONENT_X);
        let ball = ball_at_center_y(450.0);
        assert_eq!(decide(&paddle, &ball), AiCommand::Move(Direction::Down));
    }

    #[test]
    fn test_moves_up_toward_higher_ball() {
        let paddle = Paddle::new(OPPONENT_X);
        let ball = ball_at_center_y(120.0);
        assert_eq!(decide(&paddle, &ball), AiCommand::Move(Direction::Up));
    }

    #[test]
    fn test_holds_when_level() {
        let paddle = Paddle::new(OPPONENT_X);
        let ball = ball_at_center_y(paddle.center().y);
        assert_eq!(decide(&paddle, &ball), AiCommand::Hold);
    }

    #[test]
    fn test_drive_uses_paddle_speed() {
        let mut paddle = Paddle::new(OPPONENT_X);
        paddle.speed = 3.0;
        let ball = ball_at_center_y(500.0);
        drive(&mut paddle, &ball);
        assert_eq!(paddle.rect.pos, Vec2::new(OPPONENT_X, 253.0));
    }

    #[test]
    fn test_tracks_until_level() {
        let mut paddle = Paddle::new(OPPONENT_X);
        let ball = ball_at_center_y(400.0);
        for _ in 0..100 {
            drive(&mut paddle, &ball);
        }
        assert_eq!(paddle.center().y, 400.0);
    }
}
