//! Game state and core simulation types
//!
//! Everything a tick mutates lives in one [`GameState`]; there are no globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::difficulty::Difficulty;
use super::menu::Menu;
use super::paddle::Paddle;
use crate::consts::*;

/// Which side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human, left paddle
    Player,
    /// Computer, right paddle
    Opponent,
}

/// Something that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit,
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// A point was scored by this side
    Scored(Side),
    /// Scores were zeroed from the pause menu
    Restarted,
    /// A new difficulty was applied
    DifficultyChanged(Difficulty),
    /// Quit was chosen from the pause menu
    QuitRequested,
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter (advances only while playing)
    pub time_ticks: u64,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub difficulty: Difficulty,
    pub menu: Menu,
    #[serde(skip)]
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game with the default difficulty already applied
    pub fn new(seed: u64) -> Self {
        Self::with_difficulty(seed, Difficulty::default())
    }

    pub fn with_difficulty(seed: u64, difficulty: Difficulty) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let profile = difficulty.profile();
        let ball = Ball::new(profile.ball_base_speed, &mut rng);
        let mut opponent = Paddle::new(OPPONENT_X);
        opponent.speed = profile.ai_paddle_speed;

        Self {
            seed,
            time_ticks: 0,
            player: Paddle::new(PLAYER_X),
            opponent,
            ball,
            score: Score::default(),
            difficulty,
            menu: Menu::default(),
            rng,
        }
    }

    /// Apply a difficulty profile
    ///
    /// The ball keeps its current velocity; the new base speed takes effect
    /// at the next reset.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        let profile = difficulty.profile();
        self.difficulty = difficulty;
        self.opponent.speed = profile.ai_paddle_speed;
        self.ball.base_speed = profile.ball_base_speed;
    }

    /// Zero the scores and re-serve
    pub fn restart(&mut self) {
        self.score.reset();
        self.ball.reset(&mut self.rng);
    }

    /// Award a point and re-serve
    pub fn point_to(&mut self, side: Side) {
        self.score.award(side);
        self.ball.reset(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_applies_default_difficulty() {
        let state = GameState::new(1);
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.opponent.speed, 5.0);
        assert_eq!(state.player.speed, PADDLE_SPEED);
        assert_eq!(state.ball.base_speed, 6.0);
        assert_eq!(state.ball.vel.abs(), Vec2::splat(6.0));
        assert_eq!(state.score, Score::default());
        assert!(!state.menu.is_paused());
    }

    #[test]
    fn test_set_difficulty_not_retroactive() {
        let mut state = GameState::new(2);
        state.ball.vel = Vec2::new(-9.0, 3.0);
        state.set_difficulty(Difficulty::Hard);
        assert_eq!(state.opponent.speed, 7.0);
        assert_eq!(state.ball.vel, Vec2::new(-9.0, 3.0));

        state.point_to(Side::Player);
        assert_eq!(state.ball.vel.abs(), Vec2::splat(8.0));
    }

    #[test]
    fn test_restart_zeroes_scores() {
        let mut state = GameState::new(3);
        state.score = Score {
            player: 4,
            opponent: 9,
        };
        state.ball.vel = Vec2::new(20.0, 20.0);
        state.restart();
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball.vel.abs(), Vec2::splat(6.0));
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(777);
        let b = GameState::new(777);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(5);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["seed"], 5);
        assert_eq!(json["difficulty"], "Medium");
        assert_eq!(json["score"]["player"], 0);
        assert!(json.get("rng").is_none());
    }
}
