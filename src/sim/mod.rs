//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - No rendering, audio or terminal dependencies

pub mod ai;
pub mod ball;
pub mod collision;
pub mod difficulty;
pub mod menu;
pub mod paddle;
pub mod particle;
pub mod rect;
pub mod state;
pub mod tick;

pub use ai::{AiCommand, decide};
pub use ball::Ball;
pub use collision::{EdgeExit, bounce_off_paddles, bounce_off_walls, edge_exit};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use menu::{Menu, MenuCommand, MenuKey, MenuState};
pub use paddle::{Direction, Paddle};
pub use particle::Particle;
pub use rect::Rect;
pub use state::{GameEvent, GameState, Score, Side};
pub use tick::{FixedStep, Simulation, TickInput, TickReport, tick};
