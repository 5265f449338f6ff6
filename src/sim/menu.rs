//! Pause menu state machine
//!
//! Tracks whether play is paused, which list is shown and which entry is
//! highlighted. It only changes its own state; anything that touches the rest
//! of the game comes back as a [`MenuCommand`] for the tick to apply.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Entries of the main pause menu
pub const MAIN_OPTIONS: [&str; 3] = ["Continue", "Restart", "Quit"];

const CONTINUE: usize = 0;
const RESTART: usize = 1;
const QUIT: usize = 2;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuState {
    Playing,
    PausedMain,
    PausedDifficulty,
}

/// Discrete key presses the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// Toggle between play and the pause menu
    Pause,
    Up,
    Down,
    Confirm,
    /// Open or close the difficulty list from the pause menu
    Difficulty,
}

/// Side effects requested by a menu transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Zero both scores and re-serve the ball
    Restart,
    /// Apply a new difficulty profile
    SetDifficulty(Difficulty),
    /// Stop the game loop
    Quit,
}

/// Pause menu with a highlighted entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub state: MenuState,
    pub selected: usize,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            state: MenuState::Playing,
            selected: 0,
        }
    }
}

impl Menu {
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state != MenuState::Playing
    }

    /// Labels of the active list (empty while playing)
    pub fn options(&self) -> Vec<&'static str> {
        match self.state {
            MenuState::Playing => Vec::new(),
            MenuState::PausedMain => MAIN_OPTIONS.to_vec(),
            MenuState::PausedDifficulty => Difficulty::ALL.iter().map(|d| d.as_str()).collect(),
        }
    }

    /// Number of entries in the active list
    pub fn option_count(&self) -> usize {
        match self.state {
            MenuState::Playing => 0,
            MenuState::PausedMain => MAIN_OPTIONS.len(),
            MenuState::PausedDifficulty => Difficulty::ALL.len(),
        }
    }

    /// Handle one key press
    ///
    /// `current` is the active difficulty, used to place the cursor when the
    /// difficulty list opens.
    pub fn handle(&mut self, key: MenuKey, current: Difficulty) -> Option<MenuCommand> {
        match (self.state, key) {
            (MenuState::Playing, MenuKey::Pause) => {
                self.state = MenuState::PausedMain;
                None
            }
            (MenuState::Playing, _) => None,

            (MenuState::PausedMain, MenuKey::Pause) => {
                self.state = MenuState::Playing;
                None
            }
            // The pause key does not leave the difficulty list
            (MenuState::PausedDifficulty, MenuKey::Pause) => None,

            (_, MenuKey::Down) => {
                self.selected = (self.selected + 1) % self.option_count();
                None
            }
            (_, MenuKey::Up) => {
                let count = self.option_count();
                self.selected = (self.selected + count - 1) % count;
                None
            }

            (MenuState::PausedMain, MenuKey::Difficulty) => {
                self.state = MenuState::PausedDifficulty;
                self.selected = current.index();
                None
            }
            (MenuState::PausedDifficulty, MenuKey::Difficulty) => {
                self.state = MenuState::PausedMain;
                self.selected = CONTINUE;
                None
            }

            (MenuState::PausedDifficulty, MenuKey::Confirm) => {
                let level = Difficulty::from_index(self.selected)?;
                // Back to the pause menu rather than straight into play
                self.state = MenuState::PausedMain;
                self.selected = CONTINUE;
                Some(MenuCommand::SetDifficulty(level))
            }
            (MenuState::PausedMain, MenuKey::Confirm) => match self.selected {
                CONTINUE => {
                    self.state = MenuState::Playing;
                    None
                }
                RESTART => Some(MenuCommand::Restart),
                QUIT => Some(MenuCommand::Quit),
                _ => None,
            },
        }
    }
}
