//! Input vocabulary and the input source seam
//!
//! A source reports two things per frame: which movement keys are held, and a
//! queue of discrete presses (menu keys and the close signal).

use crate::sim::{MenuKey, TickInput};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// W: paddle up while held
    W,
    /// S: paddle down while held
    S,
    Escape,
    ArrowUp,
    ArrowDown,
    Enter,
    /// D: open the difficulty list from the pause menu
    D,
}

impl Key {
    /// Menu meaning of a discrete press, if any
    pub fn menu_key(self) -> Option<MenuKey> {
        match self {
            Key::Escape => Some(MenuKey::Pause),
            Key::ArrowUp => Some(MenuKey::Up),
            Key::ArrowDown => Some(MenuKey::Down),
            Key::Enter => Some(MenuKey::Confirm),
            Key::D => Some(MenuKey::Difficulty),
            Key::W | Key::S => None,
        }
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Key),
    /// Window or terminal close request
    CloseRequested,
}

/// Movement keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

/// Everything read from the input source for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    pub held: HeldKeys,
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn close_requested(&self) -> bool {
        self.events.contains(&InputEvent::CloseRequested)
    }

    /// Translate into simulation input
    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            move_up: self.held.up,
            move_down: self.held.down,
            menu_keys: self
                .events
                .iter()
                .filter_map(|e| match e {
                    InputEvent::Pressed(key) => key.menu_key(),
                    InputEvent::CloseRequested => None,
                })
                .collect(),
        }
    }
}

/// Per-frame source of held keys and discrete events
pub trait InputSource {
    /// Drain everything that arrived since the last poll
    fn poll(&mut self) -> InputFrame;
}
