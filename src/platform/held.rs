//! Held-key emulation
//!
//! Most terminals only report presses (plus auto-repeat), never releases.
//! A press marks the key held for a timeout that auto-repeat keeps
//! refreshing; terminals that do report releases end the hold right away.

use crate::input::{HeldKeys, Key};

/// Frames a press stays held without a repeat; covers the usual repeat delay
pub const HOLD_FRAMES: u32 = 30;

#[derive(Debug, Clone, Default)]
pub struct HeldKeyTracker {
    up_frames: u32,
    down_frames: u32,
    /// Releases are reported, so holds never time out
    release_events: bool,
}

impl HeldKeyTracker {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            ..Default::default()
        }
    }

    fn hold_for(&self) -> u32 {
        if self.release_events { u32::MAX } else { HOLD_FRAMES }
    }

    /// Press or auto-repeat of a movement key
    ///
    /// With reported releases W and S are held independently, so holding both
    /// cancels out in the tick. Without them only the latest key's repeats
    /// arrive, and it replaces the opposite hold.
    pub fn press(&mut self, key: Key) {
        let frames = self.hold_for();
        let emulated = !self.release_events;
        match key {
            Key::W => {
                self.up_frames = frames;
                if emulated {
                    self.down_frames = 0;
                }
            }
            Key::S => {
                self.down_frames = frames;
                if emulated {
                    self.up_frames = 0;
                }
            }
            _ => {}
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::W => self.up_frames = 0,
            Key::S => self.down_frames = 0,
            _ => {}
        }
    }

    /// Current holds; call once per frame, after feeding the frame's events
    pub fn sample(&mut self) -> HeldKeys {
        let held = HeldKeys {
            up: self.up_frames > 0,
            down: self.down_frames > 0,
        };
        self.up_frames = self.up_frames.saturating_sub(1);
        self.down_frames = self.down_frames.saturating_sub(1);
        held
    }
}
