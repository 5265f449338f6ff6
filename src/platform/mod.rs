//! Platform abstraction layer
//!
//! Terminal glue for the native binary:
//! - Raw-mode session setup and teardown
//! - Keyboard events to game input, including held-key emulation
//! - Bell-based sound effects

pub mod held;
pub mod terminal;

pub use held::HeldKeyTracker;
pub use terminal::{BellAudio, CrosstermInput, TerminalSession, map_key};
