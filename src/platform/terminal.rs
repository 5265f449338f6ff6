//! Terminal session, keyboard input and bell audio

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::held::HeldKeyTracker;
use crate::Settings;
use crate::audio::{AudioAssets, AudioSink, SoundEffect};
use crate::input::{InputEvent, InputFrame, InputSource, Key};
use crate::render::TerminalSink;

/// Raw-mode alternate screen, restored on drop
pub struct TerminalSession {
    /// Key release reporting was enabled
    enhanced: bool,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        // From here on, Drop undoes whatever succeeded
        let mut session = Self { enhanced: false };

        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("failed to enter the alternate screen")?;

        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("failed to enable key release reporting")?;
            session.enhanced = true;
        }
        log::info!(
            "Terminal session started (key releases {})",
            if session.enhanced { "reported" } else { "emulated" }
        );
        Ok(session)
    }

    pub fn render_sink(&self) -> Result<TerminalSink<CrosstermBackend<Stdout>>> {
        let terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).context("failed to open terminal")?;
        Ok(TerminalSink::new(terminal))
    }

    pub fn input(&self) -> CrosstermInput {
        CrosstermInput::new(self.enhanced)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.enhanced {
            if let Err(e) = execute!(out, PopKeyboardEnhancementFlags) {
                log::warn!("Failed to disable key release reporting: {e}");
            }
        }
        if let Err(e) = execute!(out, Show, LeaveAlternateScreen) {
            log::warn!("Failed to leave the alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {e}");
        }
    }
}

/// What a terminal key event means for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Discrete event for the menu or the loop
    Event(InputEvent),
    /// Press or auto-repeat of a movement key
    Hold(Key),
    /// Release of a movement key
    Release(Key),
}

/// Translate a crossterm key event
///
/// Auto-repeats of menu keys are dropped so a held key moves the cursor once.
pub fn map_key(event: &KeyEvent) -> Option<KeyAction> {
    if event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return (event.kind == KeyEventKind::Press)
            .then_some(KeyAction::Event(InputEvent::CloseRequested));
    }

    let key = match event.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Key::W,
        KeyCode::Char('s') | KeyCode::Char('S') => Key::S,
        KeyCode::Char('d') | KeyCode::Char('D') => Key::D,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Enter => Key::Enter,
        _ => return None,
    };

    match (key, event.kind) {
        (Key::W | Key::S, KeyEventKind::Release) => Some(KeyAction::Release(key)),
        (Key::W | Key::S, _) => Some(KeyAction::Hold(key)),
        (_, KeyEventKind::Press) => Some(KeyAction::Event(InputEvent::Pressed(key))),
        _ => None,
    }
}

/// Input source reading the crossterm event queue without blocking
#[derive(Debug)]
pub struct CrosstermInput {
    tracker: HeldKeyTracker,
}

impl CrosstermInput {
    pub fn new(release_events: bool) -> Self {
        Self {
            tracker: HeldKeyTracker::new(release_events),
        }
    }

    /// Feed one key event into the frame being built
    fn apply(&mut self, key: &KeyEvent, events: &mut Vec<InputEvent>) {
        match map_key(key) {
            Some(KeyAction::Event(e)) => events.push(e),
            Some(KeyAction::Hold(k)) => self.tracker.press(k),
            Some(KeyAction::Release(k)) => self.tracker.release(k),
            None => {}
        }
    }
}

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> InputFrame {
        let mut events = Vec::new();
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("Input poll failed: {e}");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => self.apply(&key, &mut events),
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Input read failed: {e}");
                    break;
                }
            }
        }
        InputFrame {
            held: self.tracker.sample(),
            events,
        }
    }
}

/// Sound sink for a text terminal: effects ring the bell
///
/// Terminals have no music channel, so the background track is only
/// validated and announced.
pub struct BellAudio<W: Write> {
    out: W,
    sfx_volume: f32,
    music_volume: f32,
    music_name: String,
    /// Bells rung so far
    pub rung: u64,
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W, settings: &Settings, assets: &AudioAssets) -> Self {
        Self {
            out,
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            music_name: assets.music.name.clone(),
            rung: 0,
        }
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play(&mut self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        match effect {
            SoundEffect::PaddleHit => {
                let result = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
                match result {
                    Ok(()) => self.rung += 1,
                    Err(e) => log::warn!("Bell failed: {e}"),
                }
            }
        }
    }

    fn play_music_loop(&mut self) {
        log::info!(
            "Background track {} at volume {:.1} (no music channel on a terminal)",
            self.music_name,
            self.music_volume
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_map_menu_keys() {
        assert_eq!(
            map_key(&key(KeyCode::Esc, KeyEventKind::Press)),
            Some(KeyAction::Event(InputEvent::Pressed(Key::Escape)))
        );
        assert_eq!(
            map_key(&key(KeyCode::Enter, KeyEventKind::Press)),
            Some(KeyAction::Event(InputEvent::Pressed(Key::Enter)))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('D'), KeyEventKind::Press)),
            Some(KeyAction::Event(InputEvent::Pressed(Key::D)))
        );
        // Repeats and releases of menu keys are ignored
        assert_eq!(map_key(&key(KeyCode::Down, KeyEventKind::Repeat)), None);
        assert_eq!(map_key(&key(KeyCode::Down, KeyEventKind::Release)), None);
    }

    #[test]
    fn test_map_movement_keys() {
        assert_eq!(
            map_key(&key(KeyCode::Char('w'), KeyEventKind::Press)),
            Some(KeyAction::Hold(Key::W))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('s'), KeyEventKind::Repeat)),
            Some(KeyAction::Hold(Key::S))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('S'), KeyEventKind::Release)),
            Some(KeyAction::Release(Key::S))
        );
        assert_eq!(map_key(&key(KeyCode::Char('x'), KeyEventKind::Press)), None);
    }

    #[test]
    fn test_ctrl_c_closes() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            map_key(&event),
            Some(KeyAction::Event(InputEvent::CloseRequested))
        );
    }

    #[test]
    fn test_apply_builds_frame() {
        let mut input = CrosstermInput::new(false);
        let mut events = Vec::new();
        input.apply(&key(KeyCode::Char('w'), KeyEventKind::Press), &mut events);
        input.apply(&key(KeyCode::Esc, KeyEventKind::Press), &mut events);
        assert_eq!(events, vec![InputEvent::Pressed(Key::Escape)]);
        assert!(input.tracker.sample().up);
    }

    #[test]
    fn test_bell_rings_on_hit() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let assets = AudioAssets::load(&dir).unwrap();
        let mut audio = BellAudio::new(Vec::new(), &Settings::default(), &assets);
        audio.play_music_loop();
        audio.play(SoundEffect::PaddleHit);
        audio.play(SoundEffect::PaddleHit);
        assert_eq!(audio.out, b"\x07\x07".to_vec());
        assert_eq!(audio.rung, 2);
    }

    #[test]
    fn test_muted_bell_is_silent() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let assets = AudioAssets::load(&dir).unwrap();
        let settings = Settings {
            sfx_volume: 0.0,
            ..Default::default()
        };
        let mut audio = BellAudio::new(Vec::new(), &settings, &assets);
        audio.play(SoundEffect::PaddleHit);
        assert!(audio.out.is_empty());
    }
}
