//! Rendering module
//!
//! The simulation is turned into a flat draw list once per tick; sinks consume
//! the list without ever seeing game state mid-mutation.

pub mod terminal;

use glam::Vec2;

pub use terminal::TerminalSink;

use crate::Rgb;
use crate::colors::*;
use crate::consts::*;
use crate::sim::{GameState, MenuState, Rect};

/// Font sizes for the score and titles, and for menu options
pub const TITLE_FONT: f32 = 74.0;
pub const OPTION_FONT: f32 = 36.0;

/// A single draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole screen, hiding everything drawn before
    Clear(Rgb),
    /// Filled rectangle
    Rect { rect: Rect, color: Rgb },
    /// Filled ellipse inscribed in `rect`
    Ellipse { rect: Rect, color: Rgb },
    /// Filled circle
    Circle { center: Vec2, radius: f32, color: Rgb },
    /// Circle outline `width` pixels wide, inside `radius`
    Ring {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Rgb,
    },
    /// Text horizontally centered on `x`, top edge at `y`
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
    },
}

/// Ordered primitives for one frame
pub type DrawList = Vec<DrawCmd>;

/// Commands still visible after the last `Clear`
pub fn visible(list: &[DrawCmd]) -> &[DrawCmd] {
    match list.iter().rposition(|c| matches!(c, DrawCmd::Clear(_))) {
        Some(i) => &list[i..],
        None => list,
    }
}

/// Consumer of finished frames
pub trait RenderSink {
    fn present(&mut self, frame: &[DrawCmd]);
}

/// Build the draw list for the current state
pub fn build_draw_list(state: &GameState) -> DrawList {
    let mut list = vec![
        DrawCmd::Clear(BLACK),
        DrawCmd::Rect {
            rect: state.player.rect,
            color: WHITE,
        },
        DrawCmd::Rect {
            rect: state.opponent.rect,
            color: WHITE,
        },
    ];

    let ball = &state.ball;
    if ball.hit_highlight > 0 {
        list.push(DrawCmd::Ring {
            center: ball.center(),
            radius: HIGHLIGHT_RING_RADIUS + ball.hit_highlight as f32,
            width: HIGHLIGHT_RING_WIDTH,
            color: RED,
        });
    }
    list.push(DrawCmd::Ellipse {
        rect: ball.rect,
        color: WHITE,
    });
    list.extend(ball.particles.iter().map(|p| DrawCmd::Circle {
        center: p.pos,
        radius: p.size as f32,
        color: p.color,
    }));

    list.push(DrawCmd::Text {
        text: format!("{} : {}", state.score.player, state.score.opponent),
        x: WIDTH / 2.0,
        y: 10.0,
        size: TITLE_FONT,
        color: WHITE,
    });

    if state.menu.is_paused() {
        push_menu(&mut list, state);
    }

    list
}

/// Pause overlay: blank screen, title, options
fn push_menu(list: &mut DrawList, state: &GameState) {
    let title = match state.menu.state {
        MenuState::PausedDifficulty => "Select Difficulty",
        _ => "PAUSED",
    };

    list.push(DrawCmd::Clear(BLACK));
    list.push(DrawCmd::Text {
        text: title.to_string(),
        x: WIDTH / 2.0,
        y: 100.0,
        size: TITLE_FONT,
        color: WHITE,
    });
    for (i, option) in state.menu.options().into_iter().enumerate() {
        let color = if i == state.menu.selected { GREEN } else { WHITE };
        list.push(DrawCmd::Text {
            text: option.to_string(),
            x: WIDTH / 2.0,
            y: 200.0 + i as f32 * 50.0,
            size: OPTION_FONT,
            color,
        });
    }
}
