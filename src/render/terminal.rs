//! Terminal render sink
//!
//! Draws the frame onto a ratatui canvas scaled to the playfield. Canvas y
//! grows upward, so every y coordinate is flipped.

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line};

use super::{DrawCmd, RenderSink, visible};
use crate::Rgb;
use crate::colors::BLACK;
use crate::consts::{HEIGHT, WIDTH};
use crate::sim::Rect;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb[0], rgb[1], rgb[2])
}

#[inline]
fn flip(y: f32) -> f64 {
    (HEIGHT - y) as f64
}

/// Render sink backed by any ratatui backend
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> RenderSink for TerminalSink<B> {
    fn present(&mut self, frame: &[DrawCmd]) {
        let shown = visible(frame);
        let background = match shown.first() {
            Some(DrawCmd::Clear(rgb)) => *rgb,
            _ => BLACK,
        };

        let result = self.terminal.draw(|f| {
            let area = f.area();
            // Playfield pixels covered by one terminal column
            let col_px = WIDTH as f64 / area.width.max(1) as f64;
            let canvas = Canvas::default()
                .marker(Marker::Braille)
                .background_color(color(background))
                .x_bounds([0.0, WIDTH as f64])
                .y_bounds([0.0, HEIGHT as f64])
                .paint(|ctx| {
                    for cmd in shown {
                        paint(ctx, cmd, col_px);
                    }
                });
            f.render_widget(canvas, area);
        });

        if let Err(e) = result {
            log::warn!("Render error: {:?}", e);
        }
    }
}

/// Filled rectangle as vertical strokes half a column apart
fn fill_rect(ctx: &mut Context<'_>, rect: &Rect, c: Color, col_px: f64) {
    let step = (col_px / 2.0).max(1.0);
    let mut x = rect.left() as f64;
    while x <= rect.right() as f64 {
        ctx.draw(&Line {
            x1: x,
            y1: flip(rect.top()),
            x2: x,
            y2: flip(rect.bottom()),
            color: c,
        });
        x += step;
    }
}

fn paint(ctx: &mut Context<'_>, cmd: &DrawCmd, col_px: f64) {
    match cmd {
        // Background color already covers it
        DrawCmd::Clear(_) => {}
        DrawCmd::Rect { rect, color: rgb } => fill_rect(ctx, rect, color(*rgb), col_px),
        DrawCmd::Ellipse { rect, color: rgb } => {
            let center = rect.center();
            let radius = rect.size.x.min(rect.size.y) as f64 / 2.0;
            let mut r = radius;
            while r > 0.0 {
                ctx.draw(&Circle {
                    x: center.x as f64,
                    y: flip(center.y),
                    radius: r,
                    color: color(*rgb),
                });
                r -= col_px / 2.0;
            }
        }
        DrawCmd::Circle {
            center,
            radius,
            color: rgb,
        } => ctx.draw(&Circle {
            x: center.x as f64,
            y: flip(center.y),
            radius: *radius as f64,
            color: color(*rgb),
        }),
        DrawCmd::Ring {
            center,
            radius,
            color: rgb,
            ..
        } => ctx.draw(&Circle {
            x: center.x as f64,
            y: flip(center.y),
            radius: *radius as f64,
            color: color(*rgb),
        }),
        DrawCmd::Text {
            text,
            x,
            y,
            color: rgb,
            ..
        } => {
            let half_width = text.chars().count() as f64 * col_px / 2.0;
            ctx.print(
                *x as f64 - half_width,
                flip(*y),
                Span::styled(text.clone(), Style::default().fg(color(*rgb))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::build_draw_list;
    use crate::sim::{GameState, MenuKey, Score, TickInput, tick};
    use ratatui::backend::TestBackend;

    fn screen_text(sink: &TerminalSink<TestBackend>) -> String {
        sink.terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn sink() -> TerminalSink<TestBackend> {
        TerminalSink::new(Terminal::new(TestBackend::new(100, 40)).unwrap())
    }

    #[test]
    fn test_draws_score() {
        let mut state = GameState::new(1);
        state.score = Score {
            player: 12,
            opponent: 7,
        };
        let mut sink = sink();
        sink.present(&build_draw_list(&state));
        assert!(screen_text(&sink).contains("12 : 7"));
    }

    #[test]
    fn test_draws_pause_menu_only() {
        let mut state = GameState::new(1);
        state.score = Score {
            player: 12,
            opponent: 7,
        };
        let input = TickInput {
            menu_keys: vec![MenuKey::Pause],
            ..Default::default()
        };
        tick(&mut state, &input);

        let mut sink = sink();
        sink.present(&build_draw_list(&state));
        let text = screen_text(&sink);
        assert!(text.contains("PAUSED"));
        assert!(text.contains("Continue"));
        assert!(text.contains("Restart"));
        assert!(text.contains("Quit"));
        assert!(!text.contains("12 : 7"));
    }
}
