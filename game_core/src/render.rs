//! Draws a match onto any 2D surface
//!
//! The core never talks to a real canvas. A front end implements [`Surface`]
//! and hands it to [`draw_everything`] once per frame.

use crate::{Config, MatchState, Params};

/// Fill colours used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    /// CSS colour name, as a canvas `fillStyle` expects
    pub fn as_css(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
        }
    }
}

/// Minimal immediate-mode drawing surface, in field pixel coordinates
pub trait Surface {
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color);
}

/// Paint the field, both paddles, the ball and the scores
pub fn draw_everything(state: &MatchState, config: &Config, surface: &mut impl Surface) {
    surface.clear(0.0, 0.0, config.field_width, config.field_height);

    // Paddles
    surface.fill_rect(
        0.0,
        state.player_paddle_y,
        config.paddle_width,
        config.paddle_height,
        Color::Black,
    );
    surface.fill_rect(
        config.field_width - config.paddle_width,
        state.ai_paddle_y,
        config.paddle_width,
        config.paddle_height,
        Color::Black,
    );

    // Ball
    surface.fill_circle(
        state.ball.pos.x,
        state.ball.pos.y,
        config.ball_radius,
        Color::Red,
    );

    // Scores
    surface.fill_text(
        &format!("Player: {}", state.score.player),
        Params::PLAYER_LABEL_X,
        Params::SCORE_BASELINE_Y,
        Params::SCORE_FONT,
        Color::Black,
    );
    surface.fill_text(
        &format!("AI: {}", state.score.ai),
        config.field_width - Params::AI_LABEL_RIGHT_OFFSET,
        Params::SCORE_BASELINE_Y,
        Params::SCORE_FONT,
        Color::Black,
    );
}

/// A recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: Color,
    },
}

/// Surface that remembers every call, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand back the recorded calls and start over
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Score;
    use glam::Vec2;

    #[test]
    fn test_draw_call_sequence() {
        let config = Config::new();
        let mut state = MatchState::new(&config);
        state.player_paddle_y = 12.0;
        state.ai_paddle_y = 300.0;
        state.ball.pos = Vec2::new(123.0, 45.0);
        state.score = Score { player: 3, ai: 7 };
        let mut surface = RecordingSurface::new();

        draw_everything(&state, &config, &mut surface);

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear {
                    x: 0.0,
                    y: 0.0,
                    width: 800.0,
                    height: 400.0
                },
                DrawCall::Rect {
                    x: 0.0,
                    y: 12.0,
                    width: 10.0,
                    height: 80.0,
                    color: Color::Black
                },
                DrawCall::Rect {
                    x: 790.0,
                    y: 300.0,
                    width: 10.0,
                    height: 80.0,
                    color: Color::Black
                },
                DrawCall::Circle {
                    x: 123.0,
                    y: 45.0,
                    radius: 10.0,
                    color: Color::Red
                },
                DrawCall::Text {
                    text: "Player: 3".to_string(),
                    x: 20.0,
                    y: 30.0,
                    font: "20px Arial".to_string(),
                    color: Color::Black
                },
                DrawCall::Text {
                    text: "AI: 7".to_string(),
                    x: 700.0,
                    y: 30.0,
                    font: "20px Arial".to_string(),
                    color: Color::Black
                },
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = Config::new();
        let state = MatchState::new(&config);
        let before = state.clone();
        let mut surface = RecordingSurface::new();

        draw_everything(&state, &config, &mut surface);
        let first = surface.take();
        draw_everything(&state, &config, &mut surface);
        let second = surface.take();

        assert_eq!(first, second);
        assert_eq!(state, before, "Rendering must not touch state");
    }

    #[test]
    fn test_color_css_names() {
        assert_eq!(Color::Black.as_css(), "black");
        assert_eq!(Color::Red.as_css(), "red");
    }
}
