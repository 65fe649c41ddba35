//! Mutable match data shared by every system

use crate::{Ball, Config, Score};

/// Everything that changes while a match runs
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub player_paddle_y: f32, // top offset
    pub ai_paddle_y: f32,     // top offset
    pub ball: Ball,
    pub score: Score,
    pub ai_speed: f32,
    pub is_playing: bool,
}

impl MatchState {
    /// Paddles and ball centred, scores zero, not yet playing
    pub fn new(config: &Config) -> Self {
        Self {
            player_paddle_y: config.centered_paddle_y(),
            ai_paddle_y: config.centered_paddle_y(),
            ball: Ball::new(config.field_center(), config.initial_ball_velocity()),
            score: Score::new(),
            ai_speed: config.ai_speed,
            is_playing: false,
        }
    }
}
