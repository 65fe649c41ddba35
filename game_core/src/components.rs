use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use rand::Rng;

use crate::{Config, GameError, GameRng};

/// The pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // centre
    pub vel: Vec2, // pixels per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to centre, flipping each velocity axis with even odds
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.field_center();

        let sign_x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sign_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(config.ball_speed_x * sign_x, config.ball_speed_y * sign_y);
    }

    pub fn left(&self, radius: f32) -> f32 {
        self.pos.x - radius
    }

    pub fn right(&self, radius: f32) -> f32 {
        self.pos.x + radius
    }
}

/// AI skill level, as offered by the difficulty selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Half-open range the prediction error is drawn from
    pub fn error_range(self) -> (f32, f32) {
        match self {
            Difficulty::Easy => (-40.0, 40.0),
            Difficulty::Medium => (-20.0, 20.0),
            Difficulty::Hard => (-10.0, 10.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
