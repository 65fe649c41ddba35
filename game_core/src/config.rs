use glam::Vec2;

use crate::{GameError, Params};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub ai_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_x: Params::INITIAL_BALL_SPEED_X,
            ball_speed_y: Params::INITIAL_BALL_SPEED_Y,
            ai_speed: Params::AI_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config sized to a drawing surface. The field is fixed once the match exists.
    pub fn for_field(width: f32, height: f32) -> Result<Self, GameError> {
        let config = Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        };

        let fits = width.is_finite()
            && height.is_finite()
            && height >= config.paddle_height
            && height >= config.ball_radius * 2.0
            && width > (config.paddle_width + config.ball_radius) * 2.0;
        if !fits {
            return Err(GameError::InvalidField { width, height });
        }

        Ok(config)
    }

    /// Largest legal paddle top offset
    pub fn max_paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Clamp a paddle top offset to the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.min(self.max_paddle_y()).max(0.0)
    }

    pub fn centered_paddle_y(&self) -> f32 {
        self.max_paddle_y() / 2.0
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Ball velocity a freshly created match starts with
    pub fn initial_ball_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed_x, self.ball_speed_y)
    }
}
