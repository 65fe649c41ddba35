use rand::Rng;

use crate::{Config, Difficulty, GameRng, MatchState};

/// Steer the AI paddle toward where the ball will cross its plane.
///
/// The prediction is a straight-line extrapolation (bounces ignored) plus a
/// random error whose spread depends on difficulty. The paddle only closes
/// `ai_speed` of the gap each frame and holds still while the ball moves away.
pub fn update_ai_paddle(
    state: &mut MatchState,
    config: &Config,
    difficulty: Difficulty,
    rng: &mut GameRng,
) {
    // Drawn every frame so the RNG advances the same whether or not we track
    let (low, high) = difficulty.error_range();
    let prediction_error: f32 = rng.0.gen_range(low..high);

    if let Some(intercept_y) = predict_intercept_y(state, config) {
        let predicted_y = intercept_y + prediction_error;
        let ai_center = state.ai_paddle_y + config.paddle_height / 2.0;
        let direction = predicted_y - ai_center;
        state.ai_paddle_y += direction * state.ai_speed;
    }

    state.ai_paddle_y = config.clamp_paddle_y(state.ai_paddle_y);
}

/// Noise-free intercept of the ball with the AI paddle plane, if it is heading there
pub fn predict_intercept_y(state: &MatchState, config: &Config) -> Option<f32> {
    let ball = state.ball;
    if ball.vel.x <= 0.0 {
        return None;
    }
    let time_to_reach = (config.field_width - ball.pos.x - config.paddle_width) / ball.vel.x;
    Some(ball.pos.y + ball.vel.y * time_to_reach)
}
