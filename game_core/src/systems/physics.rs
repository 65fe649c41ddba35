use crate::{Config, Events, GameRng, MatchState};

/// Advance the ball one frame: move, bounce, hit paddles, score.
///
/// Order matters. The ball moves first, then the checks run against the new
/// position. Wall bounces only flip the vertical velocity and never push the
/// ball back inside, so it can overlap a wall for a frame.
pub fn update_ball(
    state: &mut MatchState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let r = config.ball_radius;

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Top/bottom walls
    if ball.pos.y + r > config.field_height || ball.pos.y - r < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }

    // Paddles test the ball centre against the paddle span, not the full circle
    if ball.left(r) < config.paddle_width
        && spans(state.player_paddle_y, config.paddle_height, ball.pos.y)
    {
        ball.vel.x = ball.vel.x.abs();
        events.ball_hit_paddle = true;
    }

    if ball.right(r) > config.field_width - config.paddle_width
        && spans(state.ai_paddle_y, config.paddle_height, ball.pos.y)
    {
        ball.vel.x = -ball.vel.x.abs();
        events.ball_hit_paddle = true;
    }

    check_scoring(state, config, rng, events);
}

/// Award a point when the ball leaves through either side, then re-serve
pub fn check_scoring(
    state: &mut MatchState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let r = config.ball_radius;

    if state.ball.left(r) < 0.0 {
        state.score.increment_ai();
        events.ai_scored = true;
        state.ball.reset(config, rng);
    }

    if state.ball.right(r) > config.field_width {
        state.score.increment_player();
        events.player_scored = true;
        state.ball.reset(config, rng);
    }
}

/// Strictly inside `[top, top + height]`
fn spans(top: f32, height: f32, y: f32) -> bool {
    y > top && y < top + height
}
