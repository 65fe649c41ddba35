/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;

    // Ball (pixels per frame, no acceleration)
    pub const BALL_RADIUS: f32 = 10.0;
    pub const INITIAL_BALL_SPEED_X: f32 = 4.0;
    pub const INITIAL_BALL_SPEED_Y: f32 = 4.0;

    // AI
    pub const AI_SPEED: f32 = 0.08; // fraction of the remaining distance closed per frame

    // Score labels
    pub const SCORE_FONT: &'static str = "20px Arial";
    pub const SCORE_BASELINE_Y: f32 = 30.0;
    pub const PLAYER_LABEL_X: f32 = 20.0;
    pub const AI_LABEL_RIGHT_OFFSET: f32 = 100.0;
}
