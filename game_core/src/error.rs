use thiserror::Error;

/// Errors raised while configuring or driving a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("field {width}x{height} cannot hold the paddles and the ball")]
    InvalidField { width: f32, height: f32 },
}
