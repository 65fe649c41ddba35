pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Run one frame of the Pong simulation (no drawing)
pub fn step(
    state: &mut MatchState,
    config: &Config,
    difficulty: Difficulty,
    rng: &mut GameRng,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball, resolve walls and paddles, score
    update_ball(state, config, rng, events);

    // 2. Track the ball with the AI paddle
    update_ai_paddle(state, config, difficulty, rng);
}
