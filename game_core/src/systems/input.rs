use crate::{Config, MatchState};

/// Place the player paddle under the pointer.
///
/// `pointer_y` is in page coordinates and `surface_top` is the top of the
/// drawing surface in the same space. The paddle is centred on the pointer and
/// kept inside the field. Each call overwrites the previous one.
pub fn handle_pointer_move(
    state: &mut MatchState,
    config: &Config,
    pointer_y: f32,
    surface_top: f32,
) {
    let y = pointer_y - surface_top - config.paddle_height / 2.0;
    state.player_paddle_y = config.clamp_paddle_y(y);
}
