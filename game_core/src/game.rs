//! Frame loop driver
//!
//! Owns the match and runs Physics, AI and Renderer in that order each frame.
//! A scheduler (browser animation frames, or [`Game::run_frames`]) keeps
//! calling [`Game::tick`] until it answers `Break`.

use std::ops::ControlFlow;

use crate::render::{draw_everything, Surface};
use crate::systems::handle_pointer_move;
use crate::{step, Config, Difficulty, Events, GameRng, MatchState};

/// Loop driver states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// A single-screen match against the AI
pub struct Game {
    pub state: MatchState,
    pub config: Config,
    pub rng: GameRng,
    pub events: Events,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            state: MatchState::new(&config),
            config,
            rng: GameRng::new(seed),
            events: Events::new(),
        }
    }

    pub fn loop_state(&self) -> LoopState {
        if self.state.is_playing {
            LoopState::Running
        } else {
            LoopState::Idle
        }
    }

    /// Start (or restart) a match: zero the scores, serve, and mark it running
    pub fn start(&mut self) {
        let from = self.loop_state();

        self.state.score.player = 0;
        self.state.score.ai = 0;
        self.state.ball.reset(&self.config, &mut self.rng);
        self.state.is_playing = true;

        log::info!(
            "match started ({:?} -> {:?}), serve velocity {:?}",
            from,
            self.loop_state(),
            self.state.ball.vel
        );
    }

    /// Run one frame. `Break` means the scheduler must not ask again.
    pub fn tick(&mut self, difficulty: Difficulty, surface: &mut impl Surface) -> ControlFlow<()> {
        if !self.state.is_playing {
            return ControlFlow::Break(());
        }

        step(
            &mut self.state,
            &self.config,
            difficulty,
            &mut self.rng,
            &mut self.events,
        );
        self.log_events();

        draw_everything(&self.state, &self.config, surface);

        ControlFlow::Continue(())
    }

    /// Headless scheduler: tick until stopped or `max_frames` ran. Returns frames run.
    pub fn run_frames(
        &mut self,
        max_frames: usize,
        difficulty: Difficulty,
        surface: &mut impl Surface,
    ) -> usize {
        let mut frames = 0;
        while frames < max_frames {
            if self.tick(difficulty, surface).is_break() {
                break;
            }
            frames += 1;
        }
        frames
    }

    /// Pointer moved over the surface; safe to call between any two frames
    pub fn pointer_moved(&mut self, pointer_y: f32, surface_top: f32) {
        handle_pointer_move(&mut self.state, &self.config, pointer_y, surface_top);
    }

    /// Draw the current state without advancing it
    pub fn render(&self, surface: &mut impl Surface) {
        draw_everything(&self.state, &self.config, surface);
    }

    fn log_events(&self) {
        let score = self.state.score;
        if self.events.player_scored {
            log::info!("player scored: {} - {}", score.player, score.ai);
        }
        if self.events.ai_scored {
            log::info!("AI scored: {} - {}", score.player, score.ai);
        }
        if self.events.ball_hit_paddle {
            log::trace!("ball hit paddle at {:?}", self.state.ball.pos);
        }
        if self.events.ball_hit_wall {
            log::trace!("ball hit wall at {:?}", self.state.ball.pos);
        }
    }
}
