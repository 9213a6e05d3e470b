//! Game-state driver
//!
//! Owns a level, the ball heading and the rules around the resolver:
//! serving, lives, score and level clear.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{generate, rest_ball_on_paddle};
use super::resolve::{FrameInput, resolve_frame};
use super::state::{CollisionEvent, CollisionKind, EntityStore};
use crate::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball resting on the paddle, waiting for launch input
    Serve,
    /// Active gameplay
    Playing,
    /// Every destructible brick is gone
    Cleared,
    /// Out of lives
    GameOver,
}

/// Player input for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepInput {
    pub frame_time_us: u64,
    /// Paddle control in `[-1, 1]`; values outside are clamped
    pub paddle_control: f32,
    /// Release the ball (ignored unless serving)
    pub launch: bool,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub store: EntityStore,
    /// Ball heading carried between frames
    pub direction: Vec2,
    pub phase: Phase,
    pub lives: u8,
    pub score: u64,
    /// Frames simulated so far
    pub frames: u64,
    tuning: Tuning,
    /// Collisions from the most recent step
    #[serde(skip)]
    events: Vec<CollisionEvent>,
}

impl Game {
    /// Start a game on the level generated from `seed`
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let store = generate(seed, &tuning);
        let phase = if store.bricks_remaining() == 0 {
            Phase::Cleared
        } else {
            Phase::Serve
        };
        Self {
            store,
            direction: Vec2::Y,
            phase,
            lives: tuning.lives,
            score: 0,
            frames: 0,
            tuning,
            events: Vec::new(),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Collisions produced by the last call to `step`, in time order
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    /// Advance the game by one frame
    pub fn step(&mut self, input: &StepInput) {
        self.events.clear();

        // Nothing moves once the game is decided
        if matches!(self.phase, Phase::Cleared | Phase::GameOver) {
            return;
        }
        self.frames += 1;

        if self.phase == Phase::Serve && input.launch {
            self.launch(input.paddle_control);
        }

        let frame = FrameInput {
            frame_time_us: input.frame_time_us,
            ball_speed: self.tuning.ball_speed_for(self.phase),
            paddle_speed: self.tuning.paddle_speed,
            paddle_control: input.paddle_control.clamp(-1.0, 1.0),
        };
        let outcome = resolve_frame(&frame, self.direction, &mut self.store, &mut self.events);
        self.direction = outcome.direction;

        self.score_destroyed_bricks();

        if outcome.exited() {
            self.lose_ball();
        } else if self.store.bricks_remaining() == 0 {
            log::info!("Level cleared after {} frames, score {}", self.frames, self.score);
            self.phase = Phase::Cleared;
        }
    }

    /// Release the ball, angled by the paddle control
    fn launch(&mut self, paddle_control: f32) {
        let english = paddle_control.clamp(-1.0, 1.0) * self.tuning.launch_spread;
        self.direction = Vec2::new(english, 1.0).normalize();
        self.phase = Phase::Playing;
        log::debug!("Ball launched toward {}", self.direction);
    }

    /// Award points once for each brick this frame destroyed
    fn score_destroyed_bricks(&mut self) {
        let mut destroyed: Vec<usize> = self
            .events
            .iter()
            .filter_map(|event| match event.kind {
                CollisionKind::Brick { index } => Some(index),
                _ => None,
            })
            .filter(|&index| !self.store.bricks[index].is_alive())
            .collect();
        destroyed.sort_unstable();
        destroyed.dedup();

        self.score += destroyed.len() as u64 * self.tuning.points_per_brick;
    }

    fn lose_ball(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        log::debug!("Ball lost, {} lives left", self.lives);

        if self.lives == 0 {
            log::info!("Game over, score {}", self.score);
            self.phase = Phase::GameOver;
        } else {
            rest_ball_on_paddle(&mut self.store);
            self.direction = Vec2::Y;
            self.phase = Phase::Serve;
        }
    }
}
