//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame time only
//! - Seeded RNG only
//! - Stable iteration order (bricks in storage order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod game;
pub mod level;
pub mod resolve;
pub mod segment;
pub mod state;

pub use collision::{SweepHit, sweep_rect};
pub use game::{Game, Phase, StepInput};
pub use level::generate;
pub use resolve::{FrameInput, resolve_frame};
pub use segment::segment_intersection;
pub use state::{
    BallStatus, CollisionEvent, CollisionKind, Entity, EntityStore, FrameOutcome, INDESTRUCTIBLE,
    WallSide,
};
