//! Brick Sweep - collision and motion kernel for a paddle-and-ball brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (swept collisions, frame resolution, game state)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
///
/// World units, +y up. The play field spans x in `[-ARENA_HALF_WIDTH, ARENA_HALF_WIDTH]`
/// and y in `[0, ARENA_HEIGHT]`.
pub mod consts {
    /// Arena dimensions
    pub const ARENA_HALF_WIDTH: f32 = 200.0;
    pub const ARENA_HEIGHT: f32 = 300.0;
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 48.0;
    pub const PADDLE_HEIGHT: f32 = 8.0;
    pub const PADDLE_Y: f32 = 24.0;
    pub const PADDLE_SPEED: f32 = 420.0;

    /// Ball defaults (bounding square)
    pub const BALL_SIZE: f32 = 8.0;
    pub const BALL_SPEED: f32 = 260.0;
    /// Clearance between a resting ball and the paddle's top edge
    pub const BALL_REST_GAP: f32 = 1.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 36.0;
    pub const BRICK_HEIGHT: f32 = 12.0;
    pub const BRICK_SPACING: f32 = 4.0;
    /// Y of the top brick row's center
    pub const BRICK_TOP_Y: f32 = 260.0;

    /// Fraction subtracted from a ball impact `t` so it stops short of the surface
    pub const BALL_IMPACT_EPSILON: f32 = 0.0001;
    /// Fraction of the paddle's blocked travel held back when it runs into the ball
    pub const PADDLE_IMPACT_EPSILON: f32 = 0.001;
    /// Remaining ball travel below which the substep loop stops
    pub const MIN_REMAINING_TRAVEL: f32 = 1.0e-5;
    /// Stalled ball substeps allowed beyond one per entity
    pub const EXTRA_SUBSTEPS: usize = 4;

    /// Microseconds per second
    pub const MICROS_PER_SEC: f32 = 1_000_000.0;
}
