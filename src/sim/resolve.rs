//! Frame resolution
//!
//! Advances the paddle and ball by exactly one frame. The paddle moves once;
//! the ball then travels its frame budget in substeps, each ending at the
//! earliest surface it strikes, until the budget is spent.

use glam::Vec2;

use super::collision::{SweepHit, sweep_rect};
use super::state::{
    BallStatus, CollisionEvent, CollisionKind, Entity, EntityStore, FrameOutcome, INDESTRUCTIBLE,
    WallSide,
};
use crate::consts::*;

/// Control inputs for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Elapsed time this frame
    pub frame_time_us: u64,
    /// Ball speed in units per second, never negative (0 holds the ball on the paddle)
    pub ball_speed: f32,
    /// Paddle speed in units per second at full control deflection
    pub paddle_speed: f32,
    /// Signed paddle control, typically in `[-1, 1]`
    pub paddle_control: f32,
}

impl FrameInput {
    /// Frame duration in seconds
    #[inline]
    pub fn dt(&self) -> f32 {
        self.frame_time_us as f32 / MICROS_PER_SEC
    }
}

/// Advance the paddle and ball by one frame
///
/// `direction` is the ball heading carried over from the previous frame; the
/// heading to carry into the next frame is returned in the outcome. Every
/// impact is appended to `events` in the order it happened.
///
/// # Panics
///
/// Panics if more consecutive impacts than there are entities (plus a small
/// allowance) consume no travel, which only happens when the caller hands in
/// a degenerate heading.
pub fn resolve_frame(
    input: &FrameInput,
    direction: Vec2,
    store: &mut EntityStore,
    events: &mut Vec<CollisionEvent>,
) -> FrameOutcome {
    debug_assert!(
        input.ball_speed >= 0.0,
        "ball speed must be non-negative, got {}",
        input.ball_speed
    );
    let dt = input.dt();

    move_paddle(store, input.paddle_speed * input.paddle_control * dt);

    // Held ball rides along with the paddle
    if input.ball_speed == 0.0 {
        store.ball.position.x = store.paddle.position.x;
        return FrameOutcome {
            direction,
            ball: BallStatus::InPlay,
        };
    }

    advance_ball(store, direction, input.ball_speed * dt, dt, events)
}

/// Slide the paddle horizontally, stopping short of the ball and the walls
fn move_paddle(store: &mut EntityStore, displacement: f32) {
    if displacement == 0.0 {
        return;
    }

    let paddle = store.paddle;
    let half_width = paddle.half_size().x;
    let left = store.left_edge();
    let right = store.right_edge();

    let heading = Vec2::new(displacement.signum(), 0.0);
    let blocked = sweep_rect(
        paddle.position,
        paddle.scale,
        heading,
        displacement.abs(),
        store.ball.position,
        store.ball.scale,
    );

    let x = match blocked {
        Some(hit) => {
            let contact = paddle.position.x + displacement * hit.t * (1.0 - PADDLE_IMPACT_EPSILON);
            // Keep room for the ball between paddle and the wall ahead so it
            // can't be pinched; never push past the contact point or backwards
            let gap = 2.0 * store.ball.scale.x + half_width;
            if displacement > 0.0 {
                contact.min((right - gap).max(paddle.position.x))
            } else {
                contact.max((left + gap).min(paddle.position.x))
            }
        }
        None => (paddle.position.x + displacement)
            .max(left + half_width)
            .min(right - half_width),
    };

    log::trace!(
        "paddle {:.3} -> {:.3} (blocked: {})",
        paddle.position.x,
        x,
        blocked.is_some()
    );
    store.paddle.position.x = x;
}

/// Move the ball through its travel budget, bouncing off whatever it meets
fn advance_ball(
    store: &mut EntityStore,
    mut direction: Vec2,
    travel: f32,
    dt: f32,
    events: &mut Vec<CollisionEvent>,
) -> FrameOutcome {
    let max_stalled = store.entity_count() + EXTRA_SUBSTEPS;
    let mut remaining = travel;
    let mut substeps = 0;
    // Consecutive impacts that consumed no meaningful travel
    let mut stalled = 0;

    while remaining > MIN_REMAINING_TRAVEL {
        substeps += 1;

        let Some((kind, hit)) = earliest_impact(store, direction, remaining) else {
            // Nothing in the way: finish the frame's travel
            store.ball.position += direction * remaining;
            log::trace!("substep {substeps}: clear, ball at {}", store.ball.position);
            break;
        };

        let time_offset = dt * (travel - remaining + remaining * hit.t) / travel;

        if let CollisionKind::Brick { index } = kind {
            let brick = &mut store.bricks[index];
            if brick.damage() {
                log::debug!("brick {index} destroyed");
            }
        }

        store.ball.position += direction * remaining * (hit.t - BALL_IMPACT_EPSILON);
        events.push(CollisionEvent { kind, time_offset });
        log::debug!("{kind:?} at t={:.4} ({time_offset:.6}s into frame)", hit.t);

        if kind == CollisionKind::Wall(WallSide::Bottom) {
            return FrameOutcome {
                direction,
                ball: BallStatus::Exited,
            };
        }

        let consumed = remaining * hit.t;
        if consumed < MIN_REMAINING_TRAVEL {
            stalled += 1;
            if stalled > max_stalled {
                log::error!(
                    "ball stalled for {stalled} substeps with {remaining} of {travel} travel left (direction {direction})"
                );
                panic!("ball substep limit exceeded: heading {direction} makes no progress");
            }
        } else {
            stalled = 0;
        }

        direction = hit.direction;
        remaining -= consumed;
        log::trace!(
            "substep {substeps}: ball at {}, {remaining} travel left",
            store.ball.position
        );
    }

    FrameOutcome {
        direction,
        ball: BallStatus::InPlay,
    }
}

/// Zero-height strip spanning both walls at height `y`
fn boundary(store: &EntityStore, y: f32) -> Entity {
    let left = store.left_wall.left();
    let right = store.right_wall.right();
    Entity::new(
        Vec2::new((left + right) * 0.5, y),
        Vec2::new(right - left, 0.0),
        INDESTRUCTIBLE,
    )
}

/// Earliest surface the ball strikes travelling `distance` along `direction`
///
/// Surfaces are checked bottom, left wall, right wall, top, paddle, then live
/// bricks in storage order; on equal `t` the first one checked wins.
fn earliest_impact(
    store: &EntityStore,
    direction: Vec2,
    distance: f32,
) -> Option<(CollisionKind, SweepHit)> {
    let ball = &store.ball;

    let fixed = [
        (
            CollisionKind::Wall(WallSide::Bottom),
            boundary(store, store.bottom_edge()),
        ),
        (CollisionKind::Wall(WallSide::Left), store.left_wall),
        (CollisionKind::Wall(WallSide::Right), store.right_wall),
        (
            CollisionKind::Wall(WallSide::Top),
            boundary(store, store.top_edge()),
        ),
        (CollisionKind::Paddle, store.paddle),
    ];
    let bricks = store
        .bricks
        .iter()
        .enumerate()
        .filter(|(_, brick)| brick.is_alive())
        .map(|(index, brick)| (CollisionKind::Brick { index }, *brick));

    let mut best: Option<(CollisionKind, SweepHit)> = None;
    for (kind, surface) in fixed.into_iter().chain(bricks) {
        let Some(hit) = sweep_rect(
            ball.position,
            ball.scale,
            direction,
            distance,
            surface.position,
            surface.scale,
        ) else {
            continue;
        };
        if best.is_none_or(|(_, current)| hit.t < current.t) {
            best = Some((kind, hit));
        }
    }

    best
}
