//! Swept collision detection and response for axis-aligned rectangles
//!
//! The tricky part of a brick breaker: a fast ball must never tunnel through a
//! thin brick, so every test considers the full path of a step rather than
//! its endpoints. The moving rectangle is shrunk to a point by growing the
//! static rectangle by the mover's half-size (Minkowski sum); the point's
//! path is then intersected with the four edges of the grown rectangle.

use glam::Vec2;

use super::segment::segment_intersection;

/// Earliest impact found by a swept test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Fraction of the step's travel at which contact happens, in `[0, 1]`
    pub t: f32,
    /// Direction after the axis-aligned elastic reflection
    pub direction: Vec2,
}

/// Which component of a direction an edge reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Flip one component of a direction
#[inline]
fn reflect(direction: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::X => Vec2::new(-direction.x, direction.y),
        Axis::Y => Vec2::new(direction.x, -direction.y),
    }
}

/// Sweep a moving rectangle against a static one
///
/// `mover_center`/`mover_size` describe the moving rectangle (full width and
/// height), which travels `direction * distance` this step. Returns the
/// earliest edge crossing of the grown static rectangle and the reflected
/// direction, or `None` when the path stays clear.
///
/// Edges are tested top, right, bottom, left; on equal `t` the first wins.
/// An edge only counts when the path enters through it, so a mover that
/// starts inside the static rectangle passes out without bouncing.
pub fn sweep_rect(
    mover_center: Vec2,
    mover_size: Vec2,
    direction: Vec2,
    distance: f32,
    static_center: Vec2,
    static_size: Vec2,
) -> Option<SweepHit> {
    let travel = direction * distance;
    let half = (static_size + mover_size) * 0.5;
    let min = static_center - half;
    let max = static_center + half;
    let width = max.x - min.x;
    let height = max.y - min.y;

    // (edge start, edge vector, outward normal, reflected axis)
    let edges = [
        (Vec2::new(min.x, max.y), Vec2::new(width, 0.0), Vec2::Y, Axis::Y),
        (Vec2::new(max.x, max.y), Vec2::new(0.0, -height), Vec2::X, Axis::X),
        (Vec2::new(max.x, min.y), Vec2::new(-width, 0.0), Vec2::NEG_Y, Axis::Y),
        (Vec2::new(min.x, min.y), Vec2::new(0.0, height), Vec2::NEG_X, Axis::X),
    ];

    let mut best: Option<SweepHit> = None;
    for (start, edge, normal, axis) in edges {
        // Leaving through an edge is not an impact
        if travel.dot(normal) >= 0.0 {
            continue;
        }
        let Some(t) = segment_intersection(mover_center, travel, start, edge) else {
            continue;
        };
        if best.is_none_or(|hit| t < hit.t) {
            best = Some(SweepHit {
                t,
                direction: reflect(direction, axis),
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const BALL: Vec2 = Vec2::new(8.0, 8.0);
    const BRICK: Vec2 = Vec2::new(20.0, 10.0);

    #[test]
    fn test_sweep_hits_left_face() {
        // Ball right edge at 4, brick left edge at 20
        let hit = sweep_rect(
            Vec2::ZERO,
            BALL,
            Vec2::X,
            32.0,
            Vec2::new(30.0, 0.0),
            BRICK,
        )
        .expect("ball should reach the brick");
        assert!((hit.t - 0.5).abs() < 1.0e-6);
        assert_eq!(hit.direction, Vec2::NEG_X);
    }

    #[test]
    fn test_sweep_hits_top_face() {
        let direction = Vec2::new(0.6, -0.8);
        let hit = sweep_rect(
            Vec2::new(0.0, 20.0),
            BALL,
            direction,
            20.0,
            Vec2::ZERO,
            BRICK,
        )
        .expect("ball should land on the brick");
        // Grown top edge at y = 9, ball starts at 20: 11 / 16 of the travel
        assert!((hit.t - 11.0 / 16.0).abs() < 1.0e-6);
        assert_eq!(hit.direction, Vec2::new(0.6, 0.8));
    }

    #[test]
    fn test_sweep_miss_short() {
        let hit = sweep_rect(
            Vec2::ZERO,
            BALL,
            Vec2::X,
            10.0,
            Vec2::new(30.0, 0.0),
            BRICK,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_sweep_miss_passes_beside() {
        // Ball travels horizontally well above the brick
        let hit = sweep_rect(
            Vec2::new(0.0, 30.0),
            BALL,
            Vec2::X,
            100.0,
            Vec2::new(30.0, 0.0),
            BRICK,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_sweep_corner_prefers_top_on_tie() {
        // Diagonal path through the grown rectangle's top-left corner, both edges at t = 0.5
        let static_center = Vec2::ZERO;
        let corner = Vec2::new(-14.0, 9.0);
        let start = corner + Vec2::new(-5.0, 5.0);
        let hit = sweep_rect(
            start,
            BALL,
            Vec2::new(1.0, -1.0),
            10.0,
            static_center,
            BRICK,
        )
        .expect("corner contact is an impact");
        assert!(hit.direction.y > 0.0, "top edge is evaluated first");
        assert!(hit.direction.x > 0.0);
    }

    #[test]
    fn test_sweep_ignores_exit_edges() {
        // Starting inside the grown rectangle and moving out
        let hit = sweep_rect(
            Vec2::new(2.0, 0.0),
            BALL,
            Vec2::X,
            50.0,
            Vec2::ZERO,
            BRICK,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_zero_direction_never_hits() {
        let hit = sweep_rect(
            Vec2::new(-13.0, 0.0),
            BALL,
            Vec2::ZERO,
            50.0,
            Vec2::ZERO,
            BRICK,
        );
        assert!(hit.is_none());
    }
}
