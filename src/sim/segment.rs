//! Parametric segment intersection
//!
//! Every swept test in the simulation bottoms out here: a segment is an
//! origin plus a displacement, and the intersection is reported as the
//! fraction `t` travelled along the first segment.

use glam::Vec2;

/// Intersect segment `start1 + dir1 * t` with segment `start2 + dir2 * u`.
///
/// Returns `Some(t)` when both `t` and `u` lie in `[0, 1]`. Parallel and
/// degenerate segments (exactly zero cross product) never intersect, even
/// when collinear and overlapping.
pub fn segment_intersection(start1: Vec2, dir1: Vec2, start2: Vec2, dir2: Vec2) -> Option<f32> {
    let denom = dir1.perp_dot(dir2);
    if denom == 0.0 {
        return None;
    }

    let offset = start2 - start1;
    let t = offset.perp_dot(dir2) / denom;
    let u = offset.perp_dot(dir1) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_crossing_segments() {
        // Horizontal segment crossing a vertical one at its midpoint
        let t = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, -5.0),
            Vec2::new(0.0, 10.0),
        );
        assert_eq!(t, Some(0.5));
    }

    #[test]
    fn test_endpoints_are_inclusive() {
        let t = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        );
        assert_eq!(t, Some(1.0));

        let t = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, -3.0),
            Vec2::new(0.0, 3.0),
        );
        assert_eq!(t, Some(0.0));
    }

    #[test]
    fn test_short_of_target() {
        // Lines cross at x = 15, beyond the first segment's end
        let t = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(15.0, -5.0),
            Vec2::new(0.0, 10.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn test_outside_second_segment() {
        // Lines cross at y = 0, but the second segment spans y in [2, 12]
        let t = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 2.0),
            Vec2::new(0.0, 10.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn test_parallel_and_collinear_miss() {
        let parallel = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(10.0, 0.0),
        );
        assert_eq!(parallel, None);

        // Overlapping collinear segments are deliberately not reported
        let collinear = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert_eq!(collinear, None);
    }

    #[test]
    fn test_zero_length_segment() {
        let t = segment_intersection(
            Vec2::new(5.0, 0.0),
            Vec2::ZERO,
            Vec2::new(5.0, -5.0),
            Vec2::new(0.0, 10.0),
        );
        assert_eq!(t, None);
    }

    proptest! {
        #[test]
        fn prop_hit_lies_on_both_segments(
            sx in -50.0f32..50.0, sy in -50.0f32..50.0,
            dx in -50.0f32..50.0, dy in -50.0f32..50.0,
            ex in -50.0f32..50.0, ey in -50.0f32..50.0,
            fx in -50.0f32..50.0, fy in -50.0f32..50.0,
        ) {
            let (start1, dir1) = (Vec2::new(sx, sy), Vec2::new(dx, dy));
            let (start2, dir2) = (Vec2::new(ex, ey), Vec2::new(fx, fy));
            if let Some(t) = segment_intersection(start1, dir1, start2, dir2) {
                prop_assert!((0.0..=1.0).contains(&t));
            }
        }

        #[test]
        fn prop_vertical_crossing_fraction(
            length in 1.0f32..100.0,
            fraction in 0.0f32..1.0,
        ) {
            // A horizontal sweep against a tall vertical edge placed at `fraction` of its length
            let edge_x = length * fraction;
            let t = segment_intersection(
                Vec2::ZERO,
                Vec2::new(length, 0.0),
                Vec2::new(edge_x, -10.0),
                Vec2::new(0.0, 20.0),
            );
            let t = t.expect("edge within reach must be hit");
            prop_assert!((t - fraction).abs() < 1.0e-4);
        }
    }
}
