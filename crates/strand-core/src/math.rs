//! Scalar and angle interpolation helpers.

use std::f64::consts::PI;

/// Spans shorter than this are treated as a single point.
pub const MATH_EPSILON: f64 = 1e-10;

/// Wrap an angle into `[-π, π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = (angle + PI) % (2.0 * PI);
    if a < 0.0 {
        a += 2.0 * PI;
    }
    a - PI
}

/// Linear blend `a + (b - a) * w`.
#[inline]
pub fn lerp(a: f64, b: f64, w: f64) -> f64 {
    a + (b - a) * w
}

/// Interpolate an angle along the shortest arc.
///
/// `a0` is the angle at parameter `t0`, `a1` at `t1`; the result is the
/// angle at `t`, normalized. A degenerate parameter span returns `a0`.
pub fn slerp(a0: f64, t0: f64, a1: f64, t1: f64, t: f64) -> f64 {
    if (t1 - t0).abs() <= MATH_EPSILON {
        return normalize_angle(a0);
    }
    let a0n = normalize_angle(a0);
    let a1n = normalize_angle(a1);
    let mut d = a1n - a0n;
    if d > PI {
        d -= 2.0 * PI;
    } else if d < -PI {
        d += 2.0 * PI;
    }
    let r = (t - t0) / (t1 - t0);
    normalize_angle(a0n + d * r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert!(close(normalize_angle(0.0), 0.0));
        assert!(close(normalize_angle(3.0 * PI / 2.0), -PI / 2.0));
        assert!(close(normalize_angle(-3.0 * PI / 2.0), PI / 2.0));
        assert!(close(normalize_angle(PI), -PI));
        assert!(close(normalize_angle(4.0 * PI + 0.25), 0.25));
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn slerp_takes_short_way_across_pi() {
        // 170 deg -> -170 deg should pass through 180, not 0.
        let a0 = 170f64.to_radians();
        let a1 = (-170f64).to_radians();
        let mid = slerp(a0, 0.0, a1, 1.0, 0.5);
        assert!(close(mid.abs(), PI), "mid = {mid}");
    }

    #[test]
    fn slerp_degenerate_span_returns_first() {
        assert!(close(slerp(0.3, 1.0, 2.0, 1.0, 1.0), 0.3));
    }

    proptest! {
        #[test]
        fn normalize_is_in_range(a in -100.0f64..100.0) {
            let n = normalize_angle(a);
            prop_assert!((-PI..PI).contains(&n));
            // Same direction as the input.
            prop_assert!((n.sin() - a.sin()).abs() < 1e-9);
            prop_assert!((n.cos() - a.cos()).abs() < 1e-9);
        }

        #[test]
        fn slerp_hits_endpoints(a0 in -3.0f64..3.0, a1 in -3.0f64..3.0) {
            let start = slerp(a0, 0.0, a1, 2.0, 0.0);
            let end = slerp(a0, 0.0, a1, 2.0, 2.0);
            prop_assert!((start.sin() - a0.sin()).abs() < 1e-9);
            prop_assert!((end.sin() - a1.sin()).abs() < 1e-9);
            prop_assert!((end.cos() - a1.cos()).abs() < 1e-9);
        }
    }
}
