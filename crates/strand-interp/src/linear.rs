//! Linear-approximation segment interpolation.

use strand_core::{lerp, slerp, PathPoint, MATH_EPSILON};

/// Synthesize the point at arc-length `s` by linear blending of `p0` and `p1`.
///
/// Position, elevation, curvature and its derivatives vary linearly with
/// `s`; heading follows the shortest arc. The returned point carries `s`
/// as its arc-length. A zero-length span yields `p0`'s fields.
///
/// `s` is expected to lie in `[p0.s, p1.s]`; values outside extrapolate.
pub fn interpolate_linear(p0: &PathPoint, p1: &PathPoint, s: f64) -> PathPoint {
    debug_assert!(
        p0.s <= p1.s,
        "interpolate_linear: unordered span [{}, {}]",
        p0.s,
        p1.s
    );
    let span = p1.s - p0.s;
    let w = if span.abs() <= MATH_EPSILON {
        0.0
    } else {
        (s - p0.s) / span
    };

    PathPoint {
        x: lerp(p0.x, p1.x, w),
        y: lerp(p0.y, p1.y, w),
        z: lerp(p0.z, p1.z, w),
        theta: slerp(p0.theta, p0.s, p1.theta, p1.s, s),
        kappa: lerp(p0.kappa, p1.kappa, w),
        dkappa: lerp(p0.dkappa, p1.dkappa, w),
        ddkappa: lerp(p0.ddkappa, p1.ddkappa, w),
        s,
    }
}
