//! Curvature-consistent segment interpolation.

use crate::hermite::HermiteSpline;
use crate::quadrature::gauss_legendre_5;
use strand_core::{lerp, normalize_angle, PathPoint, MATH_EPSILON};

/// Synthesize the point at arc-length `s` on the curve joining `p0` and `p1`.
///
/// Heading is a cubic Hermite spline in `s` matching each endpoint's
/// heading and curvature; `p1.theta` is first unwrapped onto the short
/// arc from `p0.theta`. Curvature and its two derivatives are the
/// spline's first three derivatives. Planar position integrates the unit
/// heading vector from `p0`. Elevation is linear.
///
/// A zero-length span returns `p0` relabelled at `s`.
///
/// `s` is expected to lie in `[p0.s, p1.s]`.
pub fn interpolate_exact(p0: &PathPoint, p1: &PathPoint, s: f64) -> PathPoint {
    let (s0, s1) = (p0.s, p1.s);
    debug_assert!(
        s0 <= s && s <= s1,
        "interpolate_exact: {s} outside span [{s0}, {s1}]"
    );
    if s1 - s0 <= MATH_EPSILON {
        return p0.with_s(s);
    }

    let theta1 = p0.theta + normalize_angle(p1.theta - p0.theta);
    let heading = HermiteSpline::new([p0.theta, p0.kappa], [theta1, p1.kappa], s0, s1);

    let dx = gauss_legendre_5(|u| heading.evaluate(0, u).cos(), s0, s);
    let dy = gauss_legendre_5(|u| heading.evaluate(0, u).sin(), s0, s);

    PathPoint {
        x: p0.x + dx,
        y: p0.y + dy,
        z: lerp(p0.z, p1.z, (s - s0) / (s1 - s0)),
        theta: normalize_angle(heading.evaluate(0, s)),
        kappa: heading.evaluate(1, s),
        dkappa: heading.evaluate(2, s),
        ddkappa: heading.evaluate(3, s),
        s,
    }
}
