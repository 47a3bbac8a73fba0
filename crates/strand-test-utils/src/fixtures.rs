//! Reusable path point fixtures.
//!
//! - [`straight_line`] — constant heading, zero curvature.
//! - [`circular_arc`] — constant left-turn curvature from the origin.
//! - [`s_ladder`] / [`uniform_ladder`] — points that only carry `s`.

use strand_core::{normalize_angle, PathPoint};

/// `n` points spaced `ds` apart along a ray from the origin at `heading`.
pub fn straight_line(n: usize, ds: f64, heading: f64) -> Vec<PathPoint> {
    let (sin, cos) = heading.sin_cos();
    (0..n)
        .map(|i| {
            let s = i as f64 * ds;
            PathPoint::new(s * cos, s * sin, heading, 0.0, s)
        })
        .collect()
}

/// `n` points spaced `ds` apart on a circle of `radius`, starting at the
/// origin heading along +x and turning left.
pub fn circular_arc(radius: f64, n: usize, ds: f64) -> Vec<PathPoint> {
    let kappa = 1.0 / radius;
    (0..n)
        .map(|i| {
            let s = i as f64 * ds;
            let phi = s * kappa;
            PathPoint::new(
                radius * phi.sin(),
                radius * (1.0 - phi.cos()),
                normalize_angle(phi),
                kappa,
                s,
            )
        })
        .collect()
}

/// One point per arc-length value, in the given order (sorted or not).
pub fn s_ladder(s_values: &[f64]) -> Vec<PathPoint> {
    s_values.iter().map(|&s| PathPoint::at_s(s)).collect()
}

/// `n` points at `s = start, start + ds, ...`.
pub fn uniform_ladder(n: usize, start: f64, ds: f64) -> Vec<PathPoint> {
    (0..n)
        .map(|i| PathPoint::at_s(start + i as f64 * ds))
        .collect()
}
