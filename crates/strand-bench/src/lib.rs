//! Benchmark profiles for the Strand discretized path library.
//!
//! - [`reference_path`]: a planner-sized path with smoothly varying curvature
//! - [`query_targets`]: deterministic arc-length targets spread over a path

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strand_core::{normalize_angle, PathPoint};
use strand_path::DiscretizedPath;

/// Sample spacing of [`reference_path`], in metres.
pub const REFERENCE_DS: f64 = 0.1;

/// Build a path of `n` points spaced [`REFERENCE_DS`] apart.
///
/// Curvature oscillates like a gentle S-bend (peak 0.05 1/m, 40 m period),
/// close to what a lane-level planner hands downstream each cycle. Heading
/// and position are integrated with the midpoint rule, so the samples are
/// geometrically consistent to within a few millimetres.
pub fn reference_path(n: usize) -> DiscretizedPath {
    let w = std::f64::consts::TAU / 40.0;
    let kappa_at = |s: f64| 0.05 * (w * s).sin();
    let dkappa_at = |s: f64| 0.05 * w * (w * s).cos();

    let mut points = Vec::with_capacity(n);
    let (mut x, mut y, mut theta) = (0.0f64, 0.0f64, 0.0f64);
    for i in 0..n {
        let s = i as f64 * REFERENCE_DS;
        points.push(
            PathPoint::new(x, y, normalize_angle(theta), kappa_at(s), s).with_dkappa(dkappa_at(s)),
        );
        let mid_theta = theta + 0.5 * REFERENCE_DS * kappa_at(s + 0.5 * REFERENCE_DS);
        x += REFERENCE_DS * mid_theta.cos();
        y += REFERENCE_DS * mid_theta.sin();
        theta += REFERENCE_DS * kappa_at(s + 0.5 * REFERENCE_DS);
    }
    DiscretizedPath::new(points)
}

/// `count` deterministic pseudo-random arc-lengths, mostly inside the
/// path's domain with a few past each end.
pub fn query_targets(path: &DiscretizedPath, count: usize) -> Vec<f64> {
    let length = path.length();
    let start = path.start_point().map(|p| p.s).unwrap_or(0.0);
    (0..count as u64)
        .map(|i| {
            // Fraction in [-0.05, 1.05).
            let r = (i.wrapping_mul(6364136223846793007) >> 11) as f64 / (1u64 << 53) as f64;
            start + (r * 1.1 - 0.05) * length
        })
        .collect()
}
