//! Query contract helpers shared by the path test modules.
//!
//! Each helper checks a query result against a brute-force reading of
//! the same contract.

use crate::discretized::DiscretizedPath;
use strand_core::{normalize_angle, PathPoint};

/// Assert that `closest_index(s)` is nearest by arc-length, earliest on ties.
pub fn assert_closest_is_nearest(path: &DiscretizedPath, s: f64) {
    let got = path
        .closest_index(s)
        .expect("closest_index on non-empty path");
    let gap = |i: usize| (path.points()[i].s - s).abs();
    let best = (0..path.len())
        .map(gap)
        .fold(f64::INFINITY, f64::min);
    assert!(
        gap(got) <= best,
        "closest_index({s}) = {got} at gap {}, but best gap is {best}",
        gap(got)
    );
    if let Some(earlier) = (0..got).find(|&i| gap(i) == gap(got)) {
        panic!("closest_index({s}) = {got}, but index {earlier} ties and comes first");
    }
}

/// Assert that two points agree on every geometric field within `tol`.
pub fn assert_point_matches(got: &PathPoint, want: &PathPoint, tol: f64) {
    let fields = [
        ("x", got.x - want.x),
        ("y", got.y - want.y),
        ("z", got.z - want.z),
        ("theta", normalize_angle(got.theta - want.theta)),
        ("kappa", got.kappa - want.kappa),
        ("s", got.s - want.s),
    ];
    for (name, diff) in fields {
        assert!(
            diff.abs() < tol,
            "{name} differs by {diff}: got {got}, want {want}"
        );
    }
}
