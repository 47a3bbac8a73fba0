//! Binary search over arc-length ordered sequences.

use strand_core::ArcLength;

/// Position of the first item whose arc-length is not less than `s`.
///
/// Returns `items.len()` when every item lies before `s`. Assumes `items`
/// is sorted by non-decreasing arc-length and does not check it.
///
/// # Examples
///
/// ```
/// use strand_core::PathPoint;
/// use strand_path::lower_bound;
///
/// let pts: Vec<PathPoint> = [0.0, 1.0, 1.0, 2.0].map(PathPoint::at_s).to_vec();
/// assert_eq!(lower_bound(&pts, -1.0), 0);
/// assert_eq!(lower_bound(&pts, 1.0), 1);
/// assert_eq!(lower_bound(&pts, 1.5), 3);
/// assert_eq!(lower_bound(&pts, 9.0), 4);
/// ```
#[inline]
pub fn lower_bound<T: ArcLength>(items: &[T], s: f64) -> usize {
    items.partition_point(|p| p.arc_length() < s)
}

/// Index of the first item whose arc-length is smaller than its
/// predecessor's, or `None` if the sequence is non-decreasing.
///
/// O(n); intended for diagnostics, not the query path.
pub fn first_unsorted_index<T: ArcLength>(items: &[T]) -> Option<usize> {
    items
        .windows(2)
        .position(|w| w[1].arc_length() < w[0].arc_length())
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strand_core::PathPoint;
    use strand_test_utils::s_ladder;

    #[test]
    fn lower_bound_on_empty() {
        let pts: Vec<PathPoint> = Vec::new();
        assert_eq!(lower_bound(&pts, 0.0), 0);
    }

    #[test]
    fn lower_bound_lands_on_first_duplicate() {
        let pts = s_ladder(&[0.0, 2.0, 2.0, 2.0, 5.0]);
        assert_eq!(lower_bound(&pts, 2.0), 1);
        assert_eq!(lower_bound(&pts, 2.0000001), 4);
    }

    #[test]
    fn lower_bound_nan_target_is_start() {
        let pts = s_ladder(&[0.0, 1.0]);
        assert_eq!(lower_bound(&pts, f64::NAN), 0);
    }

    #[test]
    fn unsorted_detection() {
        assert_eq!(first_unsorted_index(&s_ladder(&[])), None);
        assert_eq!(first_unsorted_index(&s_ladder(&[1.0])), None);
        assert_eq!(first_unsorted_index(&s_ladder(&[0.0, 1.0, 1.0, 3.0])), None);
        assert_eq!(first_unsorted_index(&s_ladder(&[0.0, 2.0, 1.0, 3.0])), Some(2));
    }

    #[test]
    fn works_on_borrowed_items() {
        let pts = s_ladder(&[0.0, 1.0, 2.0]);
        let refs: Vec<&PathPoint> = pts.iter().collect();
        assert_eq!(lower_bound(&refs, 1.5), 2);
    }

    proptest! {
        #[test]
        fn matches_linear_scan(
            steps in prop::collection::vec(0.0f64..3.0, 0..40),
            target in -5.0f64..130.0,
        ) {
            let mut s = 0.0;
            let values: Vec<f64> = steps.iter().map(|d| { s += d; s }).collect();
            let pts = s_ladder(&values);
            let expected = pts.iter().position(|p| p.s >= target).unwrap_or(pts.len());
            prop_assert_eq!(lower_bound(&pts, target), expected);
        }
    }
}
