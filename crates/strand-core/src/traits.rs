//! Key-extraction trait for arc-length ordered sequences.

use crate::point::PathPoint;

/// A record positioned along a path by cumulative arc-length.
///
/// Sorted-sequence queries (lower bound, closest index) are written
/// against this trait rather than a concrete point type, so the same
/// search serves any record that carries an `s` coordinate.
pub trait ArcLength {
    /// Cumulative distance from the path start, in metres.
    fn arc_length(&self) -> f64;
}

impl ArcLength for PathPoint {
    #[inline]
    fn arc_length(&self) -> f64 {
        self.s
    }
}

impl<T: ArcLength + ?Sized> ArcLength for &T {
    #[inline]
    fn arc_length(&self) -> f64 {
        (**self).arc_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_point_key_is_s() {
        let p = PathPoint::at_s(4.25);
        assert_eq!(p.arc_length(), 4.25);
        assert_eq!((&p).arc_length(), 4.25);
    }
}
