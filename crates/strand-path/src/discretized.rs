//! The arc-length indexed point sequence and its queries.

use crate::config::EvalConfig;
use crate::search::{first_unsorted_index, lower_bound};
use strand_core::{PathError, PathPoint};
use strand_interp::{interpolate_exact, interpolate_linear};

/// An ordered sequence of path points indexed by cumulative arc-length.
///
/// Points must be sorted by non-decreasing `s`. The path never sorts or
/// validates them: the order is established once by whoever supplies the
/// sequence, and the path is only ever replaced or cleared wholesale.
/// Queries against an unsorted sequence return unspecified results.
///
/// # Examples
///
/// ```
/// use strand_core::PathPoint;
/// use strand_path::DiscretizedPath;
///
/// let path: DiscretizedPath = (0..4)
///     .map(|i| PathPoint::new(i as f64, 0.0, 0.0, 0.0, i as f64))
///     .collect();
///
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.length(), 3.0);
/// assert_eq!(path.closest_index(2.9), Some(3));
///
/// let mid = path.evaluate(1.5).unwrap();
/// assert!((mid.x - 1.5).abs() < 1e-9);
///
/// // Linear evaluation clamps past the ends.
/// assert_eq!(path.evaluate_linear(10.0).unwrap().s, 3.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscretizedPath {
    points: Vec<PathPoint>,
    config: EvalConfig,
}

impl DiscretizedPath {
    /// Take ownership of `points` with the default [`EvalConfig`].
    pub fn new(points: Vec<PathPoint>) -> Self {
        warn_if_unsorted(&points);
        Self {
            points,
            config: EvalConfig::default(),
        }
    }

    /// Replace the evaluation config.
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// The evaluation config in effect.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Discard the current sequence and take ownership of `points`.
    pub fn set_points(&mut self, points: Vec<PathPoint>) {
        warn_if_unsorted(&points);
        self.points = points;
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The full ordered sequence.
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Consume the path and return its points.
    pub fn into_points(self) -> Vec<PathPoint> {
        self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point at `index`.
    ///
    /// Returns `Err(PathError::IndexOutOfRange)` when `index >= len()`.
    pub fn point_at(&self, index: usize) -> Result<&PathPoint, PathError> {
        self.points.get(index).ok_or(PathError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })
    }

    /// The first point, or `Err(PathError::EmptyPath)`.
    pub fn start_point(&self) -> Result<&PathPoint, PathError> {
        self.points.first().ok_or(PathError::EmptyPath)
    }

    /// The last point, or `Err(PathError::EmptyPath)`.
    pub fn end_point(&self) -> Result<&PathPoint, PathError> {
        self.points.last().ok_or(PathError::EmptyPath)
    }

    /// Arc-length covered, `end.s - start.s`; zero when empty.
    ///
    /// Negative if the sequence is not sorted.
    pub fn length(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(start), Some(end)) => end.s - start.s,
            _ => 0.0,
        }
    }

    /// Position of the first point with `s >= target`, or `len()` if none.
    pub fn lower_bound(&self, s: f64) -> usize {
        lower_bound(&self.points, s)
    }

    /// Index of the point whose arc-length is nearest to `s`.
    ///
    /// Targets before the first point map to `0`, targets past the last
    /// point to `len() - 1`. When `s` is equidistant from two neighbours
    /// the earlier index wins. Returns `None` for an empty path.
    pub fn closest_index(&self, s: f64) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        let upper = self.lower_bound(s);
        if upper == 0 {
            return Some(0);
        }
        if upper == self.points.len() {
            return Some(self.points.len() - 1);
        }

        let d0 = s - self.points[upper - 1].s;
        let d1 = self.points[upper].s - s;
        if d0 <= d1 {
            Some(upper - 1)
        } else {
            Some(upper)
        }
    }

    /// Point at arc-length `s` by curvature-consistent interpolation.
    ///
    /// Needs at least two points, and `s` must pass the configured
    /// [`DomainCheck`](crate::DomainCheck). A target at or before the
    /// first point's `s` returns the first point unchanged.
    ///
    /// # Errors
    ///
    /// - [`PathError::InsufficientPoints`] with fewer than two points.
    /// - [`PathError::OutOfDomain`] if the domain check rejects `s`, or if
    ///   `s` lies past the last point (no bracketing pair).
    pub fn evaluate(&self, s: f64) -> Result<PathPoint, PathError> {
        let n = self.points.len();
        if n < 2 {
            return Err(PathError::InsufficientPoints {
                required: 2,
                actual: n,
            });
        }
        let start = self.points[0].s;
        let end = self.points[n - 1].s;
        if !self.config.domain.admits(s, start, end) {
            return Err(PathError::OutOfDomain { s, start, end });
        }

        let upper = self.lower_bound(s);
        if upper == 0 {
            return Ok(self.points[0]);
        }
        if upper == n {
            log::debug!("strand: evaluate({s}) admitted past path end {end}, no bracketing pair");
            return Err(PathError::OutOfDomain { s, start, end });
        }
        Ok(interpolate_exact(
            &self.points[upper - 1],
            &self.points[upper],
            s,
        ))
    }

    /// Point at arc-length `s` by linear interpolation, clamped to the ends.
    ///
    /// Targets at or before the first point return the first point, targets
    /// past the last point return the last point; neither is extrapolated.
    ///
    /// Returns `Err(PathError::EmptyPath)` for an empty path.
    pub fn evaluate_linear(&self, s: f64) -> Result<PathPoint, PathError> {
        if self.points.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let upper = self.lower_bound(s);
        if upper == 0 {
            return Ok(self.points[0]);
        }
        if upper == self.points.len() {
            return Ok(self.points[upper - 1]);
        }
        Ok(interpolate_linear(
            &self.points[upper - 1],
            &self.points[upper],
            s,
        ))
    }

    /// First index whose `s` drops below its predecessor's, if any.
    ///
    /// O(n) diagnostic; the query methods never call it.
    pub fn first_unsorted_index(&self) -> Option<usize> {
        first_unsorted_index(&self.points)
    }
}

/// Debug builds log out-of-order input; the sequence is stored as given.
fn warn_if_unsorted(points: &[PathPoint]) {
    if cfg!(debug_assertions) {
        if let Some(i) = first_unsorted_index(points) {
            log::warn!(
                "strand: path points not sorted by s at index {i} ({} after {}); query results are unspecified",
                points[i].s,
                points[i - 1].s,
            );
        }
    }
}

impl From<Vec<PathPoint>> for DiscretizedPath {
    fn from(points: Vec<PathPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<PathPoint> for DiscretizedPath {
    fn from_iter<I: IntoIterator<Item = PathPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DiscretizedPath {
    type Item = &'a PathPoint;
    type IntoIter = std::slice::Iter<'a, PathPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
