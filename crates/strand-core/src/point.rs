//! The sampled path point record.

use std::fmt;

/// A single sample along a continuous path.
///
/// Produced upstream by path generation; the path containers in this
/// workspace store and query points but never edit them. All lengths are
/// in metres, angles in radians.
///
/// # Examples
///
/// ```
/// use strand_core::PathPoint;
///
/// let p = PathPoint::new(1.0, 2.0, 0.5, 0.01, 10.0).with_z(0.3);
/// assert_eq!(p.s, 10.0);
/// assert_eq!(p.z, 0.3);
/// assert_eq!(p.dkappa, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathPoint {
    /// Easting.
    pub x: f64,
    /// Northing.
    pub y: f64,
    /// Elevation.
    pub z: f64,
    /// Heading, measured counter-clockwise from the x axis.
    pub theta: f64,
    /// Curvature (1/m), the derivative of heading with respect to `s`.
    pub kappa: f64,
    /// First derivative of curvature with respect to `s`.
    pub dkappa: f64,
    /// Second derivative of curvature with respect to `s`.
    pub ddkappa: f64,
    /// Cumulative arc-length from the start of the path.
    pub s: f64,
}

impl PathPoint {
    /// Create a planar point. `z` and the curvature derivatives are zero.
    pub const fn new(x: f64, y: f64, theta: f64, kappa: f64, s: f64) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            theta,
            kappa,
            dkappa: 0.0,
            ddkappa: 0.0,
            s,
        }
    }

    /// A point at the origin carrying only an arc-length.
    pub const fn at_s(s: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, s)
    }

    /// Set the elevation.
    pub const fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Set the first curvature derivative.
    pub const fn with_dkappa(mut self, dkappa: f64) -> Self {
        self.dkappa = dkappa;
        self
    }

    /// Set the second curvature derivative.
    pub const fn with_ddkappa(mut self, ddkappa: f64) -> Self {
        self.ddkappa = ddkappa;
        self
    }

    /// Copy of this point relabelled at arc-length `s`.
    pub const fn with_s(mut self, s: f64) -> Self {
        self.s = s;
        self
    }

    /// Planar Euclidean distance to `other`.
    pub fn distance_to(&self, other: &PathPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for PathPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "s={:.3} ({:.3}, {:.3}, {:.3}) theta={:.4} kappa={:.5}",
            self.s, self.x, self.y, self.z, self.theta, self.kappa
        )
    }
}
