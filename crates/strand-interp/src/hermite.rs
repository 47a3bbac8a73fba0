//! Cubic Hermite spline over a single interval.

/// Cubic Hermite interpolant on `[z0, z1]`.
///
/// Matches value and first derivative at both ends. Used for heading,
/// where the first derivative is curvature.
///
/// # Examples
///
/// ```
/// use strand_interp::HermiteSpline;
///
/// // theta(0) = 0, theta(2) = 1, constant slope 0.5: a straight ramp.
/// let h = HermiteSpline::new([0.0, 0.5], [1.0, 0.5], 0.0, 2.0);
/// assert!((h.evaluate(0, 1.0) - 0.5).abs() < 1e-12);
/// assert!((h.evaluate(1, 1.0) - 0.5).abs() < 1e-12);
/// assert!(h.evaluate(2, 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HermiteSpline {
    p0: f64,
    m0: f64,
    p1: f64,
    m1: f64,
    z0: f64,
    delta: f64,
}

impl HermiteSpline {
    /// Build from `[value, slope]` at each end of `[z0, z1]`.
    ///
    /// `z1` must be greater than `z0`.
    pub fn new(start: [f64; 2], end: [f64; 2], z0: f64, z1: f64) -> Self {
        debug_assert!(z1 > z0, "HermiteSpline needs z1 > z0, got [{z0}, {z1}]");
        Self {
            p0: start[0],
            m0: start[1],
            p1: end[0],
            m1: end[1],
            z0,
            delta: z1 - z0,
        }
    }

    /// Evaluate the `order`-th derivative at `z`.
    ///
    /// Orders 0 through 3 are meaningful; higher orders of a cubic are zero.
    pub fn evaluate(&self, order: u32, z: f64) -> f64 {
        let t = (z - self.z0) / self.delta;
        let d = self.delta;
        let (p0, p1) = (self.p0, self.p1);
        // Slopes scaled to the unit parameter.
        let (m0, m1) = (self.m0 * d, self.m1 * d);
        match order {
            0 => {
                let t2 = t * t;
                let t3 = t2 * t;
                (2.0 * t3 - 3.0 * t2 + 1.0) * p0
                    + (t3 - 2.0 * t2 + t) * m0
                    + (-2.0 * t3 + 3.0 * t2) * p1
                    + (t3 - t2) * m1
            }
            1 => {
                let t2 = t * t;
                ((6.0 * t2 - 6.0 * t) * p0
                    + (3.0 * t2 - 4.0 * t + 1.0) * m0
                    + (-6.0 * t2 + 6.0 * t) * p1
                    + (3.0 * t2 - 2.0 * t) * m1)
                    / d
            }
            2 => {
                ((12.0 * t - 6.0) * p0
                    + (6.0 * t - 4.0) * m0
                    + (-12.0 * t + 6.0) * p1
                    + (6.0 * t - 2.0) * m1)
                    / (d * d)
            }
            3 => (12.0 * p0 + 6.0 * m0 - 12.0 * p1 + 6.0 * m1) / (d * d * d),
            _ => 0.0,
        }
    }
}
