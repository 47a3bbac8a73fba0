//! Fixed-order Gauss–Legendre quadrature.

/// Abscissae of the 5-point rule on `[-1, 1]`.
const NODES: [f64; 5] = [
    0.0,
    -0.538_469_310_105_683_1,
    0.538_469_310_105_683_1,
    -0.906_179_845_938_664,
    0.906_179_845_938_664,
];

/// Weights matching [`NODES`].
const WEIGHTS: [f64; 5] = [
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
    0.236_926_885_056_189_1,
];

/// Integrate `f` over `[lower, upper]` with the 5-point Gauss–Legendre rule.
///
/// Exact for polynomials up to degree 9. Reversed bounds give the negated
/// integral; equal bounds give zero.
pub fn gauss_legendre_5<F>(f: F, lower: f64, upper: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let half = 0.5 * (upper - lower);
    let mid = 0.5 * (upper + lower);
    let sum: f64 = NODES
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(&x, &w)| w * f(half * x + mid))
        .sum();
    sum * half
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_interval_length() {
        let total: f64 = WEIGHTS.iter().sum();
        assert!((total - 2.0).abs() < 1e-12);
    }

    #[test]
    fn exact_for_degree_nine() {
        // integral of x^9 + 3x^2 over [0, 2] = 2^10 / 10 + 8
        let got = gauss_legendre_5(|x| x.powi(9) + 3.0 * x * x, 0.0, 2.0);
        assert!((got - (102.4 + 8.0)).abs() < 1e-9, "got {got}");
    }

    #[test]
    fn smooth_trig_integrand() {
        let got = gauss_legendre_5(f64::cos, 0.0, 1.0);
        assert!((got - 1f64.sin()).abs() < 1e-10);
    }

    #[test]
    fn empty_and_reversed_intervals() {
        assert_eq!(gauss_legendre_5(|x| x + 1.0, 3.0, 3.0), 0.0);
        let fwd = gauss_legendre_5(|x| x * x, 0.0, 1.0);
        let rev = gauss_legendre_5(|x| x * x, 1.0, 0.0);
        assert!((fwd + rev).abs() < 1e-12);
    }
}
