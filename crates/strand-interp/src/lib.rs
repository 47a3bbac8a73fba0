//! Segment interpolation between two arc-length indexed path points.
//!
//! Two variants synthesize a point at a target arc-length inside the
//! span `[p0.s, p1.s]`:
//!
//! - [`interpolate_exact`]: heading follows a cubic Hermite spline whose
//!   endpoint slopes are the endpoint curvatures; position is the integral
//!   of the unit heading vector (Gauss–Legendre quadrature).
//! - [`interpolate_linear`]: every field varies linearly with arc-length,
//!   heading along the shortest arc.
//!
//! Both are pure functions of their inputs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod exact;
pub mod hermite;
pub mod linear;
pub mod quadrature;

pub use exact::interpolate_exact;
pub use hermite::HermiteSpline;
pub use linear::interpolate_linear;
pub use quadrature::gauss_legendre_5;
