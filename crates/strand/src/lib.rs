//! Strand: arc-length indexed discretized paths for motion planning.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Strand sub-crates. For most users, adding `strand` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! // A quarter circle of radius 10 m sampled every metre.
//! let points: Vec<PathPoint> = (0..16)
//!     .map(|i| {
//!         let s = i as f64;
//!         let phi = s / 10.0;
//!         PathPoint::new(10.0 * phi.sin(), 10.0 * (1.0 - phi.cos()), phi, 0.1, s)
//!     })
//!     .collect();
//! let path = DiscretizedPath::new(points);
//!
//! assert_eq!(path.closest_index(4.4), Some(4));
//!
//! let p = path.evaluate(4.5)?;
//! assert!((p.theta - 0.45).abs() < 1e-9);
//!
//! // Past the end, linear evaluation clamps and exact evaluation refuses.
//! assert_eq!(path.evaluate_linear(100.0)?.s, 15.0);
//! assert!(matches!(path.evaluate(100.0), Err(PathError::OutOfDomain { .. })));
//! # Ok::<(), PathError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strand-core` | `PathPoint`, `ArcLength`, `PathError`, angle helpers |
//! | [`interp`] | `strand-interp` | Exact and linear segment interpolation |
//! | [`path`] | `strand-path` | `DiscretizedPath`, `lower_bound`, evaluation config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and helpers (`strand-core`).
///
/// Contains [`types::PathPoint`], the [`types::ArcLength`] key trait, and
/// [`types::PathError`].
pub use strand_core as types;

/// Segment interpolation (`strand-interp`).
///
/// [`interp::interpolate_exact`] follows the curvature-consistent curve,
/// [`interp::interpolate_linear`] blends fields linearly.
pub use strand_interp as interp;

/// Discretized paths and search (`strand-path`).
pub use strand_path as path;

/// Common imports for typical Strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strand_core::{ArcLength, PathError, PathPoint};

    // Paths
    pub use strand_path::{DiscretizedPath, DomainCheck, EvalConfig};
}
