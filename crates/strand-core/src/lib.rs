//! Core types for the Strand discretized path library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the path point record, the arc-length key trait used by every
//! sorted-sequence query, the error type, and small angle helpers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod math;
pub mod point;
pub mod traits;

pub use error::PathError;
pub use math::{lerp, normalize_angle, slerp, MATH_EPSILON};
pub use point::PathPoint;
pub use traits::ArcLength;
