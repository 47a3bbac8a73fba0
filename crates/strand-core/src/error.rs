//! Error types for path queries.
//!
//! Every condition here is a caller contract violation (empty container,
//! bad index, too few points, target outside the evaluable domain). They
//! are surfaced as values so the planning loop decides how to react.

use std::error::Error;
use std::fmt;

/// Errors from discretized path accessors and queries.
#[derive(Clone, Debug, PartialEq)]
pub enum PathError {
    /// The query needs at least one point and the path is empty.
    EmptyPath,
    /// Exact evaluation needs a bracketing pair of points.
    InsufficientPoints {
        /// Minimum number of points the operation needs.
        required: usize,
        /// Number of points the path holds.
        actual: usize,
    },
    /// Indexed access past the end of the sequence.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of points in the path.
        len: usize,
    },
    /// The target arc-length is rejected by the evaluation domain check.
    OutOfDomain {
        /// The requested arc-length.
        s: f64,
        /// Arc-length of the first point.
        start: f64,
        /// Arc-length of the last point.
        end: f64,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "path has no points"),
            Self::InsufficientPoints { required, actual } => {
                write!(f, "path needs at least {required} points, has {actual}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "point index {index} out of range for path of {len} points")
            }
            Self::OutOfDomain { s, start, end } => {
                write!(f, "arc-length {s} outside evaluable domain [{start}, {end}]")
            }
        }
    }
}

impl Error for PathError {}
