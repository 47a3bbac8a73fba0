//! Discretized spatial paths indexed by cumulative arc-length.
//!
//! [`DiscretizedPath`] owns an ordered sequence of
//! [`PathPoint`](strand_core::PathPoint)s sorted by non-decreasing `s`
//! and answers the per-cycle planning queries against it: indexed access,
//! length, closest index, and evaluation by exact or linear interpolation.
//!
//! Every query goes through one binary-search primitive, [`lower_bound`],
//! so each is O(log n). Sortedness is the caller's obligation and is
//! never re-checked on the query path.
//!
//! # Concurrency
//!
//! The path has no interior locking. Share it by reference between
//! readers, and replace it wholesale (build a new path, then publish it)
//! rather than mutating one that is being read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod discretized;
pub mod search;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{DomainCheck, EvalConfig};
pub use discretized::DiscretizedPath;
pub use search::{first_unsorted_index, lower_bound};
