//! Test fixtures for Strand development.
//!
//! Geometrically consistent point sequences ([`straight_line`],
//! [`circular_arc`]) for checking interpolation against closed forms,
//! and bare arc-length ladders ([`s_ladder`]) for search behaviour.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{circular_arc, s_ladder, straight_line, uniform_ladder};
