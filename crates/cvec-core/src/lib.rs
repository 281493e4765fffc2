//! Core types and traits for the cvec numeric-vector runtime.
//!
//! Buffers, vector operations, and matrices all build on the items here:
//! the [`Real`] precision trait, the [`Shape`] of a matrix, and the
//! [`VectorError`] returned when an operation rejects its inputs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod real;
pub mod shape;

pub use error::{Result, VectorError};
pub use real::Real;
pub use shape::Shape;
