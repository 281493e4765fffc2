//! Row-major matrices for cvec.
//!
//! A [`Matrix`] is an ordered sequence of row [`Buffer`](cvec_buffer::Buffer)s
//! of equal length. It owns every row; rows are never shared between
//! matrices and their lengths never change after construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod matrix;

pub use matrix::{compatible, Matrix};
