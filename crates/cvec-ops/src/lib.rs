//! Vector operations over [`Buffer`](cvec_buffer::Buffer)s.
//!
//! Every operation treats its buffers as fixed-length sequences: nothing
//! here appends or resizes. Allocating forms (`new_from_*`) build their
//! result with [`Buffer::new`](cvec_buffer::Buffer::new) or
//! [`Buffer::new_from_copy`](cvec_buffer::Buffer::new_from_copy) and hand
//! ownership to the caller.
//!
//! # Forms
//!
//! | Form | Shape | Allocates |
//! |------|-------|-----------|
//! | write-into | `op(x, y, z)` | no |
//! | in-place | `op_assign(x, y)` (destination is `x`) | no |
//! | allocating | `new_from_op(x, y)` | yes |
//!
//! # Preconditions
//!
//! Binary operations require equal lengths, destination included, and
//! return [`VectorError::LengthMismatch`](cvec_core::VectorError) before
//! touching any element. Reductions with no value on an empty vector
//! return [`VectorError::EmptyInput`](cvec_core::VectorError). Division
//! and inversion by zero follow IEEE-754 and are not errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blas;
mod check;
pub mod compare;
pub mod elementwise;
pub mod reduce;

pub use blas::{axpy, new_from_axpy};
pub use compare::{equals, equals_tol};
pub use elementwise::{
    abs, abs_assign, add_const, add_const_assign, div, div_assign, inv, inv_assign, new_from_abs,
    new_from_add_const, new_from_div, new_from_inv, new_from_prod, new_from_scale_by,
    new_from_square, prod, prod_assign, scale_by, square,
};
pub use reduce::{dot_prod, l1_norm, max_norm, min, w_l2_norm, w_rms_norm};
