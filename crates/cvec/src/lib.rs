//! cvec: growable real vectors, vector operations, and small matrices.
//!
//! Buffers, vector operations, and matrices live in separate crates;
//! this one gathers them under one namespace and fixes the build's
//! [`real`] precision.
//!
//! # Quick start
//!
//! ```rust
//! use cvec::prelude::*;
//!
//! // Grow a buffer one element at a time.
//! let mut x: RealBuffer = Buffer::null();
//! for i in 0..5 {
//!     x.push(i as real);
//! }
//! assert_eq!(x.len(), 5);
//! assert_eq!(x.capacity(), 8);
//!
//! // y ← 2·x + y
//! let mut y = Buffer::new_with_const(1.0, 5);
//! ops::axpy(2.0, &x, &mut y).unwrap();
//! assert_eq!(y.as_slice(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
//!
//! // Mismatched lengths are reported, not read past.
//! let short = Buffer::new_with_const(1.0, 2);
//! assert!(ops::dot_prod(&x, &short).is_err());
//!
//! // a ← 3·I + I
//! let mut a: RealMatrix = Matrix::new_identity(3);
//! let b = Matrix::new_identity(3);
//! a.scale_add(3.0, &b).unwrap();
//! assert_eq!(a[(1, 1)], 4.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cvec-core` | `Real`, `Shape`, `VectorError` |
//! | [`buffer`] | `cvec-buffer` | `Buffer`, `GrowthPolicy` |
//! | [`ops`] | `cvec-ops` | elementwise ops, reductions, `axpy`, equality |
//! | [`matrix`] | `cvec-matrix` | `Matrix`, `compatible` |
//!
//! # Precision
//!
//! Everything is generic over [`Real`](types::Real). The [`real`] alias
//! fixes one precision per build: `f64` by default, `f32` with the
//! `single-precision` feature.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core traits and error types (from `cvec-core`).
pub mod types {
    pub use cvec_core::*;
}

/// Growable buffers (from `cvec-buffer`).
pub mod buffer {
    pub use cvec_buffer::*;
}

/// Vector operations (from `cvec-ops`).
pub mod ops {
    pub use cvec_ops::*;
}

/// Matrices (from `cvec-matrix`).
pub mod matrix {
    pub use cvec_matrix::*;
}

/// The element type selected for this build.
#[cfg(not(feature = "single-precision"))]
#[allow(non_camel_case_types)]
pub type real = f64;

/// The element type selected for this build.
#[cfg(feature = "single-precision")]
#[allow(non_camel_case_types)]
pub type real = f32;

/// A buffer of the build's [`real`] type.
pub type RealBuffer = cvec_buffer::Buffer<real>;

/// A matrix of the build's [`real`] type.
pub type RealMatrix = cvec_matrix::Matrix<real>;

/// Common imports for typical usage.
///
/// ```rust
/// use cvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ops;
    pub use crate::{real, RealBuffer, RealMatrix};
    pub use cvec_buffer::{Buffer, GrowthPolicy};
    pub use cvec_core::{Real, Shape, VectorError};
    pub use cvec_matrix::{compatible, Matrix};
}
