//! The floating-point element type.
//!
//! Every buffer, vector operation, and matrix is generic over a single
//! [`Real`] parameter, so the precision is picked once per instantiation
//! (the `cvec` facade fixes it per build through Cargo features).

use std::fmt;

use num_traits::Float;

/// A floating-point precision usable as a cvec element.
///
/// Implemented for `f32` and `f64`. The trait adds the few conversions
/// the runtime needs on top of [`Float`] without going through the
/// fallible [`num_traits::NumCast`] path.
pub trait Real: Float + Default + fmt::Debug + fmt::Display + 'static {
    /// Short name of the precision, used in diagnostics.
    const NAME: &'static str;

    /// Convert an element count to this precision (for averaging).
    fn from_len(n: usize) -> Self;

    /// Convert an `f64` literal to this precision, rounding if needed.
    fn from_lossy(v: f64) -> Self;
}

impl Real for f32 {
    const NAME: &'static str = "f32";

    fn from_len(n: usize) -> Self {
        n as f32
    }

    fn from_lossy(v: f64) -> Self {
        v as f32
    }
}

impl Real for f64 {
    const NAME: &'static str = "f64";

    fn from_len(n: usize) -> Self {
        n as f64
    }

    fn from_lossy(v: f64) -> Self {
        v
    }
}
