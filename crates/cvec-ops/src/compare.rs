//! Exact and tolerance-based equality.

use cvec_buffer::Buffer;
use cvec_core::Real;

/// Exact elementwise equality.
///
/// Buffers of different lengths are unequal; a buffer always equals
/// itself, even when it holds NaN.
pub fn equals<T: Real>(x: &Buffer<T>, y: &Buffer<T>) -> bool {
    if x.len() != y.len() {
        return false;
    }
    if std::ptr::eq(x, y) {
        return true;
    }
    x.iter().zip(y.iter()).all(|(&a, &b)| a == b)
}

/// Elementwise equality within `tol`: `|x[i] - y[i]| <= tol` for all `i`.
///
/// Same length and identity rules as [`equals`]. A NaN element compares
/// unequal to everything but itself through identity.
pub fn equals_tol<T: Real>(x: &Buffer<T>, y: &Buffer<T>, tol: T) -> bool {
    if x.len() != y.len() {
        return false;
    }
    if std::ptr::eq(x, y) {
        return true;
    }
    x.iter().zip(y.iter()).all(|(&a, &b)| (a - b).abs() <= tol)
}
