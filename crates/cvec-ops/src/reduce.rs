//! Reductions: dot product, norms, and minimum.
//!
//! Sums are accumulated left to right in index order, so results are
//! reproducible bit-for-bit against a naive loop.
//!
//! Empty inputs: empty sums (`dot_prod`, `l1_norm`, `w_l2_norm`) are 0.
//! `max_norm`, `min`, and `w_rms_norm` have no value on an empty vector
//! and return [`VectorError::EmptyInput`](cvec_core::VectorError).

use cvec_buffer::Buffer;
use cvec_core::{Real, Result};

use crate::check::{non_empty, same_len};

/// `Σ x[i] * y[i]`.
pub fn dot_prod<T: Real>(x: &Buffer<T>, y: &Buffer<T>) -> Result<T> {
    same_len("dot_prod", x.len(), y.len())?;
    Ok(x
        .iter()
        .zip(y.iter())
        .fold(T::zero(), |sum, (&a, &b)| sum + a * b))
}

/// `max |x[i]|`.
pub fn max_norm<T: Real>(x: &Buffer<T>) -> Result<T> {
    non_empty("max_norm", x.len())?;
    Ok(x.iter().fold(T::zero(), |max, &v| {
        let magnitude = v.abs();
        if magnitude > max {
            magnitude
        } else {
            max
        }
    }))
}

/// `min x[i]`, seeded from `x[0]`.
pub fn min<T: Real>(x: &Buffer<T>) -> Result<T> {
    non_empty("min", x.len())?;
    let seed = x[0];
    Ok(x.iter()
        .skip(1)
        .fold(seed, |min, &v| if v < min { v } else { min }))
}

/// `Σ |x[i]|`.
pub fn l1_norm<T: Real>(x: &Buffer<T>) -> T {
    x.iter().fold(T::zero(), |sum, &v| sum + v.abs())
}

fn weighted_sum_of_squares<T: Real>(op: &'static str, x: &Buffer<T>, w: &Buffer<T>) -> Result<T> {
    same_len(op, x.len(), w.len())?;
    Ok(x.iter().zip(w.iter()).fold(T::zero(), |sum, (&a, &b)| {
        let p = a * b;
        sum + p * p
    }))
}

/// Weighted root-mean-square norm, `sqrt(Σ (x[i] * w[i])² / N)`.
pub fn w_rms_norm<T: Real>(x: &Buffer<T>, w: &Buffer<T>) -> Result<T> {
    let sum = weighted_sum_of_squares("w_rms_norm", x, w)?;
    non_empty("w_rms_norm", x.len())?;
    Ok((sum / T::from_len(x.len())).sqrt())
}

/// Weighted Euclidean norm, `sqrt(Σ (x[i] * w[i])²)`.
pub fn w_l2_norm<T: Real>(x: &Buffer<T>, w: &Buffer<T>) -> Result<T> {
    Ok(weighted_sum_of_squares("w_l2_norm", x, w)?.sqrt())
}
