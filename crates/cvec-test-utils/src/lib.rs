//! Test utilities for cvec development.
//!
//! Provides seeded random generators (ChaCha8, so every run of a test
//! sees the same inputs) and naive reference loops that operation
//! results are checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod reference;

use cvec_buffer::Buffer;
use cvec_core::Real;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Seed used by tests that do not care which inputs they get.
pub const DEFAULT_SEED: u64 = 0x5eed_cafe;

/// Deterministic RNG for test inputs.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A uniform real in `[low, high)`.
pub fn rand_real<T: Real>(rng: &mut ChaCha8Rng, low: f64, high: f64) -> T {
    T::from_lossy(rng.random_range(low..high))
}

/// `n` uniform reals in `[low, high)`.
pub fn random_vec<T: Real>(rng: &mut ChaCha8Rng, n: usize, low: f64, high: f64) -> Vec<T> {
    (0..n).map(|_| rand_real(rng, low, high)).collect()
}

/// A buffer of `n` uniform reals in `[low, high)`.
pub fn random_buffer<T: Real>(rng: &mut ChaCha8Rng, n: usize, low: f64, high: f64) -> Buffer<T> {
    Buffer::new_from_array(&random_vec::<T>(rng, n, low, high))
}

/// `n` uniform reals in `[low, high)` with none closer to zero than
/// `margin`, for divisor and inverse tests.
pub fn nonzero_vec<T: Real>(
    rng: &mut ChaCha8Rng,
    n: usize,
    low: f64,
    high: f64,
    margin: f64,
) -> Vec<T> {
    (0..n)
        .map(|_| loop {
            let v: f64 = rng.random_range(low..high);
            if v.abs() >= margin {
                break T::from_lossy(v);
            }
        })
        .collect()
}

/// `[0, 1, ..., n-1]`, or its negation when `negate` is set.
pub fn ramp<T: Real>(n: usize, negate: bool) -> Buffer<T> {
    let sign = if negate { -T::one() } else { T::one() };
    (0..n).map(|i| sign * T::from_len(i)).collect()
}

/// Panic unless `actual` and `expected` agree elementwise within `tol`.
pub fn assert_all_close<T: Real>(actual: &[T], expected: &[T], tol: T) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: got {}, expected {}",
        actual.len(),
        expected.len()
    );
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "element {i}: found {a}, expected {e} (tol {tol})"
        );
    }
}
