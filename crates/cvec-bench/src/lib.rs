//! Benchmark profiles for the cvec numeric-vector runtime.
//!
//! Provides deterministic inputs so every benchmark run measures the
//! same work:
//!
//! - [`vector_pair`]: two random buffers of equal length
//! - [`random_matrix`]: a random `rows × cols` matrix

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cvec_buffer::Buffer;
use cvec_core::Real;
use cvec_matrix::Matrix;
use cvec_test_utils::{random_buffer, seeded_rng};

/// Lengths every vector benchmark is run at.
pub const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

/// Two random buffers of length `n` in `[-1, 1)`, seeded from `seed`.
pub fn vector_pair<T: Real>(n: usize, seed: u64) -> (Buffer<T>, Buffer<T>) {
    let mut rng = seeded_rng(seed);
    let x = random_buffer(&mut rng, n, -1.0, 1.0);
    let y = random_buffer(&mut rng, n, -1.0, 1.0);
    (x, y)
}

/// A random `rows × cols` matrix in `[-1, 1)`, seeded from `seed`.
pub fn random_matrix<T: Real>(rows: usize, cols: usize, seed: u64) -> Matrix<T> {
    let mut rng = seeded_rng(seed);
    let mut m = Matrix::new(rows, cols);
    for i in 0..rows {
        let row: Buffer<T> = random_buffer(&mut rng, cols, -1.0, 1.0);
        m.row_mut(i).copy_from_slice(row.as_slice());
    }
    m
}
