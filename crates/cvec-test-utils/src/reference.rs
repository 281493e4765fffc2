//! Naive reference loops over plain slices.
//!
//! Written index-by-index without touching `cvec-ops`, so they serve as
//! an independent oracle for the optimised paths.

use cvec_core::Real;

pub fn dot<T: Real>(x: &[T], y: &[T]) -> T {
    let mut sum = T::zero();
    for i in 0..x.len() {
        sum = sum + x[i] * y[i];
    }
    sum
}

pub fn axpy<T: Real>(a: T, x: &[T], y: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(y.len());
    for i in 0..y.len() {
        out.push(a * x[i] + y[i]);
    }
    out
}

pub fn elementwise<T: Real>(x: &[T], y: &[T], f: impl Fn(T, T) -> T) -> Vec<T> {
    let mut out = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        out.push(f(x[i], y[i]));
    }
    out
}

pub fn weighted_rms<T: Real>(x: &[T], w: &[T]) -> T {
    let mut sum = T::zero();
    for i in 0..x.len() {
        let p = x[i] * w[i];
        sum = sum + p * p;
    }
    (sum / T::from_len(x.len())).sqrt()
}

pub fn scale_add<T: Real>(c: T, a: &[Vec<T>], b: &[Vec<T>]) -> Vec<Vec<T>> {
    a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| c * x + y).collect())
        .collect()
}
