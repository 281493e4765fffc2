//! Elementwise arithmetic.
//!
//! Each result element depends only on the input elements at the same
//! index, so the in-place (`_assign`) forms produce exactly what the
//! write-into forms would with the destination aliasing `x`.

use cvec_buffer::Buffer;
use cvec_core::{Real, Result};

use crate::check::same_len;

fn zip_into<T: Real>(
    op: &'static str,
    x: &Buffer<T>,
    y: &Buffer<T>,
    z: &mut Buffer<T>,
    f: impl Fn(T, T) -> T,
) -> Result<()> {
    same_len(op, x.len(), y.len())?;
    same_len(op, x.len(), z.len())?;
    for ((out, &a), &b) in z.iter_mut().zip(x.iter()).zip(y.iter()) {
        *out = f(a, b);
    }
    Ok(())
}

fn zip_assign<T: Real>(
    op: &'static str,
    x: &mut Buffer<T>,
    y: &Buffer<T>,
    f: impl Fn(T, T) -> T,
) -> Result<()> {
    same_len(op, x.len(), y.len())?;
    for (a, &b) in x.iter_mut().zip(y.iter()) {
        *a = f(*a, b);
    }
    Ok(())
}

fn map_into<T: Real>(
    op: &'static str,
    x: &Buffer<T>,
    z: &mut Buffer<T>,
    f: impl Fn(T) -> T,
) -> Result<()> {
    same_len(op, x.len(), z.len())?;
    for (out, &a) in z.iter_mut().zip(x.iter()) {
        *out = f(a);
    }
    Ok(())
}

fn map_assign<T: Real>(x: &mut Buffer<T>, f: impl Fn(T) -> T) {
    for a in x.iter_mut() {
        *a = f(*a);
    }
}

// ── Product ────────────────────────────────────────────────────────

/// `z[i] = x[i] * y[i]`.
pub fn prod<T: Real>(x: &Buffer<T>, y: &Buffer<T>, z: &mut Buffer<T>) -> Result<()> {
    zip_into("prod", x, y, z, |a, b| a * b)
}

/// `x[i] = x[i] * y[i]`.
pub fn prod_assign<T: Real>(x: &mut Buffer<T>, y: &Buffer<T>) -> Result<()> {
    zip_assign("prod", x, y, |a, b| a * b)
}

/// Allocate `z` with `z[i] = x[i] * y[i]`.
pub fn new_from_prod<T: Real>(x: &Buffer<T>, y: &Buffer<T>) -> Result<Buffer<T>> {
    let mut z = Buffer::new(x.len());
    prod(x, y, &mut z)?;
    Ok(z)
}

// ── Division ───────────────────────────────────────────────────────

/// `z[i] = x[i] / y[i]`. A zero divisor yields ±infinity or NaN.
pub fn div<T: Real>(x: &Buffer<T>, y: &Buffer<T>, z: &mut Buffer<T>) -> Result<()> {
    zip_into("div", x, y, z, |a, b| a / b)
}

/// `x[i] = x[i] / y[i]`.
pub fn div_assign<T: Real>(x: &mut Buffer<T>, y: &Buffer<T>) -> Result<()> {
    zip_assign("div", x, y, |a, b| a / b)
}

/// Allocate `z` with `z[i] = x[i] / y[i]`.
pub fn new_from_div<T: Real>(x: &Buffer<T>, y: &Buffer<T>) -> Result<Buffer<T>> {
    let mut z = Buffer::new(x.len());
    div(x, y, &mut z)?;
    Ok(z)
}

// ── Absolute value ─────────────────────────────────────────────────

/// `z[i] = |x[i]|`.
pub fn abs<T: Real>(x: &Buffer<T>, z: &mut Buffer<T>) -> Result<()> {
    map_into("abs", x, z, T::abs)
}

/// `x[i] = |x[i]|`.
pub fn abs_assign<T: Real>(x: &mut Buffer<T>) {
    map_assign(x, T::abs);
}

/// Allocate `z` with `z[i] = |x[i]|`.
pub fn new_from_abs<T: Real>(x: &Buffer<T>) -> Buffer<T> {
    let mut z = Buffer::new_from_copy(x);
    abs_assign(&mut z);
    z
}

// ── Inverse ────────────────────────────────────────────────────────

/// `z[i] = 1 / x[i]`. Zero maps to ±infinity.
pub fn inv<T: Real>(x: &Buffer<T>, z: &mut Buffer<T>) -> Result<()> {
    map_into("inv", x, z, T::recip)
}

/// `x[i] = 1 / x[i]`.
pub fn inv_assign<T: Real>(x: &mut Buffer<T>) {
    map_assign(x, T::recip);
}

/// Allocate `z` with `z[i] = 1 / x[i]`.
pub fn new_from_inv<T: Real>(x: &Buffer<T>) -> Buffer<T> {
    let mut z = Buffer::new_from_copy(x);
    inv_assign(&mut z);
    z
}

// ── Constant add ───────────────────────────────────────────────────

/// `z[i] = x[i] + b`.
pub fn add_const<T: Real>(x: &Buffer<T>, b: T, z: &mut Buffer<T>) -> Result<()> {
    map_into("add_const", x, z, |a| a + b)
}

/// `x[i] = x[i] + b`.
pub fn add_const_assign<T: Real>(x: &mut Buffer<T>, b: T) {
    map_assign(x, |a| a + b);
}

/// Allocate `z` with `z[i] = x[i] + b`.
pub fn new_from_add_const<T: Real>(x: &Buffer<T>, b: T) -> Buffer<T> {
    let mut z = Buffer::new_from_copy(x);
    add_const_assign(&mut z, b);
    z
}

// ── Scaling ────────────────────────────────────────────────────────

/// In place, `x[i] = a * x[i]`.
pub fn scale_by<T: Real>(a: T, x: &mut Buffer<T>) {
    map_assign(x, |v| v * a);
}

/// Allocate a copy of `x` scaled by `a`.
pub fn new_from_scale_by<T: Real>(a: T, x: &Buffer<T>) -> Buffer<T> {
    let mut z = Buffer::new_from_copy(x);
    scale_by(a, &mut z);
    z
}

/// In place, `x[i] = x[i]²`.
pub fn square<T: Real>(x: &mut Buffer<T>) {
    map_assign(x, |v| v * v);
}

/// Allocate a copy of `x` with every element squared.
pub fn new_from_square<T: Real>(x: &Buffer<T>) -> Buffer<T> {
    let mut z = Buffer::new_from_copy(x);
    square(&mut z);
    z
}
