//! Level-1 BLAS style update: `y ← a·x + y`.

use cvec_buffer::Buffer;
use cvec_core::{Real, Result};

use crate::check::same_len;

/// In place, `y[i] = a * x[i] + y[i]`.
///
/// `a == 1` and `a == -1` take multiply-free paths (`y + x` and `y - x`).
/// Both give the same result as the general loop, since multiplying by
/// ±1 is exact.
pub fn axpy<T: Real>(a: T, x: &Buffer<T>, y: &mut Buffer<T>) -> Result<()> {
    same_len("axpy", x.len(), y.len())?;
    let pairs = y.iter_mut().zip(x.iter());
    if a == T::one() {
        for (yi, &xi) in pairs {
            *yi = xi + *yi;
        }
    } else if a == -T::one() {
        for (yi, &xi) in pairs {
            *yi = *yi - xi;
        }
    } else {
        for (yi, &xi) in pairs {
            *yi = a * xi + *yi;
        }
    }
    Ok(())
}

/// Allocate a copy of `y`, then apply [`axpy`] to it.
pub fn new_from_axpy<T: Real>(a: T, x: &Buffer<T>, y: &Buffer<T>) -> Result<Buffer<T>> {
    same_len("axpy", x.len(), y.len())?;
    let mut z = Buffer::new_from_copy(y);
    axpy(a, x, &mut z)?;
    Ok(z)
}
