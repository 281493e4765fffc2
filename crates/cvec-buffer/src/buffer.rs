//! The growable real buffer.
//!
//! [`Buffer`] keeps its length and its policy capacity next to the
//! storage in one owned value. Dropping the buffer (or calling
//! [`Buffer::free`]) releases both.

use std::fmt;
use std::ops::{Index, IndexMut};

use cvec_core::{Real, Result, VectorError};
use tracing::trace;

use crate::policy::GrowthPolicy;

/// A contiguous, growable sequence of reals with tracked capacity.
///
/// Invariants:
/// - `len() <= capacity()`.
/// - A null buffer has `len() == capacity() == 0` and owns no allocation.
/// - The backing `Vec` always has room for `capacity()` elements, so
///   writes up to `capacity()` never reallocate.
///
/// Fresh slots are zero-initialised; there is no uninitialised state.
pub struct Buffer<T> {
    /// Element storage. `data.len()` is the buffer length.
    data: Vec<T>,
    /// Slots granted by the growth policy. `data.capacity() >= capacity`.
    capacity: usize,
    policy: GrowthPolicy,
    /// Reallocations performed since creation (or the last `free`).
    growths: usize,
}

impl<T: Real> Buffer<T> {
    /// Create a null buffer: no storage, length and capacity 0.
    pub fn null() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Create a null buffer that grows according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            policy,
            growths: 0,
        }
    }

    /// Create a buffer of length `n` with zeroed contents.
    ///
    /// `new(0)` is the null buffer.
    pub fn new(n: usize) -> Self {
        Self::new_with_const(T::zero(), n)
    }

    /// Create a buffer of length `n` with every element set to `c`.
    pub fn new_with_const(c: T, n: usize) -> Self {
        let mut buf = Self::null();
        buf.grow_to(n);
        buf.data.resize(n, c);
        buf
    }

    /// Create a buffer holding a copy of `src`.
    pub fn new_from_array(src: &[T]) -> Self {
        let mut buf = Self::null();
        buf.grow_to(src.len());
        buf.data.extend_from_slice(src);
        buf
    }

    /// Create an independent copy of `src` with the same length,
    /// contents, and growth policy.
    pub fn new_from_copy(src: &Buffer<T>) -> Self {
        let mut buf = Self::with_policy(src.policy());
        buf.grow_to(src.len());
        buf.data.extend_from_slice(src.as_slice());
        buf
    }

    /// Create a buffer holding `start, start + step, …` for every value
    /// strictly below `end`.
    ///
    /// The k-th element is computed as `start + k * step`, so long ranges
    /// do not accumulate rounding from repeated addition. Elements are
    /// appended one at a time and exercise the growth policy.
    ///
    /// The result is strictly increasing. Once the precision runs out
    /// (for `f32`, counts past 2^24) and the next value would not exceed
    /// the last one, the range stops there.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidRange`] if `start` or `end` is not finite, or
    /// `step` is not finite and positive.
    pub fn new_from_range(start: T, end: T, step: T) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || !step.is_finite() || step <= T::zero() {
            return Err(VectorError::InvalidRange);
        }
        let mut buf = Self::null();
        let mut k = 0usize;
        loop {
            let value = start + step * T::from_len(k);
            if value.is_nan() || value >= end {
                break;
            }
            if buf.data.last().is_some_and(|&last| value <= last) {
                break;
            }
            buf.push(value);
            k += 1;
        }
        Ok(buf)
    }

    /// Append `value`, consuming the buffer and returning it.
    ///
    /// The returned buffer may live at a different address; the moved-in
    /// value is gone, so nothing can observe the old storage.
    #[must_use = "append consumes the buffer and returns the grown one"]
    pub fn append(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Append `value` at index `len()`, growing storage first if full.
    pub fn push(&mut self, value: T) {
        let len = self.data.len();
        if len + 1 > self.capacity {
            self.grow(1);
        }
        self.data.push(value);
    }

    /// Make room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.grow(additional);
    }

    /// Force the length to `n`, growing storage if needed.
    ///
    /// New slots are zeroed. Capacity never shrinks.
    ///
    /// # Errors
    ///
    /// [`VectorError::Truncation`] if `n` is below the current length;
    /// the buffer is left unchanged. Shortening is not part of this
    /// operation's contract.
    pub fn set_capacity(&mut self, n: usize) -> Result<()> {
        let length = self.data.len();
        if n < length {
            return Err(VectorError::Truncation {
                requested: n,
                length,
            });
        }
        self.grow_to(n);
        self.data.resize(n, T::zero());
        Ok(())
    }

    /// Release all storage. The buffer becomes null.
    ///
    /// Freeing a null buffer does nothing. The growth policy is kept and
    /// the growth counter restarts.
    pub fn free(&mut self) {
        self.data = Vec::new();
        self.capacity = 0;
        self.growths = 0;
    }

    /// Number of valid elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Slots available before the next reallocation.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the buffer owns no storage at all.
    pub fn is_null(&self) -> bool {
        self.capacity == 0
    }

    /// The policy used when this buffer grows.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Reallocations performed since creation or the last [`free`](Self::free).
    pub fn growth_count(&self) -> usize {
        self.growths
    }

    /// Bytes reserved for elements (`capacity × size_of::<T>()`).
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }

    /// Shared view of the valid elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the valid elements. The length cannot change
    /// through a slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Address of the first element, for identity checks.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Copy the elements into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    fn grow(&mut self, additional: usize) {
        self.grow_to(self.data.len().saturating_add(additional));
    }

    fn grow_to(&mut self, needed: usize) {
        if needed <= self.capacity {
            return;
        }
        let old = self.capacity;
        let new_capacity = self.policy.next_capacity(old, needed);
        // Allocation failure aborts inside the allocator.
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
        self.growths += 1;
        trace!(
            precision = T::NAME,
            len = self.data.len(),
            from = old,
            to = new_capacity,
            "buffer grown"
        );
    }
}

impl<T: Real> Default for Buffer<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Real> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Self::new_from_copy(self)
    }
}

impl<T: Real> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Real> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Real> Index<usize> for Buffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Real> IndexMut<usize> for Buffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Real> From<&[T]> for Buffer<T> {
    fn from(src: &[T]) -> Self {
        Self::new_from_array(src)
    }
}

impl<T: Real> Extend<T> for Buffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Real> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::null();
        buf.extend(iter);
        buf
    }
}

impl<'a, T: Real> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
