//! The [`Matrix`] type.

use std::fmt;
use std::ops::{Index, IndexMut};

use cvec_buffer::Buffer;
use cvec_core::{Real, Result, Shape, VectorError};
use tracing::debug;

/// A dense row-major matrix stored as one [`Buffer`] per row.
///
/// Invariant: every row has length `cols`. Mutable access goes through
/// slices, so row lengths cannot drift. The column count is stored, so
/// a matrix with zero rows still reports the `cols` it was built with.
pub struct Matrix<T> {
    rows: Vec<Buffer<T>>,
    cols: usize,
}

/// Whether `a` and `b` have the same row and column counts.
pub fn compatible<T: Real>(a: &Matrix<T>, b: &Matrix<T>) -> bool {
    a.shape() == b.shape()
}

impl<T: Real> Matrix<T> {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| Buffer::new(cols)).collect(),
            cols,
        }
    }

    /// Create the `n × n` identity matrix.
    pub fn new_identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for (i, row) in m.rows.iter_mut().enumerate() {
            row[i] = T::one();
        }
        m
    }

    /// Adopt `rows` as the rows of a new matrix.
    ///
    /// # Errors
    ///
    /// [`VectorError::ShapeMismatch`] if the rows differ in length. The
    /// left shape is the one implied by row 0; the right one uses the
    /// first row that disagrees.
    pub fn from_rows(rows: Vec<Buffer<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Buffer::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            let left = Shape::new(rows.len(), cols);
            let right = Shape::new(rows.len(), bad.len());
            debug!(%left, %right, "rejected: ragged rows");
            return Err(VectorError::ShapeMismatch { left, right });
        }
        Ok(Self { rows, cols })
    }

    /// Deep copy of `src`; no storage is shared.
    pub fn new_from_copy(src: &Matrix<T>) -> Self {
        Self {
            rows: src.rows.iter().map(Buffer::new_from_copy).collect(),
            cols: src.cols,
        }
    }

    /// Allocate `c * a + b` without touching `a`.
    ///
    /// # Errors
    ///
    /// [`VectorError::ShapeMismatch`] if `a` and `b` are not compatible.
    pub fn new_from_scale_add(c: T, a: &Matrix<T>, b: &Matrix<T>) -> Result<Self> {
        a.check_compatible(b)?;
        let mut out = Self::new_from_copy(a);
        out.scale_add(c, b)?;
        Ok(out)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row and column counts.
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols)
    }

    /// Whether the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.shape().cells() == 0
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[T] {
        self.rows[i].as_slice()
    }

    /// Row `i` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()`.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        self.rows[i].as_mut_slice()
    }

    /// Cell `(i, j)`, or `None` if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        self.rows.get(i).and_then(|r| r.as_slice().get(j)).copied()
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Buffer::as_slice)
    }

    /// Whether `other` has the same shape as `self`.
    pub fn is_compatible(&self, other: &Matrix<T>) -> bool {
        compatible(self, other)
    }

    /// In place, `self[i][j] = c * self[i][j] + b[i][j]`.
    ///
    /// # Errors
    ///
    /// [`VectorError::ShapeMismatch`] if `b` is not compatible with
    /// `self`; `self` is left unchanged.
    pub fn scale_add(&mut self, c: T, b: &Matrix<T>) -> Result<()> {
        self.check_compatible(b)?;
        for (row_a, row_b) in self.rows.iter_mut().zip(b.rows.iter()) {
            for (cell, &rhs) in row_a.iter_mut().zip(row_b.iter()) {
                *cell = c * *cell + rhs;
            }
        }
        Ok(())
    }

    /// Release every row, then the row sequence. The matrix becomes 0×0.
    pub fn free(&mut self) {
        for row in &mut self.rows {
            row.free();
        }
        self.rows = Vec::new();
        self.cols = 0;
    }

    fn check_compatible(&self, other: &Matrix<T>) -> Result<()> {
        if self.is_compatible(other) {
            return Ok(());
        }
        let (left, right) = (self.shape(), other.shape());
        debug!(%left, %right, "rejected: incompatible matrices");
        Err(VectorError::ShapeMismatch { left, right })
    }
}

impl<T: Real> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self::new_from_copy(self)
    }
}

impl<T: Real> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }
}

impl<T: Real> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape())
            .field("rows", &self.rows.iter().map(Buffer::as_slice).collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Real> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.rows[i][j]
    }
}

impl<T: Real> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.rows[i][j]
    }
}
