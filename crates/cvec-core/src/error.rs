//! Error types for cvec.
//!
//! Every fallible buffer, vector, and matrix operation reports through
//! [`VectorError`]. Allocation failure is not represented: it aborts the
//! process, matching the global allocator's contract. Division by zero
//! is not an error either; it yields IEEE-754 infinities or NaN.

use std::error::Error;
use std::fmt;

use crate::shape::Shape;

/// Convenience alias for results carrying a [`VectorError`].
pub type Result<T> = std::result::Result<T, VectorError>;

/// Precondition violations surfaced by cvec operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// Two operands (or an operand and its destination) disagree in length.
    LengthMismatch {
        /// Name of the operation that rejected its inputs.
        op: &'static str,
        /// Length of the first operand.
        expected: usize,
        /// Length of the offending operand.
        found: usize,
    },
    /// A reduction that has no value on an empty vector.
    EmptyInput {
        /// Name of the reduction.
        op: &'static str,
    },
    /// Matrix operands are not compatible (rows and cols must both match),
    /// or a matrix was assembled from rows of unequal length.
    ShapeMismatch {
        /// Shape of the left-hand (destination) matrix.
        left: Shape,
        /// Shape of the right-hand matrix.
        right: Shape,
    },
    /// `set_capacity` was asked to shrink a buffer below its length.
    Truncation {
        /// The requested length.
        requested: usize,
        /// The buffer's current length.
        length: usize,
    },
    /// A range constructor was given a start or end bound that is not
    /// finite, or a step that is zero, negative, or not finite.
    InvalidRange,
    /// A growth policy failed validation.
    InvalidPolicy {
        /// Human-readable description of the rejected parameter.
        reason: String,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                op,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{op}: length mismatch, expected {expected} elements, found {found}"
                )
            }
            Self::EmptyInput { op } => write!(f, "{op}: undefined on an empty vector"),
            Self::ShapeMismatch { left, right } => {
                write!(f, "incompatible matrix shapes: {left} vs {right}")
            }
            Self::Truncation { requested, length } => {
                write!(
                    f,
                    "cannot set length {requested} below current length {length}"
                )
            }
            Self::InvalidRange => {
                write!(f, "range needs finite bounds and a finite, positive step")
            }
            Self::InvalidPolicy { reason } => write!(f, "invalid growth policy: {reason}"),
        }
    }
}

impl Error for VectorError {}
