//! Shared precondition checks.

use cvec_core::{Result, VectorError};
use tracing::debug;

/// Fail with `LengthMismatch` unless `found == expected`.
pub(crate) fn same_len(op: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        return Ok(());
    }
    debug!(op, expected, found, "rejected: length mismatch");
    Err(VectorError::LengthMismatch {
        op,
        expected,
        found,
    })
}

/// Fail with `EmptyInput` if `len == 0`.
pub(crate) fn non_empty(op: &'static str, len: usize) -> Result<()> {
    if len > 0 {
        return Ok(());
    }
    debug!(op, "rejected: empty input");
    Err(VectorError::EmptyInput { op })
}
