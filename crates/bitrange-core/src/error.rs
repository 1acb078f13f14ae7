//! Error types for range operations.

use thiserror::Error;

/// Rejection of a range request. Raised before any word is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `start + length` exceeds the store's capacity (or overflows `usize`).
    #[error("{start} + {length} > {capacity}: range out of bounds")]
    OutOfBounds {
        start: usize,
        length: usize,
        capacity: usize,
    },
}
