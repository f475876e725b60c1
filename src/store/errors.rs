//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by collection operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record with the requested id
    #[error("movie not found")]
    NotFound,

    /// Collection lock poisoned by a panicked holder
    #[error("internal store error: {0}")]
    Internal(String),
}
