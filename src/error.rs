//! Error type for the fallible store operations.
//!
//! "The value wasn't there" is not an error: misses are reported with
//! `None`/`false`. Only invalid arguments produce a `StoreError`.

use thiserror::Error;

/// Errors returned by `CompactingStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An argument was rejected before anything was modified
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Index-based removal got an index that is not below the capacity
    #[error("index {index} out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The index that was passed
        index: usize,
        /// The capacity of the store at the time of the call
        capacity: usize,
    },
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
