//! Error types for collection operations.

use thiserror::Error;

/// Reasons a collection operation is rejected.
///
/// All variants are recoverable; the collection is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The entry is already stored.
    #[error("\"{0}\" is already in the collection")]
    Duplicate(String),

    /// The collection has reached its capacity.
    #[error("collection is full (capacity {capacity})")]
    Full {
        /// Maximum number of entries the collection accepts
        capacity: usize,
    },

    /// No stored entry equals the given value.
    #[error("\"{0}\" is not in the collection")]
    NotFound(String),
}

/// A specialized `Result` type for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
