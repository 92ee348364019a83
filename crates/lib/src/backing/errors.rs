//! Error types for backing implementations.
//!
//! Backing implementations may return any [`crate::Error`]; the views pass it through
//! untouched. `BackingError` gives implementations a structured vocabulary for the common
//! failures, and is what the reference stores in this module return when a precondition
//! of the primitive contract is violated.

use thiserror::Error;

/// Structured error types for backing store operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackingError {
    /// An index argument violated the primitive's bounds
    #[error("Index {index} out of bounds for '{operation}' on sequence of length {len}")]
    IndexOutOfBounds {
        operation: &'static str,
        index: usize,
        len: usize,
    },

    /// `add` was called for a key that is already present
    #[error("Key already exists: {key}")]
    KeyExists { key: String },

    /// `update` or `delete` was called for a key that is not present
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// The store refused the edit for its own reasons
    #[error("Backing store rejected '{operation}': {reason}")]
    Rejected {
        operation: &'static str,
        reason: String,
    },

    /// Any other failure raised by an implementation
    #[error("Backing store failure: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BackingError {
    /// Wrap an arbitrary implementation error.
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        BackingError::Other(err.into())
    }

    /// Check if this error reports an index outside the primitive's bounds
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, BackingError::IndexOutOfBounds { .. })
    }

    /// Check if this error indicates a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackingError::KeyNotFound { .. })
    }

    /// Check if this error indicates the key already exists
    pub fn is_conflict(&self) -> bool {
        matches!(self, BackingError::KeyExists { .. })
    }

    /// Check if the store rejected the edit
    pub fn is_rejected(&self) -> bool {
        matches!(self, BackingError::Rejected { .. })
    }

    /// Get the operation name if this is an operation-specific error
    pub fn operation(&self) -> Option<&str> {
        match self {
            BackingError::IndexOutOfBounds { operation, .. }
            | BackingError::Rejected { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            BackingError::KeyExists { key } | BackingError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from BackingError to the main Error type
impl From<BackingError> for crate::Error {
    fn from(err: BackingError) -> Self {
        crate::Error::Backing(err)
    }
}
