//! Error types for view operations.
//!
//! A `ViewError` is always raised before any backing call or native write, so the view
//! and its backing store are untouched and the view stays usable.

use thiserror::Error;

/// Structured error types for mutations a view refuses.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ViewError {
    /// The mutation has no translation for this kind of view
    #[error("Unsupported mutation '{operation}' on {view}: {detail}")]
    UnsupportedMutation {
        view: &'static str,
        operation: &'static str,
        detail: String,
    },

    /// The index falls outside the range the operation accepts
    #[error("Index {index} out of range for '{operation}' on {view} of length {len}")]
    IndexOutOfRange {
        view: &'static str,
        operation: &'static str,
        index: usize,
        len: usize,
    },
}

impl ViewError {
    pub(crate) fn unsupported(
        view: &'static str,
        operation: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        ViewError::UnsupportedMutation {
            view,
            operation,
            detail: detail.into(),
        }
    }

    pub(crate) fn out_of_range(
        view: &'static str,
        operation: &'static str,
        index: usize,
        len: usize,
    ) -> Self {
        ViewError::IndexOutOfRange {
            view,
            operation,
            index,
            len,
        }
    }

    /// Check if this error is a rejected mutation.
    ///
    /// Out-of-range assignments count as unsupported mutations too: the view has no
    /// primitive edit that expresses them.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            ViewError::UnsupportedMutation { .. } | ViewError::IndexOutOfRange { .. }
        )
    }

    /// Check if this error reports an out-of-range index
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ViewError::IndexOutOfRange { .. })
    }

    /// Get the rejected operation name
    pub fn operation(&self) -> &str {
        match self {
            ViewError::UnsupportedMutation { operation, .. }
            | ViewError::IndexOutOfRange { operation, .. } => *operation,
        }
    }

    /// Get the kind of view that raised the error
    pub fn view(&self) -> &str {
        match self {
            ViewError::UnsupportedMutation { view, .. } | ViewError::IndexOutOfRange { view, .. } => {
                *view
            }
        }
    }

    /// Get the offending index if this is an index-related error
    pub fn index(&self) -> Option<usize> {
        match self {
            ViewError::IndexOutOfRange { index, .. } => Some(*index),
            _ => None,
        }
    }
}

// Conversion from ViewError to the main Error type
impl From<ViewError> for crate::Error {
    fn from(err: ViewError) -> Self {
        crate::Error::View(err)
    }
}
