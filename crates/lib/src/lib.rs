//!
//! Tether: containers that look native but report every mutation to a backing store.
//! This library provides sequence and map views whose mutations are translated into a
//! small vocabulary of primitive edits and forwarded to a caller-supplied implementation.
//!
//! ## Core Concepts
//!
//! * **Backing implementations (`contract`)**: The caller-supplied store that is the source of truth.
//!   It understands only primitive edits:
//!     * **AppendOnlySequence (`contract::AppendOnlySequence`)**: `append`.
//!     * **Sequence (`contract::Sequence`)**: `set`, `insert`, `delete` on top of `append`.
//!     * **Mapping (`contract::Mapping`)**: `add`, `update`, `delete`.
//! * **Views (`view`)**: Native-shaped containers seeded from the backing store's elements and kept
//!   in lockstep with it. Every mutating method forwards exactly one primitive per logical change
//!   before the change becomes visible:
//!     * **AppendOnlyView (`view::AppendOnlyView`)**: only end-insertion is legal.
//!     * **ListView (`view::ListView`)**: index assignment, end/front insertion and removal.
//!     * **MapView (`view::MapView`)**: add/update/remove of keys.
//! * **Reference stores (`backing`)**: In-memory backing implementations that enforce every
//!   precondition, plus recorders (`SequenceRecorder`, `MapRecorder`) that journal the primitive
//!   calls they see.
//! * **Configuration (`config`)**: Per-view options such as the policy for assignments past the end.

pub mod backing;
pub mod config;
pub mod contract;
pub mod view;

pub use config::{GapPolicy, ViewConfig};
pub use contract::{AppendOnlySequence, Mapping, Sequence};
pub use view::{AppendOnlyView, ListView, MapView, StructuralOp};

/// Result type used throughout the Tether library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Tether library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured view errors: a mutation the view refuses to translate
    #[error(transparent)]
    View(view::ViewError),

    /// Structured errors raised by a backing implementation
    #[error(transparent)]
    Backing(backing::BackingError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::View(_) => "view",
            Error::Backing(_) => "backing",
        }
    }

    /// Check if this error is a rejected mutation (the view never touched the backing store).
    pub fn is_unsupported_mutation(&self) -> bool {
        match self {
            Error::View(view_err) => view_err.is_unsupported(),
            _ => false,
        }
    }

    /// Check if this error reports an index outside the range the operation accepts.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::View(view_err) => view_err.is_out_of_range(),
            Error::Backing(backing_err) => backing_err.is_out_of_bounds(),
        }
    }

    /// Check if this error indicates a missing key or element.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Backing(backing_err) => backing_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (key already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Backing(backing_err) => backing_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error came from the backing implementation.
    pub fn is_backing_error(&self) -> bool {
        matches!(self, Error::Backing(_))
    }

    /// Check if this error came from the view layer.
    pub fn is_view_error(&self) -> bool {
        matches!(self, Error::View(_))
    }
}
