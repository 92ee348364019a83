//! Reference backing implementations.
//!
//! These stores satisfy the primitive contracts in [`crate::contract`] and check every
//! precondition, returning a [`BackingError`] when one is violated. They are useful on their
//! own as in-memory stores, as replay targets for a journal of primitive edits, and as the
//! inner store of a recorder in tests.
//!
//! # Core Types
//!
//! - [`VecStore`] - an in-memory [`Sequence`](crate::Sequence)
//! - [`MapStore`] - an in-memory, key-ordered [`Mapping`](crate::Mapping)
//! - [`SequenceRecorder`] / [`MapRecorder`] - wrappers that journal each accepted primitive
//! - [`SequenceOp`] / [`MapOp`] - the journal entries, replayable onto any store

pub mod errors;
pub mod map_store;
pub mod ops;
pub mod recorder;
pub mod vec_store;

pub use errors::BackingError;
pub use map_store::MapStore;
pub use ops::{MapOp, SequenceOp};
pub use recorder::{MapRecorder, SequenceRecorder};
pub use vec_store::VecStore;
