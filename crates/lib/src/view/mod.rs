//! Native-shaped views over backing implementations.
//!
//! A view is a cache of its backing store's elements that exposes the usual container read
//! surface and a mutation surface of explicit methods. Each mutating method decides which
//! primitive edit(s) to forward, forwards them, and only then applies the change natively.
//! Rejected mutations forward nothing and change nothing.
//!
//! # Core Types
//!
//! - [`AppendOnlyView`] - sequence that only grows at the end
//! - [`ListView`] - sequence with assignment, insertion and removal at either end
//! - [`MapView`] - insertion-ordered key-value map

pub mod append_only;
pub mod errors;
pub(crate) mod forwarding;
pub mod list;
pub mod map;
pub(crate) mod native;
pub(crate) mod sequence;

pub use append_only::AppendOnlyView;
pub use errors::ViewError;
pub use list::ListView;
pub use map::{MapView, StructuralOp};
