//! Primitive mutation contracts that backing implementations satisfy.
//!
//! A backing implementation is the source of truth for a view. It only has to understand
//! a narrow vocabulary of edits; the views in [`crate::view`] translate every richer
//! mutation into these calls. The views guarantee the stated preconditions before
//! calling, so an implementation may treat a violated precondition as a bug and return
//! an error (see [`crate::backing::BackingError`]).
//!
//! # Examples
//!
//! ```
//! use tether::{AppendOnlySequence, Result};
//!
//! struct Log(Vec<String>);
//!
//! impl AppendOnlySequence<String> for Log {
//!     fn elements(&self) -> Result<Vec<String>> {
//!         Ok(self.0.clone())
//!     }
//!
//!     fn append(&mut self, value: &String) -> Result<()> {
//!         self.0.push(value.clone());
//!         Ok(())
//!     }
//! }
//! ```

use crate::Result;

/// A sequence store whose only mutation is "append to the end".
pub trait AppendOnlySequence<T> {
    /// Returns every element, in order.
    ///
    /// Called once when a view is built; the view seeds its native snapshot from it.
    fn elements(&self) -> Result<Vec<T>>;

    /// Inserts an element at the end of the sequence.
    fn append(&mut self, value: &T) -> Result<()>;
}

/// A fully mutable sequence store.
///
/// The view never calls these with an index outside the documented bounds.
pub trait Sequence<T>: AppendOnlySequence<T> {
    /// Replaces the element at `index`, where `index < len`.
    fn set(&mut self, index: usize, value: &T) -> Result<()>;

    /// Inserts an element before position `index`, where `index <= len`.
    fn insert(&mut self, index: usize, value: &T) -> Result<()>;

    /// Removes the element at `index`, where `index < len`.
    fn delete(&mut self, index: usize) -> Result<()>;
}

/// A key-value store.
///
/// Iteration order of [`Mapping::elements`] is unspecified.
pub trait Mapping<K, V> {
    /// Returns every key-value pair, in any order.
    fn elements(&self) -> Result<Vec<(K, V)>>;

    /// Adds a field that is not already present.
    fn add(&mut self, key: &K, value: &V) -> Result<()>;

    /// Updates a field that is already present.
    fn update(&mut self, key: &K, value: &V) -> Result<()>;

    /// Removes a field that is already present.
    fn delete(&mut self, key: &K) -> Result<()>;
}

impl<T, B: AppendOnlySequence<T> + ?Sized> AppendOnlySequence<T> for &mut B {
    fn elements(&self) -> Result<Vec<T>> {
        (**self).elements()
    }

    fn append(&mut self, value: &T) -> Result<()> {
        (**self).append(value)
    }
}

impl<T, B: Sequence<T> + ?Sized> Sequence<T> for &mut B {
    fn set(&mut self, index: usize, value: &T) -> Result<()> {
        (**self).set(index, value)
    }

    fn insert(&mut self, index: usize, value: &T) -> Result<()> {
        (**self).insert(index, value)
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        (**self).delete(index)
    }
}

impl<K, V, B: Mapping<K, V> + ?Sized> Mapping<K, V> for &mut B {
    fn elements(&self) -> Result<Vec<(K, V)>> {
        (**self).elements()
    }

    fn add(&mut self, key: &K, value: &V) -> Result<()> {
        (**self).add(key, value)
    }

    fn update(&mut self, key: &K, value: &V) -> Result<()> {
        (**self).update(key, value)
    }

    fn delete(&mut self, key: &K) -> Result<()> {
        (**self).delete(key)
    }
}

impl<T, B: AppendOnlySequence<T> + ?Sized> AppendOnlySequence<T> for Box<B> {
    fn elements(&self) -> Result<Vec<T>> {
        (**self).elements()
    }

    fn append(&mut self, value: &T) -> Result<()> {
        (**self).append(value)
    }
}

impl<T, B: Sequence<T> + ?Sized> Sequence<T> for Box<B> {
    fn set(&mut self, index: usize, value: &T) -> Result<()> {
        (**self).set(index, value)
    }

    fn insert(&mut self, index: usize, value: &T) -> Result<()> {
        (**self).insert(index, value)
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        (**self).delete(index)
    }
}

impl<K, V, B: Mapping<K, V> + ?Sized> Mapping<K, V> for Box<B> {
    fn elements(&self) -> Result<Vec<(K, V)>> {
        (**self).elements()
    }

    fn add(&mut self, key: &K, value: &V) -> Result<()> {
        (**self).add(key, value)
    }

    fn update(&mut self, key: &K, value: &V) -> Result<()> {
        (**self).update(key, value)
    }

    fn delete(&mut self, key: &K) -> Result<()> {
        (**self).delete(key)
    }
}
