//! In-memory sequence store.

use serde::{Deserialize, Serialize};

use super::BackingError;
use crate::{AppendOnlySequence, Result, Sequence};

/// A `Vec`-backed [`Sequence`] that rejects out-of-bounds primitives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VecStore<T> {
    items: Vec<T>,
}

impl<T> Default for VecStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VecStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The stored elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the store has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the store and return its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn check_index(&self, operation: &'static str, index: usize, limit: usize) -> Result<()> {
        if index < limit {
            return Ok(());
        }
        Err(BackingError::IndexOutOfBounds {
            operation,
            index,
            len: self.items.len(),
        }
        .into())
    }
}

impl<T> From<Vec<T>> for VecStore<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for VecStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> AppendOnlySequence<T> for VecStore<T> {
    fn elements(&self) -> Result<Vec<T>> {
        Ok(self.items.clone())
    }

    fn append(&mut self, value: &T) -> Result<()> {
        self.items.push(value.clone());
        Ok(())
    }
}

impl<T: Clone> Sequence<T> for VecStore<T> {
    fn set(&mut self, index: usize, value: &T) -> Result<()> {
        self.check_index("set", index, self.items.len())?;
        self.items[index] = value.clone();
        Ok(())
    }

    fn insert(&mut self, index: usize, value: &T) -> Result<()> {
        self.check_index("insert", index, self.items.len() + 1)?;
        self.items.insert(index, value.clone());
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        self.check_index("delete", index, self.items.len())?;
        self.items.remove(index);
        Ok(())
    }
}
