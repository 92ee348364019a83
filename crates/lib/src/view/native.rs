//! Native-shaped storage behind each view.
//!
//! Every structural write to a view's storage passes through one of the traps here. A trap
//! only writes while forwarding is suppressed, i.e. while the owning view is applying an edit
//! it has already reported to the backing store. Any other write is rejected, which is also
//! how the append-only view refuses index assignment.

use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};

use super::{ViewError, forwarding::Forwarding};
use crate::Result;

/// Ordered storage for the sequence views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NativeSeq<T> {
    view: &'static str,
    items: Vec<T>,
}

impl<T> NativeSeq<T> {
    pub(crate) fn new(view: &'static str, items: Vec<T>) -> Self {
        Self { view, items }
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn admit(
        &self,
        forwarding: &Forwarding,
        operation: &'static str,
        detail: impl FnOnce() -> String,
    ) -> Result<()> {
        if forwarding.is_suppressed() {
            return Ok(());
        }
        let detail = detail();
        tracing::debug!(view = self.view, operation, %detail, "Rejected direct write");
        Err(ViewError::unsupported(self.view, operation, detail).into())
    }

    /// Index assignment trap. Replaces an element below `len`, or grows by one at `len`.
    pub(crate) fn write(&mut self, forwarding: &Forwarding, index: usize, value: T) -> Result<()> {
        self.admit(forwarding, "set", || {
            format!("cannot assign index {index} directly")
        })?;
        let len = self.items.len();
        if index < len {
            self.items[index] = value;
        } else if index == len {
            self.items.push(value);
        } else {
            return Err(ViewError::out_of_range(self.view, "set", index, len).into());
        }
        Ok(())
    }

    /// Positional insertion trap, `index <= len`.
    pub(crate) fn insert(&mut self, forwarding: &Forwarding, index: usize, value: T) -> Result<()> {
        self.admit(forwarding, "insert", || {
            format!("cannot insert at index {index} directly")
        })?;
        let len = self.items.len();
        if index > len {
            return Err(ViewError::out_of_range(self.view, "insert", index, len).into());
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Positional removal trap, `index < len`.
    pub(crate) fn remove(&mut self, forwarding: &Forwarding, index: usize) -> Result<T> {
        self.admit(forwarding, "remove", || {
            format!("cannot remove index {index} directly")
        })?;
        let len = self.items.len();
        if index >= len {
            return Err(ViewError::out_of_range(self.view, "remove", index, len).into());
        }
        Ok(self.items.remove(index))
    }
}

/// Insertion-ordered storage for the map view.
#[derive(Debug, Clone)]
pub(crate) struct NativeMap<K, V> {
    view: &'static str,
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> NativeMap<K, V> {
    pub(crate) fn new(view: &'static str, entries: IndexMap<K, V>) -> Self {
        Self { view, entries }
    }

    pub(crate) fn entries(&self) -> &IndexMap<K, V> {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> IndexMap<K, V> {
        self.entries
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.contains_key(key)
    }

    fn admit(&self, forwarding: &Forwarding, operation: &'static str) -> Result<()> {
        if forwarding.is_suppressed() {
            return Ok(());
        }
        tracing::debug!(view = self.view, operation, "Rejected direct write");
        Err(ViewError::unsupported(
            self.view,
            operation,
            "fields can only change through the view",
        )
        .into())
    }

    /// Field definition trap. Adds the key at the end, or overwrites in place.
    pub(crate) fn define(&mut self, forwarding: &Forwarding, key: K, value: V) -> Result<Option<V>> {
        self.admit(forwarding, "define")?;
        Ok(self.entries.insert(key, value))
    }

    /// Field deletion trap. Keeps the order of the remaining keys.
    pub(crate) fn undefine<Q>(&mut self, forwarding: &Forwarding, key: &Q) -> Result<Option<V>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.admit(forwarding, "undefine")?;
        Ok(self.entries.shift_remove(key))
    }
}
