//! Journaling wrappers around backing implementations.
//!
//! A recorder forwards every primitive to its inner store and, when the inner store accepts
//! it, appends a matching [`SequenceOp`] or [`MapOp`] to its journal. Rejected calls are not
//! journaled, so the journal always replays to the inner store's state.

use super::{MapOp, SequenceOp};
use crate::{AppendOnlySequence, Mapping, Result, Sequence};

/// Journals the primitives accepted by a sequence store.
#[derive(Debug, Clone, Default)]
pub struct SequenceRecorder<T, B> {
    inner: B,
    ops: Vec<SequenceOp<T>>,
}

impl<T, B> SequenceRecorder<T, B> {
    /// Wrap `inner` with an empty journal.
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            ops: Vec::new(),
        }
    }

    /// Accepted primitives, in call order.
    pub fn ops(&self) -> &[SequenceOp<T>] {
        &self.ops
    }

    /// Number of accepted primitives with the given name (`"append"`, `"set"`, ...).
    pub fn count(&self, name: &str) -> usize {
        self.ops.iter().filter(|op| op.name() == name).count()
    }

    /// Drain the journal.
    pub fn take_ops(&mut self) -> Vec<SequenceOp<T>> {
        std::mem::take(&mut self.ops)
    }

    /// The wrapped store.
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Drop the journal and return the wrapped store.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<T: Clone, B: AppendOnlySequence<T>> AppendOnlySequence<T> for SequenceRecorder<T, B> {
    fn elements(&self) -> Result<Vec<T>> {
        self.inner.elements()
    }

    fn append(&mut self, value: &T) -> Result<()> {
        self.inner.append(value)?;
        self.ops.push(SequenceOp::Append(value.clone()));
        Ok(())
    }
}

impl<T: Clone, B: Sequence<T>> Sequence<T> for SequenceRecorder<T, B> {
    fn set(&mut self, index: usize, value: &T) -> Result<()> {
        self.inner.set(index, value)?;
        self.ops.push(SequenceOp::Set(index, value.clone()));
        Ok(())
    }

    fn insert(&mut self, index: usize, value: &T) -> Result<()> {
        self.inner.insert(index, value)?;
        self.ops.push(SequenceOp::Insert(index, value.clone()));
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        self.inner.delete(index)?;
        self.ops.push(SequenceOp::Delete(index));
        Ok(())
    }
}

/// Journals the primitives accepted by a key-value store.
#[derive(Debug, Clone, Default)]
pub struct MapRecorder<K, V, B> {
    inner: B,
    ops: Vec<MapOp<K, V>>,
}

impl<K, V, B> MapRecorder<K, V, B> {
    /// Wrap `inner` with an empty journal.
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            ops: Vec::new(),
        }
    }

    /// Accepted primitives, in call order.
    pub fn ops(&self) -> &[MapOp<K, V>] {
        &self.ops
    }

    /// Number of accepted primitives with the given name (`"add"`, `"update"`, `"delete"`).
    pub fn count(&self, name: &str) -> usize {
        self.ops.iter().filter(|op| op.name() == name).count()
    }

    /// Drain the journal.
    pub fn take_ops(&mut self) -> Vec<MapOp<K, V>> {
        std::mem::take(&mut self.ops)
    }

    /// The wrapped store.
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Drop the journal and return the wrapped store.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<K: Clone, V: Clone, B: Mapping<K, V>> Mapping<K, V> for MapRecorder<K, V, B> {
    fn elements(&self) -> Result<Vec<(K, V)>> {
        self.inner.elements()
    }

    fn add(&mut self, key: &K, value: &V) -> Result<()> {
        self.inner.add(key, value)?;
        self.ops.push(MapOp::Add(key.clone(), value.clone()));
        Ok(())
    }

    fn update(&mut self, key: &K, value: &V) -> Result<()> {
        self.inner.update(key, value)?;
        self.ops.push(MapOp::Update(key.clone(), value.clone()));
        Ok(())
    }

    fn delete(&mut self, key: &K) -> Result<()> {
        self.inner.delete(key)?;
        self.ops.push(MapOp::Delete(key.clone()));
        Ok(())
    }
}
