//! Journal entries for primitive edits.
//!
//! A journal is the list of primitive calls a backing store accepted, in call order.
//! Replaying it onto an empty store reconstructs the same sequence or map.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MapStore, VecStore};
use crate::{Mapping, Result, Sequence};

/// One primitive edit to a sequence store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceOp<T> {
    Append(T),
    Set(usize, T),
    Insert(usize, T),
    Delete(usize),
}

impl<T> SequenceOp<T> {
    /// The primitive's name.
    pub fn name(&self) -> &'static str {
        match self {
            SequenceOp::Append(_) => "append",
            SequenceOp::Set(..) => "set",
            SequenceOp::Insert(..) => "insert",
            SequenceOp::Delete(_) => "delete",
        }
    }

    /// Re-issue this edit against `store`.
    pub fn apply_to<B: Sequence<T> + ?Sized>(&self, store: &mut B) -> Result<()> {
        match self {
            SequenceOp::Append(value) => store.append(value),
            SequenceOp::Set(index, value) => store.set(*index, value),
            SequenceOp::Insert(index, value) => store.insert(*index, value),
            SequenceOp::Delete(index) => store.delete(*index),
        }
    }
}

impl<T: Clone> SequenceOp<T> {
    /// Replay a journal onto an empty [`VecStore`].
    pub fn replay<'a, I>(ops: I) -> Result<VecStore<T>>
    where
        T: 'a,
        I: IntoIterator<Item = &'a SequenceOp<T>>,
    {
        let mut store = VecStore::new();
        for op in ops {
            op.apply_to(&mut store)?;
        }
        Ok(store)
    }
}

/// One primitive edit to a key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapOp<K, V> {
    Add(K, V),
    Update(K, V),
    Delete(K),
}

impl<K, V> MapOp<K, V> {
    /// The primitive's name.
    pub fn name(&self) -> &'static str {
        match self {
            MapOp::Add(..) => "add",
            MapOp::Update(..) => "update",
            MapOp::Delete(_) => "delete",
        }
    }

    /// The key this edit touches.
    pub fn key(&self) -> &K {
        match self {
            MapOp::Add(key, _) | MapOp::Update(key, _) | MapOp::Delete(key) => key,
        }
    }

    /// Re-issue this edit against `store`.
    pub fn apply_to<B: Mapping<K, V> + ?Sized>(&self, store: &mut B) -> Result<()> {
        match self {
            MapOp::Add(key, value) => store.add(key, value),
            MapOp::Update(key, value) => store.update(key, value),
            MapOp::Delete(key) => store.delete(key),
        }
    }
}

impl<K, V> MapOp<K, V>
where
    K: Ord + Clone + fmt::Debug,
    V: Clone,
{
    /// Replay a journal onto an empty [`MapStore`].
    pub fn replay<'a, I>(ops: I) -> Result<MapStore<K, V>>
    where
        K: 'a,
        V: 'a,
        I: IntoIterator<Item = &'a MapOp<K, V>>,
    {
        let mut store = MapStore::new();
        for op in ops {
            op.apply_to(&mut store)?;
        }
        Ok(store)
    }
}
