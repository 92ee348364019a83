//! Test backing implementations that count and check every primitive call.

use std::collections::HashMap;
use std::hash::Hash;

use tether::{AppendOnlySequence, Mapping, Result, Sequence, backing::BackingError};

/// Per-primitive call counts for a sequence store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeqCounters {
    pub appends: usize,
    pub sets: usize,
    pub inserts: usize,
    pub deletes: usize,
}

impl SeqCounters {
    pub fn total(&self) -> usize {
        self.appends + self.sets + self.inserts + self.deletes
    }
}

/// A sequence store that counts calls and panics on any out-of-contract index.
///
/// Set `fail_on` to make the n-th call (0-based, across all primitives) return an error
/// without changing anything. Failed calls are not counted, so every later call fails too.
#[derive(Debug, Default)]
pub struct CountingSequence<T> {
    pub list: Vec<T>,
    pub counters: SeqCounters,
    pub fail_on: Option<usize>,
}

impl<T: Clone> CountingSequence<T> {
    pub fn new(init: &[T]) -> Self {
        Self {
            list: init.to_vec(),
            counters: SeqCounters::default(),
            fail_on: None,
        }
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    fn gate(&self, operation: &'static str) -> Result<()> {
        if self.fail_on == Some(self.counters.total()) {
            return Err(BackingError::Rejected {
                operation,
                reason: "injected failure".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl CountingSequence<&'static str> {
    /// Comma-joined contents, for comparing against a view's `to_string()`.
    pub fn joined(&self) -> String {
        self.list.join(",")
    }
}

impl<T: Clone> AppendOnlySequence<T> for CountingSequence<T> {
    fn elements(&self) -> Result<Vec<T>> {
        Ok(self.list.clone())
    }

    fn append(&mut self, value: &T) -> Result<()> {
        self.gate("append")?;
        self.list.push(value.clone());
        self.counters.appends += 1;
        Ok(())
    }
}

impl<T: Clone> Sequence<T> for CountingSequence<T> {
    fn set(&mut self, index: usize, value: &T) -> Result<()> {
        assert!(index < self.list.len(), "set({index}) on length {}", self.list.len());
        self.gate("set")?;
        self.list[index] = value.clone();
        self.counters.sets += 1;
        Ok(())
    }

    fn insert(&mut self, index: usize, value: &T) -> Result<()> {
        assert!(index <= self.list.len(), "insert({index}) on length {}", self.list.len());
        self.gate("insert")?;
        self.list.insert(index, value.clone());
        self.counters.inserts += 1;
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        assert!(index < self.list.len(), "delete({index}) on length {}", self.list.len());
        self.gate("delete")?;
        self.list.remove(index);
        self.counters.deletes += 1;
        Ok(())
    }
}

/// A sequence store that only supports appends.
#[derive(Debug, Default)]
pub struct AppendLog<T> {
    pub list: Vec<T>,
    pub appends: usize,
}

impl<T: Clone> AppendLog<T> {
    pub fn new(init: &[T]) -> Self {
        Self {
            list: init.to_vec(),
            appends: 0,
        }
    }
}

impl<T: Clone> AppendOnlySequence<T> for AppendLog<T> {
    fn elements(&self) -> Result<Vec<T>> {
        Ok(self.list.clone())
    }

    fn append(&mut self, value: &T) -> Result<()> {
        self.list.push(value.clone());
        self.appends += 1;
        Ok(())
    }
}

/// One call made to a [`CountingMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapCall<K, V> {
    Add(K, V),
    Update(K, V),
    Delete(K),
}

/// A key-value store that logs calls and panics on any violated precondition.
#[derive(Debug)]
pub struct CountingMap<K, V> {
    pub entries: HashMap<K, V>,
    pub calls: Vec<MapCall<K, V>>,
    pub fail_on: Option<usize>,
}

impl<K: Hash + Eq + Clone, V: Clone> CountingMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            calls: Vec::new(),
            fail_on: None,
        }
    }

    pub fn with_entries(pairs: &[(K, V)]) -> Self {
        let mut map = Self::new();
        map.entries.extend(pairs.iter().cloned());
        map
    }

    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    fn gate(&self, operation: &'static str) -> Result<()> {
        if self.fail_on == Some(self.calls.len()) {
            return Err(BackingError::Rejected {
                operation,
                reason: "injected failure".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Mapping<K, V> for CountingMap<K, V> {
    fn elements(&self) -> Result<Vec<(K, V)>> {
        Ok(self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn add(&mut self, key: &K, value: &V) -> Result<()> {
        assert!(!self.entries.contains_key(key), "add of an existing key");
        self.gate("add")?;
        self.entries.insert(key.clone(), value.clone());
        self.calls.push(MapCall::Add(key.clone(), value.clone()));
        Ok(())
    }

    fn update(&mut self, key: &K, value: &V) -> Result<()> {
        assert!(self.entries.contains_key(key), "update of an absent key");
        self.gate("update")?;
        self.entries.insert(key.clone(), value.clone());
        self.calls.push(MapCall::Update(key.clone(), value.clone()));
        Ok(())
    }

    fn delete(&mut self, key: &K) -> Result<()> {
        assert!(self.entries.contains_key(key), "delete of an absent key");
        self.gate("delete")?;
        self.entries.remove(key);
        self.calls.push(MapCall::Delete(key.clone()));
        Ok(())
    }
}
