//! In-memory key-value store.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use super::BackingError;
use crate::{Mapping, Result};

/// A `BTreeMap`-backed [`Mapping`] that enforces the add/update/delete preconditions.
///
/// `elements()` reports pairs in key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent, bound(deserialize = "K: Ord + Deserialize<'de>, V: Deserialize<'de>"))]
pub struct MapStore<K, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for MapStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> MapStore<K, V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored fields, in key order.
    pub fn as_map(&self) -> &BTreeMap<K, V> {
        &self.entries
    }

    /// Consume the store and return its fields.
    pub fn into_map(self) -> BTreeMap<K, V> {
        self.entries
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for MapStore<K, V> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self { entries }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MapStore<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Mapping<K, V> for MapStore<K, V>
where
    K: Ord + Clone + fmt::Debug,
    V: Clone,
{
    fn elements(&self) -> Result<Vec<(K, V)>> {
        Ok(self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn add(&mut self, key: &K, value: &V) -> Result<()> {
        if self.entries.contains_key(key) {
            return Err(BackingError::KeyExists {
                key: format!("{key:?}"),
            }
            .into());
        }
        self.entries.insert(key.clone(), value.clone());
        Ok(())
    }

    fn update(&mut self, key: &K, value: &V) -> Result<()> {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = value.clone();
                Ok(())
            }
            None => Err(BackingError::KeyNotFound {
                key: format!("{key:?}"),
            }
            .into()),
        }
    }

    fn delete(&mut self, key: &K) -> Result<()> {
        match self.entries.remove(key) {
            Some(_) => Ok(()),
            None => Err(BackingError::KeyNotFound {
                key: format!("{key:?}"),
            }
            .into()),
        }
    }
}
