//! A key-value view.
//!
//! `MapView` keeps an insertion-ordered native map in step with a [`Mapping`] backing store.
//! Setting a key forwards `add` or `update` depending on whether the key is present, and
//! removing a present key forwards `delete`.

use std::{fmt, hash::Hash, ops::Index};

use indexmap::{Equivalent, IndexMap};
use serde::{Serialize, Serializer};

use super::{ViewError, forwarding::Forwarding, native::NativeMap};
use crate::{Mapping, Result};

const VIEW: &str = "map view";

/// Meta operations that have no meaning for a map view.
///
/// A map view is plain data: it cannot be called, used to build other values, re-parented,
/// or frozen. [`MapView::apply`] refuses every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralOp {
    /// Invoke the view as a function
    Call,
    /// Use the view as a constructor
    Construct,
    /// Replace the view's prototype
    SetPrototype,
    /// Mark the view non-extensible
    PreventExtensions,
}

impl StructuralOp {
    /// The operation's name as it appears in errors.
    pub fn name(&self) -> &'static str {
        match self {
            StructuralOp::Call => "call",
            StructuralOp::Construct => "construct",
            StructuralOp::SetPrototype => "set_prototype",
            StructuralOp::PreventExtensions => "prevent_extensions",
        }
    }
}

/// A native-looking map backed by a [`Mapping`].
///
/// Iteration follows insertion order: the backing store's snapshot order first, then keys
/// in the order they were added. Removing a key keeps the order of the rest.
///
/// # Examples
///
/// ```
/// use tether::{MapView, backing::{MapOp, MapRecorder, MapStore}};
///
/// let store: MapRecorder<&str, i32, MapStore<&str, i32>> = MapRecorder::new(MapStore::new());
/// let mut map = MapView::from_backing(store).unwrap();
/// map.insert("x", 1).unwrap();
/// map.insert("x", 2).unwrap();
/// map.remove("x").unwrap();
/// map.remove("x").unwrap();
///
/// assert_eq!(
///     map.backing().ops(),
///     &[MapOp::Add("x", 1), MapOp::Update("x", 2), MapOp::Delete("x")]
/// );
/// ```
pub struct MapView<K, V, B> {
    native: NativeMap<K, V>,
    forwarding: Forwarding,
    backing: B,
}

impl<K, V, B> MapView<K, V, B>
where
    K: Hash + Eq + fmt::Debug,
    B: Mapping<K, V>,
{
    /// Build a view seeded with every pair from `backing.elements()`.
    ///
    /// If the snapshot repeats a key, the last value wins.
    pub fn from_backing(backing: B) -> Result<Self> {
        let pairs = backing.elements()?;
        let mut entries = IndexMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            if entries.contains_key(&key) {
                tracing::warn!(view = VIEW, key = ?key, "Duplicate key in backing store snapshot");
            }
            entries.insert(key, value);
        }
        tracing::debug!(view = VIEW, len = entries.len(), "Seeded view from backing store");
        Ok(Self {
            native: NativeMap::new(VIEW, entries),
            forwarding: Forwarding::new(),
            backing,
        })
    }

    /// Set a field, forwarding `add` for a new key or `update` for an existing one.
    ///
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        if self.native.contains_key(&key) {
            self.backing.update(&key, &value)?;
            tracing::trace!(view = VIEW, key = ?key, "Forwarded update");
        } else {
            self.backing.add(&key, &value)?;
            tracing::trace!(view = VIEW, key = ?key, "Forwarded add");
        }
        let _batch = self.forwarding.suppress();
        self.native.define(&self.forwarding, key, value)
    }

    /// Set fields in order, one `add` or `update` call each.
    ///
    /// If the store fails part-way, the pairs it already accepted stay in the view.
    pub fn extend<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut forwarded = 0usize;
        for (key, value) in pairs {
            if let Err(err) = self.insert(key, value) {
                if forwarded > 0 {
                    tracing::warn!(
                        view = VIEW,
                        forwarded,
                        "Insert batch stopped after backing store failure"
                    );
                }
                return Err(err);
            }
            forwarded += 1;
        }
        Ok(())
    }

    /// Remove a field, forwarding `delete` only if the key is present.
    ///
    /// Removing an absent key is a no-op that returns `Ok(None)`.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let Some((stored, _)) = self.native.entries().get_key_value(key) else {
            tracing::trace!(view = VIEW, "Removal of absent key, nothing forwarded");
            return Ok(None);
        };
        self.backing.delete(stored)?;
        tracing::trace!(view = VIEW, key = ?stored, "Forwarded delete");
        let _batch = self.forwarding.suppress();
        self.native.undefine(&self.forwarding, key)
    }

    /// Meta operations are never supported on a map view.
    pub fn apply(&mut self, op: StructuralOp) -> Result<()> {
        tracing::debug!(view = VIEW, operation = op.name(), "Rejected structural operation");
        Err(ViewError::unsupported(VIEW, op.name(), "not supported on this view").into())
    }
}

impl<K: Hash + Eq, V, B> MapView<K, V, B> {
    /// The backing implementation.
    pub fn backing(&self) -> &B {
        &self.backing
    }

    /// Drop the view and return the backing implementation.
    pub fn into_backing(self) -> B {
        self.backing
    }

    /// Drop the view and return both its snapshot and the backing implementation.
    pub fn into_parts(self) -> (IndexMap<K, V>, B) {
        (self.native.into_entries(), self.backing)
    }

    /// The native snapshot.
    pub fn as_map(&self) -> &IndexMap<K, V> {
        self.native.entries()
    }

    /// False while the view is applying an already-forwarded edit.
    #[cfg(test)]
    pub(crate) fn is_forwarding(&self) -> bool {
        !self.forwarding.is_suppressed()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.native.entries().len()
    }

    /// True if the view has no fields.
    pub fn is_empty(&self) -> bool {
        self.native.entries().is_empty()
    }

    /// The value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.native.entries().get(key)
    }

    /// True if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.native.contains_key(key)
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.native.entries().iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.native.entries().keys()
    }

    /// Values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.native.entries().values()
    }
}

impl<K, V, B, Q> Index<&Q> for MapView<K, V, B>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + Equivalent<K>,
{
    type Output = V;

    /// Panics if the key is absent, like indexing a `HashMap`.
    fn index(&self, key: &Q) -> &V {
        &self.native.entries()[key]
    }
}

/// Compares contents only, like equality between two `IndexMap`s: order is ignored.
impl<K: Hash + Eq, V: PartialEq, B> PartialEq<IndexMap<K, V>> for MapView<K, V, B> {
    fn eq(&self, other: &IndexMap<K, V>) -> bool {
        self.native.entries() == other
    }
}

impl<'a, K: Hash + Eq, V, B> IntoIterator for &'a MapView<K, V, B> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq + fmt::Debug, V: fmt::Debug, B> fmt::Debug for MapView<K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq + fmt::Display, V: fmt::Display, B> fmt::Display for MapView<K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Hash + Eq + Serialize, V: Serialize, B> Serialize for MapView<K, V, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
