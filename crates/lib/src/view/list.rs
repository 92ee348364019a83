//! A fully mutable sequence view.
//!
//! `ListView` translates the native sequence surface (index assignment, push, pop, shift,
//! unshift, positional insert and remove) into the `set` / `insert` / `delete` / `append`
//! vocabulary of a [`Sequence`]. End-insertion is shared with
//! [`AppendOnlyView`](super::AppendOnlyView) through the common sequence core.

use std::{fmt, ops::Deref};

use serde::{Serialize, Serializer};

use super::{
    ViewError,
    sequence::{SequenceCore, fmt_joined, impl_sequence_eq},
};
use crate::{GapPolicy, Result, Sequence, ViewConfig};

/// A native-looking sequence backed by a [`Sequence`].
///
/// Every successful mutation makes exactly one primitive call per logical element change,
/// and makes it before the change is visible in the view. If a single-element mutation
/// fails the view is left as it was. Batches (`extend`, `unshift`) keep the elements the
/// store accepted before the failure; a filled [`set`](Self::set) shows nothing until
/// every call succeeded.
///
/// # Examples
///
/// ```
/// use tether::{ListView, backing::{SequenceOp, SequenceRecorder, VecStore}};
///
/// let store: SequenceRecorder<&str, _> = SequenceRecorder::new(VecStore::from(vec!["a", "b", "c"]));
/// let mut list = ListView::from_backing(store).unwrap();
///
/// list.unshift(["e", "f"]).unwrap();
/// assert_eq!(list.to_string(), "e,f,a,b,c");
/// assert_eq!(
///     list.backing().ops(),
///     &[SequenceOp::Insert(0, "f"), SequenceOp::Insert(0, "e")]
/// );
/// ```
pub struct ListView<T, B> {
    core: SequenceCore<T>,
    backing: B,
    config: ViewConfig<T>,
}

impl<T, B: Sequence<T>> ListView<T, B> {
    /// Build a view seeded with a snapshot of `backing.elements()`, using the default config.
    pub fn from_backing(backing: B) -> Result<Self> {
        Self::with_config(backing, ViewConfig::default())
    }

    /// Build a view with an explicit configuration.
    pub fn with_config(backing: B, config: ViewConfig<T>) -> Result<Self> {
        let core = SequenceCore::seed("list view", &backing)?;
        Ok(Self {
            core,
            backing,
            config,
        })
    }

    /// Length assignment. Always refused.
    pub fn set_len(&mut self, len: usize) -> Result<()> {
        self.core.reject_set_len(len)
    }

    /// Append one value, forwarded as `append`. Returns the new length.
    pub fn push(&mut self, value: T) -> Result<usize> {
        self.extend([value])
    }

    /// Append values left to right, one `append` call each. Returns the new length.
    pub fn extend<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        self.core.append_forwarded(&mut self.backing, values)
    }

    /// Prepend values so they end up in the order given. Returns the new length.
    ///
    /// Values are forwarded right to left as `insert(0, value)`, so replaying the calls puts
    /// them in the caller's order. If the store fails part-way, the values it already
    /// accepted stay at the front of the view.
    pub fn unshift<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut forwarded = 0usize;
        for value in values.into_iter().rev() {
            if let Err(err) = self.backing.insert(0, &value) {
                if forwarded > 0 {
                    tracing::warn!(
                        view = self.core.view(),
                        forwarded,
                        "Prepend batch stopped after backing store failure"
                    );
                }
                return Err(err);
            }
            tracing::trace!(view = self.core.view(), "Forwarded insert at front");
            self.core.apply_insert(0, value)?;
            forwarded += 1;
        }
        Ok(self.core.len())
    }

    /// Remove and return the first element, or `None` without forwarding if empty.
    pub fn shift(&mut self) -> Result<Option<T>> {
        if self.core.len() == 0 {
            return Ok(None);
        }
        self.backing.delete(0)?;
        tracing::trace!(view = self.core.view(), index = 0, "Forwarded delete");
        self.core.apply_remove(0).map(Some)
    }

    /// Remove and return the last element, or `None` without forwarding if empty.
    pub fn pop(&mut self) -> Result<Option<T>> {
        let Some(index) = self.core.len().checked_sub(1) else {
            return Ok(None);
        };
        self.backing.delete(index)?;
        tracing::trace!(view = self.core.view(), index, "Forwarded delete");
        self.core.apply_remove(index).map(Some)
    }

    /// Insert `value` before position `index`, where `index <= len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.core.len();
        if index > len {
            return Err(ViewError::out_of_range(self.core.view(), "insert", index, len).into());
        }
        self.backing.insert(index, &value)?;
        tracing::trace!(view = self.core.view(), index, "Forwarded insert");
        self.core.apply_insert(index, value)
    }

    /// Remove and return the element at `index`, where `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.core.len();
        if index >= len {
            return Err(ViewError::out_of_range(self.core.view(), "remove", index, len).into());
        }
        self.backing.delete(index)?;
        tracing::trace!(view = self.core.view(), index, "Forwarded delete");
        self.core.apply_remove(index)
    }
}

impl<T: Clone, B: Sequence<T>> ListView<T, B> {
    /// Index assignment.
    ///
    /// Below `len` this forwards `set(index, value)`. At `len` the assignment appends and
    /// forwards `insert(len, value)`. Past `len` the configured [`GapPolicy`] decides:
    /// `Reject` fails with an out-of-range error, `Fill` forwards one `insert` per filler
    /// element and then inserts `value`. A gap wider than [`ViewConfig::max_gap`] is
    /// rejected under either policy.
    ///
    /// A filled assignment becomes visible only after every `insert` succeeded. If one
    /// fails, the view is unchanged, but the store keeps the fillers it already accepted.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.core.len();
        if index < len {
            self.backing.set(index, &value)?;
            tracing::trace!(view = self.core.view(), index, "Forwarded set");
            return self.core.apply_write(index, value);
        }
        if index == len {
            self.backing.insert(index, &value)?;
            tracing::trace!(view = self.core.view(), index, "Forwarded insert at end");
            return self.core.apply_write(index, value);
        }

        let gap = index - len;
        let filler = match &self.config.gap_policy {
            GapPolicy::Fill(filler) if gap <= self.config.max_gap => filler.clone(),
            _ => {
                tracing::debug!(
                    view = self.core.view(),
                    index,
                    len,
                    max_gap = self.config.max_gap,
                    "Rejected assignment past the end"
                );
                return Err(ViewError::out_of_range(self.core.view(), "set", index, len).into());
            }
        };

        for slot in len..=index {
            let element = if slot < index { &filler } else { &value };
            if let Err(err) = self.backing.insert(slot, element) {
                if slot > len {
                    tracing::warn!(
                        view = self.core.view(),
                        accepted = slot - len,
                        "Gap fill stopped after backing store failure"
                    );
                }
                return Err(err);
            }
            tracing::trace!(view = self.core.view(), index = slot, "Forwarded insert at end");
        }
        self.core
            .apply_appends(std::iter::repeat_n(filler, gap).chain(std::iter::once(value)))
    }
}

impl<T, B> ListView<T, B> {
    /// The backing implementation.
    pub fn backing(&self) -> &B {
        &self.backing
    }

    /// Drop the view and return the backing implementation.
    pub fn into_backing(self) -> B {
        self.backing
    }

    /// Drop the view and return both its snapshot and the backing implementation.
    pub fn into_parts(self) -> (Vec<T>, B) {
        (self.core.into_vec(), self.backing)
    }

    /// The view's configuration.
    pub fn config(&self) -> &ViewConfig<T> {
        &self.config
    }

    /// The native snapshot.
    pub fn as_slice(&self) -> &[T] {
        self.core.as_slice()
    }

    /// False while the view is applying an already-forwarded edit.
    #[cfg(test)]
    pub(crate) fn is_forwarding(&self) -> bool {
        self.core.is_forwarding()
    }
}

impl<T, B> Deref for ListView<T, B> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.core.as_slice()
    }
}

impl<'a, T, B> IntoIterator for &'a ListView<T, B> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.core.as_slice().iter()
    }
}

impl<T: fmt::Debug, B> fmt::Debug for ListView<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.core.as_slice()).finish()
    }
}

impl<T: fmt::Display, B> fmt::Display for ListView<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(self.core.as_slice(), f)
    }
}

impl<T: Serialize, B> Serialize for ListView<T, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.core.as_slice())
    }
}

impl_sequence_eq!(ListView);
