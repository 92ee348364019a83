//! A sequence view whose only legal mutation is end-insertion.

use std::{fmt, ops::Deref};

use serde::{Serialize, Serializer};

use super::sequence::{SequenceCore, fmt_joined, impl_sequence_eq};
use crate::{AppendOnlySequence, Result};

/// A native-looking sequence backed by an [`AppendOnlySequence`].
///
/// Reads go through `Deref<Target = [T]>`. The only mutations that succeed are
/// [`push`](Self::push) and [`extend`](Self::extend); each value is forwarded as one
/// `append` call before it shows up in the view. Index and length assignment are refused
/// with an unsupported-mutation error and change nothing.
///
/// # Examples
///
/// ```
/// use tether::{AppendOnlyView, backing::VecStore};
///
/// let mut log = AppendOnlyView::from_backing(VecStore::from(vec!["a", "b"])).unwrap();
/// assert_eq!(log.push("c").unwrap(), 3);
/// assert_eq!(log.to_string(), "a,b,c");
/// assert!(log.set(0, "z").is_err());
/// assert_eq!(log.backing().as_slice(), &["a", "b", "c"]);
/// ```
pub struct AppendOnlyView<T, B> {
    core: SequenceCore<T>,
    backing: B,
}

impl<T, B: AppendOnlySequence<T>> AppendOnlyView<T, B> {
    /// Build a view seeded with a snapshot of `backing.elements()`.
    pub fn from_backing(backing: B) -> Result<Self> {
        let core = SequenceCore::seed("append-only view", &backing)?;
        Ok(Self { core, backing })
    }

    /// Direct index assignment. Always refused.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.core.assign(index, value)
    }

    /// Length assignment. Always refused.
    pub fn set_len(&mut self, len: usize) -> Result<()> {
        self.core.reject_set_len(len)
    }

    /// Append one value. Returns the new length.
    pub fn push(&mut self, value: T) -> Result<usize> {
        self.extend([value])
    }

    /// Append values left to right, one `append` call each. Returns the new length.
    ///
    /// An empty batch forwards nothing.
    pub fn extend<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        self.core.append_forwarded(&mut self.backing, values)
    }
}

impl<T, B> AppendOnlyView<T, B> {
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

impl<T, B> Deref for AppendOnlyView<T, B> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.core.as_slice()
    }
}

impl<'a, T, B> IntoIterator for &'a AppendOnlyView<T, B> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.core.as_slice().iter()
    }
}

impl<T: fmt::Debug, B> fmt::Debug for AppendOnlyView<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.core.as_slice()).finish()
    }
}

impl<T: fmt::Display, B> fmt::Display for AppendOnlyView<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(self.core.as_slice(), f)
    }
}

impl<T: Serialize, B> Serialize for AppendOnlyView<T, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.core.as_slice())
    }
}

impl_sequence_eq!(AppendOnlyView);
