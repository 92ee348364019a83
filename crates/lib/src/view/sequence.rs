//! State and forwarding logic shared by the sequence views.
//!
//! [`AppendOnlyView`](super::AppendOnlyView) and [`ListView`](super::ListView) both own a
//! `SequenceCore`. The core holds the native snapshot and the forwarding state, and
//! implements end-insertion once for both views.

use std::fmt;

use super::{ViewError, forwarding::Forwarding, native::NativeSeq};
use crate::{AppendOnlySequence, Result};

#[derive(Debug)]
pub(crate) struct SequenceCore<T> {
    view: &'static str,
    native: NativeSeq<T>,
    forwarding: Forwarding,
}

impl<T> SequenceCore<T> {
    /// Snapshot the backing store's elements, in the order it reports them.
    pub(crate) fn seed<B>(view: &'static str, backing: &B) -> Result<Self>
    where
        B: AppendOnlySequence<T> + ?Sized,
    {
        let items = backing.elements()?;
        tracing::debug!(view, len = items.len(), "Seeded view from backing store");
        Ok(Self {
            view,
            native: NativeSeq::new(view, items),
            forwarding: Forwarding::new(),
        })
    }

    pub(crate) fn view(&self) -> &'static str {
        self.view
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        self.native.as_slice()
    }

    pub(crate) fn len(&self) -> usize {
        self.native.len()
    }

    #[cfg(test)]
    pub(crate) fn is_forwarding(&self) -> bool {
        !self.forwarding.is_suppressed()
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.native.into_vec()
    }

    /// Caller-originated index assignment that goes straight to native storage.
    ///
    /// Forwarding is active, so the trap refuses it.
    pub(crate) fn assign(&mut self, index: usize, value: T) -> Result<()> {
        self.native.write(&self.forwarding, index, value)
    }

    /// Length assignment is refused by every sequence view.
    pub(crate) fn reject_set_len(&self, len: usize) -> Result<()> {
        let current = self.len();
        tracing::debug!(view = self.view, len, current, "Rejected length assignment");
        Err(ViewError::unsupported(
            self.view,
            "set_len",
            format!("cannot assign length {len} to a sequence of length {current}"),
        )
        .into())
    }

    /// Apply the native half of a forwarded assignment or end-insertion.
    pub(crate) fn apply_write(&mut self, index: usize, value: T) -> Result<()> {
        let _batch = self.forwarding.suppress();
        self.native.write(&self.forwarding, index, value)
    }

    /// Apply the native half of several already-forwarded end-insertions at once.
    pub(crate) fn apply_appends<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let _batch = self.forwarding.suppress();
        for value in values {
            let index = self.native.len();
            self.native.write(&self.forwarding, index, value)?;
        }
        Ok(())
    }

    /// Apply the native half of a forwarded positional insertion.
    pub(crate) fn apply_insert(&mut self, index: usize, value: T) -> Result<()> {
        let _batch = self.forwarding.suppress();
        self.native.insert(&self.forwarding, index, value)
    }

    /// Apply the native half of a forwarded deletion.
    pub(crate) fn apply_remove(&mut self, index: usize) -> Result<T> {
        let _batch = self.forwarding.suppress();
        self.native.remove(&self.forwarding, index)
    }

    /// End-insertion shared by both sequence views.
    ///
    /// Each value is appended to the backing store and then to the native snapshot, in the
    /// order given. If the store fails part-way, the values it already accepted stay in the
    /// view and the error is returned. Returns the new length.
    pub(crate) fn append_forwarded<B, I>(&mut self, backing: &mut B, values: I) -> Result<usize>
    where
        B: AppendOnlySequence<T> + ?Sized,
        I: IntoIterator<Item = T>,
    {
        let mut forwarded = 0usize;
        for value in values {
            if let Err(err) = backing.append(&value) {
                if forwarded > 0 {
                    tracing::warn!(
                        view = self.view,
                        forwarded,
                        "Append batch stopped after backing store failure"
                    );
                }
                return Err(err);
            }
            let index = self.len();
            tracing::trace!(view = self.view, index, "Forwarded append");
            self.apply_write(index, value)?;
            forwarded += 1;
        }
        Ok(self.len())
    }
}

/// Renders elements comma-separated, without brackets.
pub(crate) fn fmt_joined<T: fmt::Display>(items: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Element-wise equality between a sequence view and slices, arrays and vectors.
macro_rules! impl_sequence_eq {
    ($view:ident) => {
        impl<T: PartialEq<U>, U, B> PartialEq<[U]> for $view<T, B> {
            fn eq(&self, other: &[U]) -> bool {
                self.as_slice() == other
            }
        }

        impl<T: PartialEq<U>, U, B> PartialEq<&[U]> for $view<T, B> {
            fn eq(&self, other: &&[U]) -> bool {
                self.as_slice() == *other
            }
        }

        impl<T: PartialEq<U>, U, B> PartialEq<Vec<U>> for $view<T, B> {
            fn eq(&self, other: &Vec<U>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T: PartialEq<U>, U, B, const N: usize> PartialEq<[U; N]> for $view<T, B> {
            fn eq(&self, other: &[U; N]) -> bool {
                self.as_slice() == other.as_slice()
            }
        }
    };
}

pub(crate) use impl_sequence_eq;
