//! The "forwarding suppressed" state shared by every view.
//!
//! A view forwards caller-originated mutations to its backing store. When the view applies
//! the native half of an already-forwarded edit, it suppresses forwarding for the duration
//! of that write so the native step is not reported a second time. Suppression is scoped to
//! a [`Suppressed`] guard and is lifted when the guard drops, including during unwinding.

use std::cell::Cell;

#[derive(Debug, Default)]
pub(crate) struct Forwarding {
    suppressed: Cell<bool>,
}

impl Forwarding {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True while the view is applying the native half of a forwarded edit.
    pub(crate) fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }

    /// Suppress forwarding until the returned guard drops.
    pub(crate) fn suppress(&self) -> Suppressed<'_> {
        let was_suppressed = self.suppressed.replace(true);
        debug_assert!(!was_suppressed, "nested forwarding suppression");
        Suppressed {
            flag: &self.suppressed,
        }
    }
}

/// Lifts forwarding suppression on drop.
#[must_use = "suppression ends as soon as the guard is dropped"]
pub(crate) struct Suppressed<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for Suppressed<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
