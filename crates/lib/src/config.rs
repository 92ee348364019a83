//! Per-view configuration.
//!
//! Views built with `from_backing` use [`ViewConfig::default`]. Pass a config to
//! `with_config` to change the behavior of operations with more than one sensible policy.

use serde::{Deserialize, Serialize};

/// Default for [`ViewConfig::max_gap`].
pub const DEFAULT_MAX_GAP: usize = 1024;

/// What a [`crate::ListView`] does when asked to assign past the end of the sequence.
///
/// Assigning exactly at `len` is always an append. Assigning further out would leave a
/// gap that no sequence of primitive edits can represent without inventing elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy<T> {
    /// Fail with `ViewError::IndexOutOfRange`; nothing is forwarded.
    Reject,
    /// Fill the gap with copies of the given value, each forwarded as an `insert` at the end.
    ///
    /// Gaps wider than [`ViewConfig::max_gap`] are still rejected.
    Fill(T),
}

impl<T> Default for GapPolicy<T> {
    fn default() -> Self {
        GapPolicy::Reject
    }
}

impl<T> GapPolicy<T> {
    /// Returns true if gap assignments are rejected.
    pub fn is_reject(&self) -> bool {
        matches!(self, GapPolicy::Reject)
    }

    /// Returns the filler value, if this policy fills gaps.
    pub fn filler(&self) -> Option<&T> {
        match self {
            GapPolicy::Reject => None,
            GapPolicy::Fill(filler) => Some(filler),
        }
    }
}

/// Options shared by all views.
///
/// # Examples
///
/// ```
/// use tether::{GapPolicy, ViewConfig};
///
/// let config = ViewConfig::default().with_gap_policy(GapPolicy::Fill(String::new()));
/// assert_eq!(config.gap_policy.filler(), Some(&String::new()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct ViewConfig<T> {
    /// Policy for index assignment beyond `len` on a full sequence view.
    pub gap_policy: GapPolicy<T>,
    /// Widest gap `GapPolicy::Fill` will fill in one assignment.
    pub max_gap: usize,
}

impl<T> Default for ViewConfig<T> {
    fn default() -> Self {
        Self {
            gap_policy: GapPolicy::default(),
            max_gap: DEFAULT_MAX_GAP,
        }
    }
}

impl<T> ViewConfig<T> {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the gap policy.
    pub fn with_gap_policy(mut self, gap_policy: GapPolicy<T>) -> Self {
        self.gap_policy = gap_policy;
        self
    }

    /// Replace the widest gap a fill policy may fill.
    pub fn with_max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }
}
