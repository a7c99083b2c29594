//! Entry Renderer
//!
//! Memoized projection of one entry. Entries are immutable and ids are
//! unique, so an unchanged id means unchanged content: comparing ids is the
//! whole change-detection check.

use super::fragment::DisplayFragment;
use crate::visitors::{VisitorEntry, VisitorId};

/// Shallow comparison deciding whether an entry must be re-projected
///
/// True when `next` is not the entry last rendered as `prev`.
pub fn props_changed(prev: &VisitorId, next: &VisitorEntry) -> bool {
    prev != next.id()
}

/// Renders one entry, recomputing only when the entry's id changes
#[derive(Debug, Default)]
pub struct EntryRenderer {
    rendered: Option<DisplayFragment>,
    computations: usize,
}

impl EntryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragment for `entry`, reusing the cached one when the id matches
    pub fn render(&mut self, entry: &VisitorEntry) -> &DisplayFragment {
        let stale = self
            .rendered
            .as_ref()
            .map_or(true, |prev| props_changed(&prev.key, entry));

        if stale {
            self.rendered = Some(DisplayFragment::from(entry));
            self.computations += 1;
        }

        self.rendered.get_or_insert_with(|| DisplayFragment::from(entry))
    }

    /// Id this renderer last projected
    pub fn key(&self) -> Option<&VisitorId> {
        self.rendered.as_ref().map(|f| &f.key)
    }

    /// Number of times the fragment has been computed
    pub fn computations(&self) -> usize {
        self.computations
    }
}
