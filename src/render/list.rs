//! List Renderer
//!
//! Keyed reconciliation over the visitor list. Each entry renderer is
//! matched to its entry by id, so prepending an entry mounts one renderer
//! and reuses every other one instead of shifting them all by one slot.

use std::collections::HashMap;
use std::fmt;

use super::entry::EntryRenderer;
use super::fragment::DisplayFragment;
use crate::visitors::{VisitorEntry, VisitorId};

/// Work done by the most recent render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Renderers created for ids not seen in the previous pass
    pub mounted: usize,
    /// Renderers carried over from the previous pass
    pub reused: usize,
    /// Fragments actually recomputed
    pub recomputed: usize,
    /// Renderers dropped because their id disappeared
    pub unmounted: usize,
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mounted={}, reused={}, recomputed={}, unmounted={}",
            self.mounted, self.reused, self.recomputed, self.unmounted
        )
    }
}

/// Projects the ordered visitor list to keyed fragments
#[derive(Debug, Default)]
pub struct ListRenderer {
    slots: HashMap<VisitorId, EntryRenderer>,
    last_stats: RenderStats,
    passes: u64,
}

impl ListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One fragment per entry, in input order, keyed by entry id
    pub fn render(&mut self, entries: &[VisitorEntry]) -> Vec<DisplayFragment> {
        let mut previous = std::mem::take(&mut self.slots);
        let mut stats = RenderStats::default();
        let mut fragments = Vec::with_capacity(entries.len());

        for entry in entries {
            let mut renderer = match previous.remove(entry.id()) {
                Some(renderer) => {
                    stats.reused += 1;
                    renderer
                }
                None => {
                    stats.mounted += 1;
                    EntryRenderer::new()
                }
            };

            let before = renderer.computations();
            fragments.push(renderer.render(entry).clone());
            if renderer.computations() > before {
                stats.recomputed += 1;
            }

            self.slots.insert(entry.id().clone(), renderer);
        }

        stats.unmounted = previous.len();
        self.last_stats = stats;
        self.passes += 1;

        tracing::trace!(pass = self.passes, %stats, "Rendered visitor list");
        fragments
    }

    /// Stats of the most recent pass
    pub fn last_stats(&self) -> RenderStats {
        self.last_stats
    }

    /// Number of render passes so far
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Number of live entry renderers
    pub fn mounted_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitors::VisitorStore;
    use chrono::NaiveDate;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn store_with(names: &[&str]) -> VisitorStore {
        let mut store = VisitorStore::with_clock(fixed_day);
        for name in names {
            store.add_entry(*name, "hello").unwrap();
        }
        store
    }

    fn keys(fragments: &[DisplayFragment]) -> Vec<VisitorId> {
        fragments.iter().map(|f| f.key.clone()).collect()
    }

    #[test]
    fn test_render_matches_input_order() {
        let store = store_with(&["Alice", "Bob", "Carol"]);
        let mut renderer = ListRenderer::new();

        let fragments = renderer.render(store.entries());

        assert_eq!(fragments.len(), 3);
        for (fragment, entry) in fragments.iter().zip(store.entries()) {
            assert_eq!(&fragment.key, entry.id());
            assert_eq!(fragment.full_name, entry.full_name());
            assert_eq!(fragment.message, entry.message());
            assert_eq!(fragment.visit_date, "2024-06-15");
        }
        assert_eq!(
            renderer.last_stats(),
            RenderStats {
                mounted: 3,
                reused: 0,
                recomputed: 3,
                unmounted: 0
            }
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let store = store_with(&["Alice", "Bob"]);
        let mut renderer = ListRenderer::new();

        let first = renderer.render(store.entries());
        let second = renderer.render(store.entries());

        assert_eq!(keys(&first), keys(&second));
        assert_eq!(first, second);
        assert_eq!(renderer.last_stats().recomputed, 0);
        assert_eq!(renderer.last_stats().reused, 2);
        assert_eq!(renderer.passes(), 2);
    }

    #[test]
    fn test_prepend_recomputes_only_new_entry() {
        let mut store = store_with(&["Alice", "Bob", "Carol", "Dan"]);
        let mut renderer = ListRenderer::new();
        let before = renderer.render(store.entries());

        let eve = store.add_entry("Eve", "late").unwrap();
        let after = renderer.render(store.entries());

        assert_eq!(&after[0].key, eve.id());
        assert_eq!(keys(&after[1..]), keys(&before));
        assert_eq!(
            renderer.last_stats(),
            RenderStats {
                mounted: 1,
                reused: 4,
                recomputed: 1,
                unmounted: 0
            }
        );
    }

    #[test]
    fn test_keys_do_not_follow_position() {
        let mut store = store_with(&["Alice"]);
        let mut renderer = ListRenderer::new();
        let alice_key = renderer.render(store.entries())[0].key.clone();

        store.add_entry("Bob", "hi").unwrap();
        let fragments = renderer.render(store.entries());

        // Alice moved from index 0 to index 1 but kept her key
        assert_ne!(fragments[0].key, alice_key);
        assert_eq!(fragments[1].key, alice_key);
    }

    #[test]
    fn test_removed_entries_unmount() {
        let store = store_with(&["Alice", "Bob", "Carol"]);
        let mut renderer = ListRenderer::new();
        renderer.render(store.entries());

        let fragments = renderer.render(&store.entries()[..1]);

        assert_eq!(fragments.len(), 1);
        assert_eq!(renderer.last_stats().unmounted, 2);
        assert_eq!(renderer.mounted_count(), 1);
    }

    #[test]
    fn test_empty_list() {
        let mut renderer = ListRenderer::new();
        assert!(renderer.render(&[]).is_empty());
        assert_eq!(renderer.last_stats(), RenderStats::default());
    }

    #[test]
    fn test_stats_display() {
        let stats = RenderStats {
            mounted: 1,
            reused: 2,
            recomputed: 1,
            unmounted: 0,
        };
        assert_eq!(stats.to_string(), "mounted=1, reused=2, recomputed=1, unmounted=0");
    }
}
