//! Visitor Store
//!
//! Owns the newest-first list of entries for one session. Writes take
//! `&mut self`; there is exactly one owner, so no locking is involved.
//!
//! # Lifecycle
//!
//! ```text
//! Empty ──seed──▶ Seeded ──add_entry──▶ Mutated ──add_entry──▶ Mutated ...
//!   └────────────────add_entry──────────────▲
//! ```
//!
//! `seed` is accepted only from `Empty`. Anything else is rejected without
//! touching the list.

use chrono::NaiveDate;
use std::collections::HashSet;

use super::error::{EmptyField, StoreError, StoreResult};
use super::types::{Field, VisitorEntry, VisitorId};

/// Source of the current calendar date
pub type Clock = fn() -> NaiveDate;

/// Today's date in the process's local time zone
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Where the store is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    /// Never seeded, never written
    Empty,
    /// Seeded from the data source, no submissions yet
    Seeded,
    /// At least one submission has been added
    Mutated,
}

/// Session-scoped ordered collection of visitor entries
#[derive(Debug)]
pub struct VisitorStore {
    entries: Vec<VisitorEntry>,
    ids: HashSet<VisitorId>,
    seeded: bool,
    submissions: usize,
    clock: Clock,
}

impl Default for VisitorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitorStore {
    /// Create an empty store dated by the local clock
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    /// Create an empty store with a custom date source
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            entries: Vec::new(),
            ids: HashSet::new(),
            seeded: false,
            submissions: 0,
            clock,
        }
    }

    /// Current date according to the store's clock
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Replace the contents with `initial`, preserving its order
    ///
    /// Only accepted while the store is `Empty`.
    pub fn seed(&mut self, initial: Vec<VisitorEntry>) -> StoreResult<()> {
        if self.submissions > 0 {
            return Err(StoreError::AlreadyMutated);
        }
        if self.seeded {
            return Err(StoreError::AlreadySeeded);
        }

        let mut ids = HashSet::with_capacity(initial.len());
        for entry in &initial {
            if !ids.insert(entry.id().clone()) {
                return Err(StoreError::DuplicateId(entry.id().clone()));
            }
        }

        tracing::debug!(count = initial.len(), "Seeding visitor store");
        self.entries = initial;
        self.ids = ids;
        self.seeded = true;
        Ok(())
    }

    /// Create a new entry dated today and prepend it
    ///
    /// A blank field is the only way this can fail.
    pub fn add_entry(
        &mut self,
        full_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<VisitorEntry, EmptyField> {
        let full_name = full_name.into();
        let message = message.into();

        if let Some(field) = Field::first_blank(&full_name, &message) {
            return Err(EmptyField { field });
        }

        let id = loop {
            let candidate = VisitorId::generate();
            if !self.contains(&candidate) {
                break candidate;
            }
        };

        let entry = VisitorEntry::new(id, full_name, message, self.today());
        self.ids.insert(entry.id().clone());
        self.entries.insert(0, entry.clone());
        self.submissions += 1;

        tracing::debug!(id = %entry.id(), total = self.entries.len(), "Added visitor entry");
        Ok(entry)
    }

    /// Owned copy of the current list, newest first
    pub fn snapshot(&self) -> Vec<VisitorEntry> {
        self.entries.clone()
    }

    /// Borrowed read-only view of the current list
    pub fn entries(&self) -> &[VisitorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &VisitorId) -> bool {
        self.ids.contains(id)
    }

    pub fn phase(&self) -> StorePhase {
        if self.submissions > 0 {
            StorePhase::Mutated
        } else if self.seeded {
            StorePhase::Seeded
        } else {
            StorePhase::Empty
        }
    }
}
