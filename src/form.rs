//! Submission Form
//!
//! Two free-text fields and a submit action. A submit with either field
//! blank is a no-op that leaves the fields as typed; a valid submit adds
//! exactly one entry to the store and clears both fields.

use crate::visitors::{EmptyField, Field, VisitorEntry, VisitorStore};

/// A submit action as delivered by the host
///
/// Hosts that would otherwise navigate away on submit check
/// `default_prevented` after handing the event to the form.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new entry was prepended to the store
    Created(VisitorEntry),
    /// A field was blank; nothing changed
    Ignored { field: Field },
}

/// The visitor form's input state
#[derive(Debug, Default, Clone)]
pub struct SubmissionForm {
    full_name: String,
    message: String,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    /// Handle a submit action against `store`
    pub fn submit(&mut self, event: &mut SubmitEvent, store: &mut VisitorStore) -> SubmitOutcome {
        event.prevent_default();

        match store.add_entry(self.full_name.as_str(), self.message.as_str()) {
            Ok(entry) => {
                self.full_name.clear();
                self.message.clear();
                tracing::info!(id = %entry.id(), "Visitor entry submitted");
                SubmitOutcome::Created(entry)
            }
            Err(EmptyField { field }) => {
                tracing::debug!(%field, "Ignoring submit with blank field");
                SubmitOutcome::Ignored { field }
            }
        }
    }
}
