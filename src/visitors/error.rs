//! Visitor store error types

use thiserror::Error;

use super::types::{Field, VisitorId};

/// A required text field was empty or whitespace-only
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Validation error: {field} must not be empty")]
pub struct EmptyField {
    pub field: Field,
}

/// Errors returned by `VisitorStore::seed`
///
/// None of these leave the store partially mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store has already been seeded once
    #[error("Store already seeded")]
    AlreadySeeded,

    /// A submission has already modified the store
    #[error("Store already modified by a submission")]
    AlreadyMutated,

    /// Two entries would share the same id
    #[error("Duplicate visitor id: {0}")]
    DuplicateId(VisitorId),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
