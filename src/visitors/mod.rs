//! Visitor list
//!
//! - **types**: `VisitorEntry`, `VisitorId`, `VisitorRecord`
//! - **store**: the session-owned, newest-first `VisitorStore`
//! - **error**: store error types
//!
//! # Example
//!
//! ```rust
//! use guestbook::visitors::VisitorStore;
//!
//! let mut store = VisitorStore::new();
//! store.add_entry("Alice", "Hello").unwrap();
//! store.add_entry("Bob", "Hi").unwrap();
//!
//! let names: Vec<&str> = store.entries().iter().map(|e| e.full_name()).collect();
//! assert_eq!(names, ["Bob", "Alice"]);
//! assert!(store.add_entry("", "Hello").is_err());
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::{EmptyField, StoreError, StoreResult};
pub use store::{local_today, Clock, StorePhase, VisitorStore};
pub use types::{Field, VisitorEntry, VisitorId, VisitorRecord};
