//! # Guestbook
//!
//! A session-scoped visitor guestbook: a newest-first in-memory list, a
//! two-field submission form, keyed list rendering with per-entry change
//! detection, and a mock JSON data source the list is seeded from.
//!
//! ## Modules
//!
//! - [`visitors`]: entries and the session-owned `VisitorStore`
//! - [`render`]: keyed list rendering with memoized entry renderers
//! - [`form`]: the submission form
//! - [`bootstrap`]: one-shot seeding from a data source
//! - [`session`]: wires store, form and renderer for one session
//! - [`api`]: mock data source server with Axum
//! - [`config`], [`logging`]: configuration and tracing setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use guestbook::{BootstrapLoader, ClientConfig, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = BootstrapLoader::from_config(&ClientConfig::default())?;
//!
//!     let mut session = Session::new();
//!     session.bootstrap(&loader).await;
//!
//!     session.form_mut().set_full_name("Alice");
//!     session.form_mut().set_message("Hello");
//!     session.submit();
//!
//!     for row in session.render() {
//!         println!("{}", row);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod form;
pub mod logging;
pub mod render;
pub mod session;
pub mod visitors;

// Re-export top-level types for convenience
pub use visitors::{
    EmptyField, Field, StoreError, StorePhase, StoreResult, VisitorEntry, VisitorId, VisitorRecord,
    VisitorStore,
};

pub use render::{DisplayFragment, EntryRenderer, ListRenderer, RenderStats};

pub use form::{SubmissionForm, SubmitEvent, SubmitOutcome};

pub use bootstrap::{
    BootstrapError, BootstrapLoader, BootstrapOutcome, HttpVisitorSource, SourceError,
    StaticVisitorSource, VisitorSource,
};

pub use session::Session;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ClientConfig, Config, ConfigError, LoggingConfig, ServerConfig};
