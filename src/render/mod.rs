//! Rendering
//!
//! - **fragment**: `DisplayFragment`, the keyed projection of one entry
//! - **entry**: `EntryRenderer`, memoized on the entry id
//! - **list**: `ListRenderer`, keyed reconciliation over the whole list
//!
//! # Identity
//!
//! ```text
//! before:  [A, B, C]            after prepend:  [N, A, B, C]
//! keys:     a  b  c                              n  a  b  c
//! work:                                          ^ mount + compute, rest reused
//! ```
//!
//! Identity always comes from the entry id. A position-derived key would
//! change for every row on a prepend and force every row to recompute.

pub mod entry;
pub mod fragment;
pub mod list;

pub use entry::{props_changed, EntryRenderer};
pub use fragment::{render_html, DisplayFragment};
pub use list::{ListRenderer, RenderStats};
