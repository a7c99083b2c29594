//! Visitor Routes
//!
//! - GET / - The full visitor collection as a JSON array

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::visitors::VisitorRecord;

/// GET /
///
/// Serve the whole collection. No query parameters, no pagination.
pub async fn list_visitors(State(state): State<Arc<AppState>>) -> Json<Vec<VisitorRecord>> {
    tracing::debug!(count = state.visitors.len(), "Serving visitors");
    Json(state.visitors.as_ref().clone())
}
