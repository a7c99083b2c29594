//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod visitors;

use axum::http::Uri;

use crate::api::error::ApiError;

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
