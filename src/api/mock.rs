//! Mock payload
//!
//! The collection `GET /` serves: a configured JSON file, or the sample
//! compiled into the binary.

use std::path::Path;

use crate::api::error::{ApiError, ApiResult};
use crate::config::ServerConfig;
use crate::visitors::VisitorRecord;

const SAMPLE_VISITORS: &str = include_str!("../../data/visitors.json");

/// The built-in sample collection
pub fn sample_visitors() -> ApiResult<Vec<VisitorRecord>> {
    serde_json::from_str(SAMPLE_VISITORS).map_err(|e| ApiError::Data(e.to_string()))
}

/// Read a collection from a JSON file
pub fn read_visitors(path: &Path) -> ApiResult<Vec<VisitorRecord>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ApiError::Data(format!("{}: {}", path.display(), e)))
}

/// Payload for a server configuration
pub fn load_visitors(config: &ServerConfig) -> ApiResult<Vec<VisitorRecord>> {
    match &config.data_file {
        Some(path) => {
            let visitors = read_visitors(Path::new(path))?;
            tracing::info!(path = %path, count = visitors.len(), "Loaded mock visitors from file");
            Ok(visitors)
        }
        None => sample_visitors(),
    }
}
