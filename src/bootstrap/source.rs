//! Visitor data sources
//!
//! Where the initial visitor collection comes from. The HTTP source reads
//! the mock data server; the static source serves a fixed payload for
//! offline sessions.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::visitors::VisitorRecord;

/// A read-only provider of the initial visitor collection
#[async_trait]
pub trait VisitorSource: Send + Sync {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    /// Fetch the full collection once
    async fn fetch(&self) -> Result<Vec<VisitorRecord>, SourceError>;
}

/// Reads `GET <url>` from an HTTP data source
pub struct HttpVisitorSource {
    client: Client,
    url: String,
}

impl HttpVisitorSource {
    /// Create a source with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SourceError::Request)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl VisitorSource for HttpVisitorSource {
    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }

    async fn fetch(&self) -> Result<Vec<VisitorRecord>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                message: text,
            });
        }

        let body = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&body).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

fn classify(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else if e.is_connect() {
        SourceError::Unavailable
    } else {
        SourceError::Request(e)
    }
}

/// Serves a fixed collection
#[derive(Debug, Clone, Default)]
pub struct StaticVisitorSource {
    records: Vec<VisitorRecord>,
}

impl StaticVisitorSource {
    pub fn new(records: Vec<VisitorRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl VisitorSource for StaticVisitorSource {
    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }

    async fn fetch(&self) -> Result<Vec<VisitorRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Errors that can occur while fetching from a data source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Data source unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Data source returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid payload: {0}")]
    Decode(String),
}
