//! Bootstrap Loader
//!
//! Seeds a session's store once from a `VisitorSource`.
//!
//! ## Data Flow
//!
//! 1. One fetch from the source (no retries)
//! 2. Records become entries: missing ids are generated, missing dates
//!    default to today, blank records are skipped, repeated ids are replaced
//! 3. `VisitorStore::seed`
//!
//! Every failure is logged and reported through `BootstrapOutcome::Failed`;
//! the store is left as it was and the session stays usable.

mod source;

pub use source::{HttpVisitorSource, SourceError, StaticVisitorSource, VisitorSource};

use chrono::NaiveDate;
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::visitors::{StoreError, VisitorEntry, VisitorId, VisitorRecord, VisitorStore};

/// Why a bootstrap did not seed the store
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Fetch failed: {0}")]
    Source(#[from] SourceError),

    #[error("Seed rejected: {0}")]
    Seed(#[from] StoreError),
}

/// Result of a bootstrap attempt
#[derive(Debug)]
pub enum BootstrapOutcome {
    /// The store now holds `count` entries; `skipped` records were unusable
    Seeded { count: usize, skipped: usize },
    /// Nothing was seeded
    Failed(BootstrapError),
}

impl BootstrapOutcome {
    pub fn is_seeded(&self) -> bool {
        matches!(self, BootstrapOutcome::Seeded { .. })
    }
}

/// Loads the initial visitor collection into a store
pub struct BootstrapLoader {
    source: Box<dyn VisitorSource>,
}

impl BootstrapLoader {
    pub fn new(source: impl VisitorSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// HTTP loader built from client configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, SourceError> {
        let source = HttpVisitorSource::new(
            config.source_url.clone(),
            Duration::from_millis(config.request_timeout_ms),
        )?;
        Ok(Self::new(source))
    }

    /// Fetch once and seed `store`
    pub async fn load(&self, store: &mut VisitorStore) -> BootstrapOutcome {
        let source = self.source.describe();
        tracing::info!(%source, "Loading initial visitors");

        match self.try_load(store).await {
            Ok((count, skipped)) => {
                tracing::info!(%source, count, skipped, "Visitor store seeded");
                BootstrapOutcome::Seeded { count, skipped }
            }
            Err(e) => {
                tracing::warn!(%source, error = %e, "Bootstrap failed, continuing with current list");
                BootstrapOutcome::Failed(e)
            }
        }
    }

    async fn try_load(&self, store: &mut VisitorStore) -> Result<(usize, usize), BootstrapError> {
        let records = self.source.fetch().await?;
        let total = records.len();

        let entries = records_to_entries(records, store.today());
        let count = entries.len();

        store.seed(entries)?;
        Ok((count, total - count))
    }
}

/// Convert fetched records into entries with unique ids
pub fn records_to_entries(records: Vec<VisitorRecord>, today: NaiveDate) -> Vec<VisitorEntry> {
    let mut seen: HashSet<VisitorId> = HashSet::with_capacity(records.len());
    let mut entries = Vec::with_capacity(records.len());

    for (index, mut record) in records.into_iter().enumerate() {
        if let Some(field) = record.blank_field() {
            tracing::warn!(index, %field, "Skipping visitor record with blank field");
            continue;
        }

        let duplicate = record.id.as_ref().is_some_and(|id| seen.contains(id));
        if duplicate {
            if let Some(id) = record.id.take() {
                tracing::warn!(index, %id, "Duplicate visitor id in payload, assigning a new one");
            }
        }

        if let Some(entry) = record.into_entry(today) {
            seen.insert(entry.id().clone());
            entries.push(entry);
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{build_router, AppState};
    use crate::visitors::StorePhase;
    use tokio::net::TcpListener;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    async fn spawn_mock(records: Vec<VisitorRecord>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = AppState::new(records);

        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });

        format!("http://{}/", addr)
    }

    async fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/", addr)
    }

    fn http_loader(url: String) -> BootstrapLoader {
        BootstrapLoader::new(HttpVisitorSource::new(url, Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn test_seed_from_static_source() {
        let loader = BootstrapLoader::new(StaticVisitorSource::new(vec![VisitorRecord::new(
            "Carol", "Hi",
        )]));
        let mut store = VisitorStore::with_clock(fixed_day);

        let outcome = loader.load(&mut store).await;

        assert!(outcome.is_seeded());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].full_name(), "Carol");
        assert_eq!(snapshot[0].message(), "Hi");
        assert_eq!(snapshot[0].visit_date(), fixed_day());
        assert!(!snapshot[0].id().as_str().is_empty());
    }

    #[tokio::test]
    async fn test_seed_over_http() {
        let records = vec![
            VisitorRecord::new("Carol", "Hi").id("c"),
            VisitorRecord::new("Dave", "Hey").visit_date(NaiveDate::from_ymd_opt(2019, 3, 1).unwrap()),
        ];
        let url = spawn_mock(records).await;
        let mut store = VisitorStore::with_clock(fixed_day);

        let outcome = http_loader(url).load(&mut store).await;

        assert!(matches!(outcome, BootstrapOutcome::Seeded { count: 2, skipped: 0 }));
        let names: Vec<&str> = store.entries().iter().map(|e| e.full_name()).collect();
        assert_eq!(names, vec!["Carol", "Dave"]);
        assert_eq!(store.entries()[0].id().as_str(), "c");
        assert_eq!(
            store.entries()[1].visit_date(),
            NaiveDate::from_ymd_opt(2019, 3, 1).unwrap()
        );
        assert_eq!(store.phase(), StorePhase::Seeded);
    }

    #[tokio::test]
    async fn test_connection_failure_leaves_store_empty() {
        let url = closed_port_url().await;
        let mut store = VisitorStore::new();

        let outcome = http_loader(url).load(&mut store).await;

        assert!(matches!(
            outcome,
            BootstrapOutcome::Failed(BootstrapError::Source(_))
        ));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.phase(), StorePhase::Empty);
    }

    #[tokio::test]
    async fn test_not_found_is_failure() {
        let base = spawn_mock(Vec::new()).await;
        let mut store = VisitorStore::new();

        let outcome = http_loader(format!("{}missing", base)).load(&mut store).await;

        assert!(matches!(
            outcome,
            BootstrapOutcome::Failed(BootstrapError::Source(SourceError::Status { status: 404, .. }))
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_silent_source_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let source =
            HttpVisitorSource::new(format!("http://{}/", addr), Duration::from_millis(200)).unwrap();
        let mut store = VisitorStore::new();

        let outcome = BootstrapLoader::new(source).load(&mut store).await;

        assert!(matches!(
            outcome,
            BootstrapOutcome::Failed(BootstrapError::Source(SourceError::Timeout))
        ));
        assert!(store.is_empty());
        assert_eq!(store.phase(), StorePhase::Empty);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = axum::Router::new().route("/", axum::routing::get(|| async { "<html>not json</html>" }));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mut store = VisitorStore::new();

        let outcome = http_loader(format!("http://{}/", addr)).load(&mut store).await;

        assert!(matches!(
            outcome,
            BootstrapOutcome::Failed(BootstrapError::Source(SourceError::Decode(_)))
        ));
        assert!(store.is_empty());
        assert_eq!(store.phase(), StorePhase::Empty);
    }

    #[tokio::test]
    async fn test_odd_ids_do_not_fail_payload() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = r#"[
            {"id": 18446744073709551615, "fullName": "Max", "message": "Big"},
            {"id": false, "fullName": "Bool", "message": "Odd"}
        ]"#;
        let app = axum::Router::new().route(
            "/",
            axum::routing::get(move || async move {
                ([(axum::http::header::CONTENT_TYPE, "application/json")], body)
            }),
        );
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mut store = VisitorStore::with_clock(fixed_day);

        let outcome = http_loader(format!("http://{}/", addr)).load(&mut store).await;

        assert!(matches!(outcome, BootstrapOutcome::Seeded { count: 2, skipped: 0 }));
        assert_eq!(store.entries()[0].id().as_str(), "18446744073709551615");
        assert_eq!(store.entries()[1].full_name(), "Bool");
    }

    #[tokio::test]
    async fn test_load_after_submission_is_rejected() {
        let loader = BootstrapLoader::new(StaticVisitorSource::new(vec![VisitorRecord::new(
            "Carol", "Hi",
        )]));
        let mut store = VisitorStore::with_clock(fixed_day);
        store.add_entry("Alice", "Hello").unwrap();

        let outcome = loader.load(&mut store).await;

        assert!(matches!(
            outcome,
            BootstrapOutcome::Failed(BootstrapError::Seed(StoreError::AlreadyMutated))
        ));
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].full_name(), "Alice");
    }

    #[test]
    fn test_records_to_entries_skips_and_dedups() {
        let records = vec![
            VisitorRecord::new("Ann", "one").id("1"),
            VisitorRecord::new("", "blank name"),
            VisitorRecord::new("Ben", "two").id("1"),
            VisitorRecord::new("Cat", "three"),
        ];

        let entries = records_to_entries(records, fixed_day());

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id().as_str(), "1");
        assert_ne!(entries[1].id().as_str(), "1");
        assert_eq!(entries[1].full_name(), "Ben");
        assert_eq!(entries[2].full_name(), "Cat");
    }
}
