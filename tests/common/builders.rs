//! Test builders — ergonomic constructors for store rows and services.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use super::fake_store::FakeConnector;
use loggate_api::{router, AppState};
use loggate_core::fixtures::fixture_set;
use loggate_core::StoreRow;
use loggate_store::{DisabledConnector, LogQueryService, StoreConnector};
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// StoreRowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for primary-store rows.
///
/// # Example
///
/// ```rust
/// let row = StoreRowBuilder::new("db-17")
///     .level(4)
///     .source("database")
///     .content("deadlock detected")
///     .build();
/// ```
pub struct StoreRowBuilder {
    id: String,
    timestamp: i64,
    source: String,
    level: i64,
    content: String,
}

impl StoreRowBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp: 1_700_000_000,
            source: "test-source".to_string(),
            level: 2,
            content: "test content".to_string(),
        }
    }

    pub fn ts(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Raw numeric level code; anything outside 0–5 is allowed on purpose.
    pub fn level(mut self, code: i64) -> Self {
        self.level = code;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> StoreRow {
        StoreRow {
            id: self.id,
            timestamp: self.timestamp,
            source: self.source,
            level: self.level,
            content: self.content,
        }
    }
}

// ---------------------------------------------------------------------------
// Service / router construction
// ---------------------------------------------------------------------------

pub const TEST_PROBE_TIMEOUT: Duration = Duration::from_millis(200);

pub fn service_with(connector: impl StoreConnector + 'static) -> LogQueryService {
    let connector: Arc<dyn StoreConnector> = Arc::new(connector);
    LogQueryService::new(connector, TEST_PROBE_TIMEOUT, fixture_set())
}

/// Router whose primary store is permanently unreachable.
pub fn fallback_app() -> axum::Router {
    router(AppState::new(service_with(DisabledConnector)))
}

pub fn app_with(connector: FakeConnector) -> axum::Router {
    router(AppState::new(service_with(connector)))
}
