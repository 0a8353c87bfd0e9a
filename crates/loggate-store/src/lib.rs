//! loggate-store — primary log store access and degraded-mode fallback.
//!
//! A [`StoreConnector`] opens one [`StoreSession`] per request. The
//! [`selector`] probes it and picks the primary store or the fixture set;
//! [`LogQueryService`] runs the whole per-request flow on top of that.

pub mod disabled;
pub mod mysql;
pub mod selector;
pub mod service;

use async_trait::async_trait;
use loggate_core::translate::LogQuery;
use loggate_core::StoreRow;
use std::time::Duration;
use thiserror::Error;

pub use disabled::DisabledConnector;
pub use mysql::MySqlConnector;
pub use selector::{select_source, Source};
pub use service::{LogQueryService, ServiceError};

/// Failures talking to the primary store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("primary store is disabled by configuration")]
    Disabled,
    #[error("cannot connect to primary store: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("primary store did not answer ping: {0}")]
    Probe(#[source] sqlx::Error),
    #[error("primary store probe timed out after {0:?}")]
    Timeout(Duration),
    #[error("{context} failed: {source}")]
    Query {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Opens request-scoped sessions against the primary store.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn StoreSession>, StoreError>;
}

/// One live connection, owned by a single request.
///
/// Dropping a session releases its connection; [`StoreSession::close`] does
/// so gracefully.
#[async_trait]
pub trait StoreSession: Send {
    /// Liveness probe, distinct from any data query.
    async fn ping(&mut self) -> Result<(), StoreError>;

    /// Run the COUNT form of `query`.
    async fn count(&mut self, query: &LogQuery) -> Result<u64, StoreError>;

    /// Run the SELECT form of `query`.
    async fn fetch(&mut self, query: &LogQuery) -> Result<Vec<StoreRow>, StoreError>;

    /// `(level code, count)` pairs for the whole table.
    async fn level_counts(&mut self) -> Result<Vec<(i64, u64)>, StoreError>;

    async fn close(self: Box<Self>);
}
