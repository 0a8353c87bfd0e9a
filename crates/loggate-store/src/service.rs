//! Log query service — the per-request flow behind `GET /api/logs`.
//!
//! ```text
//! Start ─► Probing ─┬─► Primary ─► Querying ─► Normalizing ─► Done
//!                   └─► Fallback ─► Filtering ─► Paginating ─► Normalizing ─► Done
//! ```
//!
//! Nothing is retried. A query failure after a successful probe is surfaced
//! as [`ServiceError::Store`], never masked with fixture data.

use crate::selector::{select_source, Source};
use crate::{StoreConnector, StoreError, StoreSession};
use loggate_core::filter::filter_records;
use loggate_core::normalize::{level_from_code, normalize_record, normalize_row};
use loggate_core::paginate::paginate;
use loggate_core::translate::LogQuery;
use loggate_core::{LogRecord, LogStats, QueryParams, QueryResult};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("log store query failed: {0}")]
    Store(#[from] StoreError),
}

/// Shared, read-only handle; cheap to clone into every request.
#[derive(Clone)]
pub struct LogQueryService {
    connector: Arc<dyn StoreConnector>,
    probe_timeout: Duration,
    fixtures: &'static [LogRecord],
}

impl LogQueryService {
    pub fn new(
        connector: Arc<dyn StoreConnector>,
        probe_timeout: Duration,
        fixtures: &'static [LogRecord],
    ) -> Self {
        Self {
            connector,
            probe_timeout,
            fixtures,
        }
    }

    /// Answer one log query from whichever source is available right now.
    pub async fn query(&self, params: &QueryParams) -> Result<QueryResult, ServiceError> {
        match select_source(self.connector.as_ref(), self.probe_timeout).await {
            Source::Primary(session) => self.query_primary(session, params).await,
            Source::Fallback => Ok(self.query_fixtures(params)),
        }
    }

    async fn query_primary(
        &self,
        mut session: Box<dyn StoreSession>,
        params: &QueryParams,
    ) -> Result<QueryResult, ServiceError> {
        let query = LogQuery::translate(params);
        tracing::debug!(sql = %query.select_sql(), "querying primary store");

        let outcome = run_query(session.as_mut(), &query).await;
        session.close().await;

        let (total_count, rows) = outcome.inspect_err(|err| {
            tracing::error!(error = %err, "primary store query failed after successful probe");
        })?;
        let logs = rows.into_iter().map(normalize_row).collect();
        Ok(QueryResult::new(params.page.offset, total_count, logs))
    }

    /// Fallback path: filter and paginate the fixture set in-process.
    pub fn query_fixtures(&self, params: &QueryParams) -> QueryResult {
        let matched = filter_records(self.fixtures, params);
        let page = paginate(&matched, params.page);
        let logs = page.items.iter().map(|r| normalize_record(r)).collect();
        QueryResult::new(params.page.offset, page.total_count, logs)
    }

    /// Level histogram from whichever source is available right now.
    pub async fn stats(&self) -> Result<LogStats, ServiceError> {
        match select_source(self.connector.as_ref(), self.probe_timeout).await {
            Source::Primary(mut session) => {
                let outcome = session.level_counts().await;
                session.close().await;

                let counts = outcome.inspect_err(|err| {
                    tracing::error!(error = %err, "primary store stats failed after successful probe");
                })?;
                let mut stats = LogStats::default();
                for (code, count) in counts {
                    stats.record(level_from_code(code), count);
                }
                Ok(stats)
            }
            Source::Fallback => {
                let mut stats = LogStats::default();
                for record in self.fixtures {
                    stats.record(record.level, 1);
                }
                Ok(stats)
            }
        }
    }
}

async fn run_query(
    session: &mut dyn StoreSession,
    query: &LogQuery,
) -> Result<(u64, Vec<loggate_core::StoreRow>), StoreError> {
    let total = session.count(query).await?;
    let rows = session.fetch(query).await?;
    Ok((total, rows))
}
