//! `/api/logs` — query, submit, and stats.

use crate::{
    envelope::Envelope,
    error::ApiResult,
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use loggate_core::{LogLevel, LogStats, QueryParams, QueryResult, RawLogQuery};
use serde::{Deserialize, Serialize};

/// `GET /api/logs?limit&offset&query&level&source`
pub async fn query_logs(
    State(state): State<AppState>,
    query: Result<Query<RawLogQuery>, QueryRejection>,
) -> ApiResult<QueryResult> {
    let Query(raw) = query?;
    let params = QueryParams::parse(&raw)?;
    let result = state.logs.query(&params).await?;
    tracing::debug!(
        total = result.total_count,
        returned = result.logs.len(),
        "log query served"
    );
    Ok(Envelope::ok(result, "query succeeded"))
}

/// Body of `POST /api/logs`.
#[derive(Debug, Deserialize)]
pub struct SubmitLogsRequest {
    pub logs: Vec<SubmittedLog>,
}

#[derive(Debug, Deserialize)]
pub struct SubmittedLog {
    #[serde(default)]
    pub timestamp: Option<i64>,
    pub source: String,
    /// Symbolic level, validated like the `level` query filter.
    pub level: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub submitted: usize,
}

/// `POST /api/logs` — validates the batch; the log backend is not dialed.
pub async fn submit_logs(
    body: Result<Json<SubmitLogsRequest>, JsonRejection>,
) -> ApiResult<SubmitReceipt> {
    let Json(batch) = body?;
    for entry in &batch.logs {
        entry.level.parse::<LogLevel>()?;
    }
    tracing::info!(count = batch.logs.len(), "log batch accepted");
    Ok(Envelope::ok(
        SubmitReceipt {
            submitted: batch.logs.len(),
        },
        "logs submitted",
    ))
}

/// `GET /api/logs/stats`
pub async fn log_stats(State(state): State<AppState>) -> ApiResult<LogStats> {
    let stats = state.logs.stats().await?;
    Ok(Envelope::ok(stats, "stats retrieved"))
}
