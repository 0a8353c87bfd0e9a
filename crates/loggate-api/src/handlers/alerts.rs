//! `/api/alerts` — passthrough stubs for the alert engine.
//!
//! The alert engine is not dialed yet; these return canned alerts shaped the
//! way its responses will be.

use crate::{envelope::Envelope, error::ApiResult};
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query},
    Json,
};
use loggate_core::paginate::paginate;
use loggate_core::{LogLevel, Pagination};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw `limit` / `offset` query string shared by the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_raw(self.limit.as_deref(), self.offset.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: LogLevel,
    pub status: AlertStatus,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDetail {
    #[serde(flatten)]
    pub alert: Alert,
    pub source: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub related_log_ids: Vec<String>,
    pub count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AlertPage {
    pub total_count: u64,
    pub has_more: bool,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: AlertStatus,
}

fn cpu_alert(id: &str, status: AlertStatus) -> Alert {
    Alert {
        id: id.to_string(),
        name: "High CPU usage".to_string(),
        description: "Server CPU usage above 80%".to_string(),
        level: LogLevel::Warning,
        status,
        timestamp: chrono::Utc::now().timestamp(),
    }
}

/// `GET /api/alerts?limit&offset`
pub async fn list_alerts(query: Result<Query<PageQuery>, QueryRejection>) -> ApiResult<AlertPage> {
    let Query(query) = query?;
    let page = query.pagination();
    let alerts = vec![cpu_alert("sample-alert-1", AlertStatus::Active)];
    let window = paginate(&alerts, page);

    Ok(Envelope::ok(
        AlertPage {
            total_count: window.total_count,
            has_more: window.has_more,
            alerts: window.items.to_vec(),
        },
        "query succeeded",
    ))
}

/// `GET /api/alerts/{id}`
pub async fn alert_detail(Path(id): Path<String>) -> ApiResult<AlertDetail> {
    let labels = BTreeMap::from([
        ("host".to_string(), "server-01".to_string()),
        ("service".to_string(), "web-service".to_string()),
    ]);
    let annotations = BTreeMap::from([
        ("cpu_value".to_string(), "85%".to_string()),
        ("threshold".to_string(), "80%".to_string()),
    ]);

    Ok(Envelope::ok(
        AlertDetail {
            alert: cpu_alert(&id, AlertStatus::Active),
            source: "system-monitor".to_string(),
            labels,
            annotations,
            related_log_ids: vec!["log-1".to_string(), "log-2".to_string()],
            count: 3,
        },
        "query succeeded",
    ))
}

/// `PUT /api/alerts/{id}/status`
pub async fn update_alert_status(
    Path(id): Path<String>,
    body: Result<Json<StatusUpdate>, JsonRejection>,
) -> ApiResult<Alert> {
    let Json(update) = body?;
    tracing::info!(alert = %id, status = ?update.status, "alert status updated");
    Ok(Envelope::ok(cpu_alert(&id, update.status), "status updated"))
}
