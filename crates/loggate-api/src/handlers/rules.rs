//! `/api/rules` — passthrough stubs for alert rule management.

use super::alerts::PageQuery;
use crate::{envelope::Envelope, error::ApiResult};
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query},
    Json,
};
use loggate_core::paginate::paginate;
use loggate_core::LogLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleType {
    Threshold,
    Keyword,
    Frequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub field: String,
    pub threshold: f64,
    pub compare_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    /// Assigned by the server; ignored on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub level: LogLevel,
    #[serde(rename = "type")]
    pub kind: RuleType,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_config: Option<ThresholdConfig>,
}

fn default_enabled() -> bool { true }

#[derive(Debug, Serialize, Deserialize)]
pub struct RulePage {
    pub total_count: u64,
    pub has_more: bool,
    pub rules: Vec<AlertRule>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleReceipt {
    pub rule_id: String,
}

/// `GET /api/rules?limit&offset`
pub async fn list_rules(query: Result<Query<PageQuery>, QueryRejection>) -> ApiResult<RulePage> {
    let Query(query) = query?;
    let rules = vec![AlertRule {
        id: Some("rule-1".to_string()),
        name: "CPU usage rule".to_string(),
        description: "Fires when CPU usage crosses the threshold".to_string(),
        level: LogLevel::Warning,
        kind: RuleType::Threshold,
        enabled: true,
        threshold_config: Some(ThresholdConfig {
            field: "cpu_usage".to_string(),
            threshold: 80.0,
            compare_type: ">".to_string(),
        }),
    }];
    let window = paginate(&rules, query.pagination());

    Ok(Envelope::ok(
        RulePage {
            total_count: window.total_count,
            has_more: window.has_more,
            rules: window.items.to_vec(),
        },
        "query succeeded",
    ))
}

/// `POST /api/rules`
pub async fn create_rule(body: Result<Json<AlertRule>, JsonRejection>) -> ApiResult<RuleReceipt> {
    let Json(rule) = body?;
    let rule_id = format!("rule-{}", chrono::Utc::now().timestamp());
    tracing::info!(rule = %rule_id, name = %rule.name, "alert rule created");
    Ok(Envelope::ok(RuleReceipt { rule_id }, "rule created"))
}

/// `PUT /api/rules/{id}`
pub async fn update_rule(
    Path(id): Path<String>,
    body: Result<Json<AlertRule>, JsonRejection>,
) -> ApiResult<RuleReceipt> {
    let Json(rule) = body?;
    tracing::info!(rule = %id, name = %rule.name, "alert rule updated");
    Ok(Envelope::ok(RuleReceipt { rule_id: id }, "rule updated"))
}

/// `DELETE /api/rules/{id}`
pub async fn delete_rule(Path(id): Path<String>) -> ApiResult<()> {
    tracing::info!(rule = %id, "alert rule deleted");
    Ok(Envelope::done("rule deleted"))
}
