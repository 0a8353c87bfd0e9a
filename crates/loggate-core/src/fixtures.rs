//! Fixture set — the canned records served when the primary store is down.
//!
//! The set is built once on first use and never mutated. Records are ordered
//! by `timestamp` descending, the same order the primary path returns.

use crate::types::{LogLevel, LogRecord};
use std::sync::OnceLock;

/// (id, timestamp, source, level, content)
type Row = (&'static str, i64, &'static str, LogLevel, &'static str);

const ROWS: &[Row] = &[
    ("fx-0001", 1_735_693_200, "api-gateway", LogLevel::Info, "GET /api/logs 200 (12ms)"),
    ("fx-0002", 1_735_693_140, "database", LogLevel::Error, "connection pool exhausted: 50/50 connections in use"),
    ("fx-0003", 1_735_693_080, "auth-service", LogLevel::Warning, "token refresh took 1840ms, budget is 1000ms"),
    ("fx-0004", 1_735_693_020, "log-processor", LogLevel::Info, "processed batch of 512 entries"),
    ("fx-0005", 1_735_692_960, "alert-engine", LogLevel::Critical, "rule evaluation halted: alert backlog above 10000"),
    ("fx-0006", 1_735_692_900, "api-gateway", LogLevel::Debug, "routing POST /api/rules to alert-engine"),
    ("fx-0007", 1_735_692_840, "collector", LogLevel::Info, "tailing /var/log/app/service.log"),
    ("fx-0008", 1_735_692_780, "database", LogLevel::Warning, "slow query detected (2300ms) on table logs"),
    ("fx-0009", 1_735_692_720, "api-gateway", LogLevel::Error, "upstream alert-engine returned 503"),
    ("fx-0010", 1_735_692_660, "auth-service", LogLevel::Info, "user session created for uid 4821"),
    ("fx-0011", 1_735_692_600, "collector", LogLevel::Trace, "file offset advanced to 1048576"),
    ("fx-0012", 1_735_692_540, "log-processor", LogLevel::Warning, "dropped 3 malformed json lines"),
    ("fx-0013", 1_735_692_480, "alert-engine", LogLevel::Info, "loaded 12 alert rules"),
    ("fx-0014", 1_735_692_420, "database", LogLevel::Debug, "executing migration 0007_add_level_index"),
    ("fx-0015", 1_735_692_360, "api-gateway", LogLevel::Info, "gateway started on port 8080"),
];

/// The process-wide fixture set.
pub fn fixture_set() -> &'static [LogRecord] {
    static SET: OnceLock<Vec<LogRecord>> = OnceLock::new();
    SET.get_or_init(|| {
        ROWS.iter()
            .map(|&(id, timestamp, source, level, content)| LogRecord {
                id: id.to_string(),
                timestamp,
                source: source.to_string(),
                level,
                content: content.to_string(),
            })
            .collect()
    })
}
