//! Result normalizer — projects raw records from either source into [`LogView`].

use crate::types::{LogLevel, LogRecord, LogView};

/// A row as decoded from the primary store's `logs` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRow {
    pub id: String,
    pub timestamp: i64,
    pub source: String,
    /// Numeric level code; expected 0–5 but not enforced by the store.
    pub level: i64,
    pub content: String,
}

/// Level for a stored code. Codes outside 0–5 become `INFO` so one bad row
/// cannot fail a whole page.
pub fn level_from_code(code: i64) -> LogLevel {
    LogLevel::from_code(code).unwrap_or_else(|| {
        tracing::warn!(code, "unknown level code in primary store, reporting INFO");
        LogLevel::Info
    })
}

pub fn normalize_row(row: StoreRow) -> LogView {
    LogView {
        level: level_from_code(row.level),
        log_id: row.id,
        timestamp: row.timestamp,
        source: row.source,
        content: row.content,
    }
}

pub fn normalize_record(record: &LogRecord) -> LogView {
    LogView {
        log_id: record.id.clone(),
        timestamp: record.timestamp,
        source: record.source.clone(),
        level: record.level,
        content: record.content.clone(),
    }
}
