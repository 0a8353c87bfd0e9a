//! Core types for loggate-core.
//!
//! This module defines the data model every layer shares: the [`LogLevel`]
//! table, the immutable [`LogRecord`], the parsed per-request [`QueryParams`],
//! and the response-side [`LogView`] / [`QueryResult`] / [`LogStats`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ---------------------------------------------------------------------------
// LogLevel
// ---------------------------------------------------------------------------

/// Log severity. The primary store keeps the numeric code (0–5); fixtures and
/// every response use the symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// All levels in code order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Numeric code stored in the `logs.level` column.
    pub fn code(self) -> i64 {
        match self {
            LogLevel::Trace => 0,
            LogLevel::Debug => 1,
            LogLevel::Info => 2,
            LogLevel::Warning => 3,
            LogLevel::Error => 4,
            LogLevel::Critical => 5,
        }
    }

    /// Inverse of [`LogLevel::code`]. `None` for anything outside 0–5.
    pub fn from_code(code: i64) -> Option<LogLevel> {
        match code {
            0 => Some(LogLevel::Trace),
            1 => Some(LogLevel::Debug),
            2 => Some(LogLevel::Info),
            3 => Some(LogLevel::Warning),
            4 => Some(LogLevel::Error),
            5 => Some(LogLevel::Critical),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = QueryError;

    /// Symbols are matched exactly; `"error"` is not `ERROR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| QueryError::UnknownLevel(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Malformed-request conditions detected while parsing request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unknown log level {0:?} (expected one of TRACE, DEBUG, INFO, WARNING, ERROR, CRITICAL)")]
    UnknownLevel(String),
}

// ---------------------------------------------------------------------------
// LogRecord
// ---------------------------------------------------------------------------

/// A log record as held by the fixture set. Never mutated after construction;
/// normalization builds a [`LogView`] from it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub id: String,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Emitting subsystem, e.g. `database` or `api-gateway`. Free-form.
    pub source: String,
    pub level: LogLevel,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Pagination / QueryParams
// ---------------------------------------------------------------------------

pub const DEFAULT_LIMIT: u32 = 100;

/// Offset/limit window. `limit` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Parse raw `limit` / `offset` strings. Absent, unparsable, or
    /// non-positive values fall back to 100 and 0 respectively; positive
    /// values beyond `u32::MAX` saturate.
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self {
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
            offset: parse_positive(offset).unwrap_or(0),
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    let value = raw?.trim().parse::<i64>().ok()?;
    if value <= 0 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Raw `GET /api/logs` query string, exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLogQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub query: Option<String>,
    pub level: Option<String>,
    pub source: Option<String>,
}

/// Parsed log query. Built once per request.
///
/// Empty filter strings are normalised to `None` so "no filter" has exactly
/// one representation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pub page: Pagination,
    /// Substring matched against `content` or `source`.
    pub query: Option<String>,
    pub level: Option<LogLevel>,
    /// Exact match against `source`.
    pub source: Option<String>,
}

impl QueryParams {
    pub fn parse(raw: &RawLogQuery) -> Result<Self, QueryError> {
        let level = match non_empty(raw.level.as_deref()) {
            Some(symbol) => Some(symbol.parse::<LogLevel>()?),
            None => None,
        };
        Ok(Self {
            page: Pagination::from_raw(raw.limit.as_deref(), raw.offset.as_deref()),
            query: non_empty(raw.query.as_deref()).map(str::to_string),
            level,
            source: non_empty(raw.source.as_deref()).map(str::to_string),
        })
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.page = Pagination {
            limit: limit.max(1),
            offset,
        };
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Response projections
// ---------------------------------------------------------------------------

/// Normalised projection of a record, identical for both data sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogView {
    pub log_id: String,
    pub timestamp: i64,
    pub source: String,
    pub level: LogLevel,
    pub content: String,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub total_count: u64,
    pub has_more: bool,
    pub logs: Vec<LogView>,
}

impl QueryResult {
    /// Build a result for a page starting at `offset`; `has_more` is derived,
    /// never supplied.
    pub fn new(offset: u32, total_count: u64, logs: Vec<LogView>) -> Self {
        let has_more = u64::from(offset) + (logs.len() as u64) < total_count;
        Self {
            total_count,
            has_more,
            logs,
        }
    }
}

/// Per-level record counts served by `/api/logs/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStats {
    pub total_logs: u64,
    pub by_level: BTreeMap<LogLevel, u64>,
}

impl Default for LogStats {
    fn default() -> Self {
        Self {
            total_logs: 0,
            by_level: LogLevel::ALL.into_iter().map(|level| (level, 0)).collect(),
        }
    }
}

impl LogStats {
    pub fn record(&mut self, level: LogLevel, count: u64) {
        *self.by_level.entry(level).or_insert(0) += count;
        self.total_logs += count;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
