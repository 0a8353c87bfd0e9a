//! Filter predicate for the fallback path.
//!
//! Same semantics the primary store gets from the translated WHERE clause:
//! text filter is a case-sensitive substring of `content` or `source`, level
//! and source filters are exact, and all present filters must hold.

use crate::types::{LogRecord, QueryParams};

pub fn matches(record: &LogRecord, params: &QueryParams) -> bool {
    let text = params
        .query
        .as_deref()
        .map_or(true, |q| record.content.contains(q) || record.source.contains(q));
    let level = params.level.map_or(true, |level| record.level == level);
    let source = params
        .source
        .as_deref()
        .map_or(true, |source| record.source == source);

    text && level && source
}

/// Apply [`matches`] over an ordered slice, preserving order.
pub fn filter_records<'a>(records: &'a [LogRecord], params: &QueryParams) -> Vec<&'a LogRecord> {
    records.iter().filter(|r| matches(r, params)).collect()
}
