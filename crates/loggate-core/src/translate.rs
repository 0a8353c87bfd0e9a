//! Query translator — turns [`QueryParams`] into the primary store's SQL.
//!
//! The COUNT and SELECT forms share one WHERE clause. Filter values only ever
//! travel as bound parameters; the SQL text depends solely on *which* filters
//! are present, never on their contents.

use crate::types::QueryParams;

/// Table holding `(id, timestamp, source, level, content)`.
pub const LOG_TABLE: &str = "logs";

/// Escape character for LIKE patterns. Declared in the SQL with `ESCAPE` so
/// matching does not depend on the server's `NO_BACKSLASH_ESCAPES` mode.
const LIKE_ESCAPE: char = '!';

/// Level histogram used by the stats endpoint.
pub const LEVEL_COUNTS_SQL: &str = "SELECT level, COUNT(*) FROM logs GROUP BY level";

/// A value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
}

/// Translated log query: a shared predicate plus its bound values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    predicates: Vec<&'static str>,
    params: Vec<SqlValue>,
    limit: i64,
    offset: i64,
}

impl LogQuery {
    pub fn translate(params: &QueryParams) -> Self {
        let mut predicates = Vec::new();
        let mut values = Vec::new();

        if let Some(text) = params.query.as_deref() {
            let pattern = format!("%{}%", escape_like(text));
            predicates.push("(content LIKE ? ESCAPE '!' OR source LIKE ? ESCAPE '!')");
            values.push(SqlValue::Text(pattern.clone()));
            values.push(SqlValue::Text(pattern));
        }
        if let Some(level) = params.level {
            predicates.push("level = ?");
            values.push(SqlValue::Int(level.code()));
        }
        if let Some(source) = params.source.as_deref() {
            predicates.push("source = ?");
            values.push(SqlValue::Text(source.to_string()));
        }

        Self {
            predicates,
            params: values,
            limit: i64::from(params.page.limit),
            offset: i64::from(params.page.offset),
        }
    }

    fn where_clause(&self) -> String {
        if self.predicates.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.predicates.join(" AND "))
        }
    }

    /// `SELECT COUNT(*)` over the filtered set. Never paginated.
    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM {LOG_TABLE}{}", self.where_clause())
    }

    /// Bound values for [`LogQuery::count_sql`].
    pub fn count_params(&self) -> &[SqlValue] {
        &self.params
    }

    pub fn select_sql(&self) -> String {
        format!(
            "SELECT id, timestamp, source, level, content FROM {LOG_TABLE}{} \
             ORDER BY timestamp DESC LIMIT ? OFFSET ?",
            self.where_clause()
        )
    }

    /// Bound values for [`LogQuery::select_sql`]: the filter values followed
    /// by limit and offset.
    pub fn select_params(&self) -> Vec<SqlValue> {
        let mut params = self.params.clone();
        params.push(SqlValue::Int(self.limit));
        params.push(SqlValue::Int(self.offset));
        params
    }
}

/// Escape LIKE wildcards so the user's text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
