//! MySQL implementation of the store seam, on `sqlx`.
//!
//! Every statement is prepared from the translator's SQL text and every filter
//! value is bound; nothing user-supplied is spliced into SQL here.

use crate::{StoreConnector, StoreError, StoreSession};
use async_trait::async_trait;
use loggate_core::config::StoreConfig;
use loggate_core::translate::{LogQuery, SqlValue, LEVEL_COUNTS_SQL};
use loggate_core::StoreRow;
use sqlx::mysql::{MySqlArguments, MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::query::Query;
use sqlx::{ConnectOptions, Connection, MySql, Row};

/// Opens a fresh connection per request; no pooling, no caching.
#[derive(Debug, Clone)]
pub struct MySqlConnector {
    options: MySqlConnectOptions,
}

impl MySqlConnector {
    pub fn new(config: &StoreConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);
        Self { options }
    }
}

#[async_trait]
impl StoreConnector for MySqlConnector {
    async fn connect(&self) -> Result<Box<dyn StoreSession>, StoreError> {
        let conn = self.options.connect().await.map_err(StoreError::Connect)?;
        Ok(Box::new(MySqlSession { conn }))
    }
}

struct MySqlSession {
    conn: MySqlConnection,
}

#[async_trait]
impl StoreSession for MySqlSession {
    async fn ping(&mut self) -> Result<(), StoreError> {
        self.conn.ping().await.map_err(StoreError::Probe)
    }

    async fn count(&mut self, query: &LogQuery) -> Result<u64, StoreError> {
        let sql = query.count_sql();
        let row = bind_all(&sql, query.count_params())
            .fetch_one(&mut self.conn)
            .await
            .map_err(|source| StoreError::Query {
                context: "count query",
                source,
            })?;
        let count: i64 = row.try_get(0).map_err(|source| StoreError::Query {
            context: "decoding count",
            source,
        })?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn fetch(&mut self, query: &LogQuery) -> Result<Vec<StoreRow>, StoreError> {
        let sql = query.select_sql();
        let params = query.select_params();
        let rows = bind_all(&sql, &params)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|source| StoreError::Query {
                context: "select query",
                source,
            })?;
        rows.iter()
            .map(decode_row)
            .collect::<Result<_, _>>()
            .map_err(|source| StoreError::Query {
                context: "decoding log row",
                source,
            })
    }

    async fn level_counts(&mut self) -> Result<Vec<(i64, u64)>, StoreError> {
        let rows = sqlx::query(LEVEL_COUNTS_SQL)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|source| StoreError::Query {
                context: "level count query",
                source,
            })?;
        rows.iter()
            .map(|row| {
                let level: i64 = row.try_get(0)?;
                let count: i64 = row.try_get(1)?;
                Ok((level, u64::try_from(count).unwrap_or(0)))
            })
            .collect::<Result<_, sqlx::Error>>()
            .map_err(|source| StoreError::Query {
                context: "decoding level counts",
                source,
            })
    }

    async fn close(self: Box<Self>) {
        if let Err(err) = self.conn.close().await {
            tracing::debug!(error = %err, "primary store connection closed uncleanly");
        }
    }
}

fn bind_all<'q>(sql: &'q str, params: &'q [SqlValue]) -> Query<'q, MySql, MySqlArguments> {
    params.iter().fold(sqlx::query(sql), |q, param| match param {
        SqlValue::Text(text) => q.bind(text.as_str()),
        SqlValue::Int(n) => q.bind(*n),
    })
}

fn decode_row(row: &MySqlRow) -> Result<StoreRow, sqlx::Error> {
    Ok(StoreRow {
        id: row.try_get("id")?,
        timestamp: row.try_get("timestamp")?,
        source: row.try_get("source")?,
        level: row.try_get("level")?,
        content: row.try_get("content")?,
    })
}
