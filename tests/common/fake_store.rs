//! Scriptable in-memory primary store for integration tests.
//!
//! [`FakeConnector`] hands out sessions that answer with canned counts and
//! rows, record every statement they are asked to run, and count how many
//! sessions were opened and released. A session is "released" when it is
//! dropped, so the counters also cover error and cancellation paths.

use async_trait::async_trait;
use loggate_core::translate::{LogQuery, SqlValue};
use loggate_core::StoreRow;
use loggate_store::{StoreConnector, StoreError, StoreSession};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// How the fake store behaves for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    /// `connect` fails.
    Unreachable,
    /// `connect` succeeds, `ping` fails.
    PingFails,
    /// Probe succeeds, then every query fails.
    QueryFails,
    Healthy,
}

/// A statement the session was asked to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

#[derive(Debug, Default)]
pub struct Recorder {
    opened: AtomicUsize,
    released: AtomicUsize,
    closed: AtomicUsize,
    statements: Mutex<Vec<Executed>>,
}

impl Recorder {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Sessions that were closed gracefully (a subset of `released`).
    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn statements(&self) -> Vec<Executed> {
        self.statements.lock().unwrap().clone()
    }

    fn record(&self, sql: String, params: Vec<SqlValue>) {
        self.statements.lock().unwrap().push(Executed { sql, params });
    }
}

pub struct FakeConnector {
    health: Health,
    total: u64,
    rows: Vec<StoreRow>,
    level_counts: Vec<(i64, u64)>,
    recorder: Arc<Recorder>,
}

impl FakeConnector {
    pub fn new(health: Health) -> Self {
        Self {
            health,
            total: 0,
            rows: Vec::new(),
            level_counts: Vec::new(),
            recorder: Arc::new(Recorder::default()),
        }
    }

    /// Value returned by the COUNT form.
    pub fn total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    /// Rows returned by the SELECT form, as-is.
    pub fn rows(mut self, rows: Vec<StoreRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn level_counts(mut self, counts: Vec<(i64, u64)>) -> Self {
        self.level_counts = counts;
        self
    }

    pub fn recorder(&self) -> Arc<Recorder> {
        self.recorder.clone()
    }
}

#[async_trait]
impl StoreConnector for FakeConnector {
    async fn connect(&self) -> Result<Box<dyn StoreSession>, StoreError> {
        if self.health == Health::Unreachable {
            return Err(StoreError::Disabled);
        }
        self.recorder.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeSession {
            health: self.health,
            total: self.total,
            rows: self.rows.clone(),
            level_counts: self.level_counts.clone(),
            recorder: self.recorder.clone(),
        }))
    }
}

struct FakeSession {
    health: Health,
    total: u64,
    rows: Vec<StoreRow>,
    level_counts: Vec<(i64, u64)>,
    recorder: Arc<Recorder>,
}

impl FakeSession {
    fn query_failure(&self) -> Result<(), StoreError> {
        if self.health == Health::QueryFails {
            return Err(StoreError::Query {
                context: "fake query",
                source: sqlx::Error::Protocol("connection reset mid-query".into()),
            });
        }
        Ok(())
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.recorder.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreSession for FakeSession {
    async fn ping(&mut self) -> Result<(), StoreError> {
        if self.health == Health::PingFails {
            return Err(StoreError::Disabled);
        }
        Ok(())
    }

    async fn count(&mut self, query: &LogQuery) -> Result<u64, StoreError> {
        self.recorder
            .record(query.count_sql(), query.count_params().to_vec());
        self.query_failure()?;
        Ok(self.total)
    }

    async fn fetch(&mut self, query: &LogQuery) -> Result<Vec<StoreRow>, StoreError> {
        self.recorder.record(query.select_sql(), query.select_params());
        self.query_failure()?;
        Ok(self.rows.clone())
    }

    async fn level_counts(&mut self) -> Result<Vec<(i64, u64)>, StoreError> {
        self.recorder
            .record(loggate_core::translate::LEVEL_COUNTS_SQL.to_string(), Vec::new());
        self.query_failure()?;
        Ok(self.level_counts.clone())
    }

    async fn close(self: Box<Self>) {
        self.recorder.closed.fetch_add(1, Ordering::SeqCst);
    }
}
