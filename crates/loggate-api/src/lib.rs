//! loggate-api — the REST surface.
//!
//! Builds the axum [`Router`] over the log query service and the alert stubs,
//! wraps every route in the CORS middleware, and renders every outcome in the
//! [`Envelope`](envelope::Envelope).

pub mod cors;
pub mod envelope;
pub mod error;
pub mod handlers;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use loggate_core::{config::Config, fixtures::fixture_set};
use loggate_store::{DisabledConnector, LogQueryService, MySqlConnector, StoreConnector};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Per-process state handed to every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub logs: LogQueryService,
}

impl AppState {
    pub fn new(logs: LogQueryService) -> Self {
        Self { logs }
    }

    /// Wire the MySQL connector (or the disabled one) from configuration.
    pub fn from_config(config: &Config) -> Self {
        let connector: Arc<dyn StoreConnector> = if config.store.enabled {
            Arc::new(MySqlConnector::new(&config.store))
        } else {
            tracing::info!("primary store disabled, every query serves the fixture set");
            Arc::new(DisabledConnector)
        };
        Self::new(LogQueryService::new(
            connector,
            config.store.probe_timeout(),
            fixture_set(),
        ))
    }
}

pub fn router(state: AppState) -> Router {
    use handlers::{alerts, logs, rules};

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/logs", get(logs::query_logs).post(logs::submit_logs))
        .route("/api/logs/stats", get(logs::log_stats))
        .route("/api/alerts", get(alerts::list_alerts))
        .route("/api/alerts/{id}", get(alerts::alert_detail))
        .route("/api/alerts/{id}/status", put(alerts::update_alert_status))
        .route("/api/rules", get(rules::list_rules).post(rules::create_rule))
        .route(
            "/api/rules/{id}",
            put(rules::update_rule).delete(rules::delete_rule),
        )
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)
}

/// Serve until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "loggate listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
