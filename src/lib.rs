//! loggate — REST gateway in front of the log store and alert engine.
//!
//! This crate re-exports the three workspace layers so that integration tests
//! and the binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! HTTP ──► loggate-api ──► loggate-store ──┬──► MySQL (primary)
//!              │                 │         └──► fixture set (fallback)
//!              └─────────────────┴──► loggate-core (model, filter, paginate,
//!                                      translate, normalize, config)
//! ```
//!
//! Every request is handled independently. The only shared state is the
//! fixture set and the configuration, both fixed at startup.

pub use loggate_api as api;
pub use loggate_core as model;
pub use loggate_store as store;

pub use loggate_api::{router, serve, AppState};
pub use loggate_core::config::Config;
