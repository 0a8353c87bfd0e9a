//! Shared test utilities for loggate integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Nothing here touches a real database: the primary store
//! is either [`fake_store::FakeConnector`] or unreachable.

#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod fake_store;
pub mod http;
pub mod live_server;

pub use builders::*;
pub use fake_store::{FakeConnector, Health};
pub use http::{get, send, TestResponse};
pub use live_server::LiveServer;
