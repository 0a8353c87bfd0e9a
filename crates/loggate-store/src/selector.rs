//! Source selector — connect, ping, and choose primary or fallback.
//!
//! The decision is made fresh on every call. An unreachable store is not an
//! error: it becomes [`Source::Fallback`] and a warning in the log.

use crate::{StoreConnector, StoreError, StoreSession};
use std::time::Duration;

/// Where this request's data comes from.
pub enum Source {
    /// A live, probed session. Owned by the request.
    Primary(Box<dyn StoreSession>),
    /// Serve the fixture set.
    Fallback,
}

impl Source {
    pub fn is_primary(&self) -> bool {
        matches!(self, Source::Primary(_))
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Primary(_) => f.write_str("Primary"),
            Source::Fallback => f.write_str("Fallback"),
        }
    }
}

/// Probe the primary store. Connect and ping together must finish within
/// `probe_timeout`; a session whose ping fails is dropped (and released)
/// before this returns.
pub async fn select_source(connector: &dyn StoreConnector, probe_timeout: Duration) -> Source {
    let probe = async {
        let mut session = connector.connect().await?;
        session.ping().await?;
        Ok::<_, StoreError>(session)
    };

    let outcome = match tokio::time::timeout(probe_timeout, probe).await {
        Ok(outcome) => outcome,
        Err(_) => Err(StoreError::Timeout(probe_timeout)),
    };

    match outcome {
        Ok(session) => {
            tracing::debug!("primary store reachable");
            Source::Primary(session)
        }
        Err(err) => {
            tracing::warn!(reason = %err, "primary store unavailable, serving fixture set");
            Source::Fallback
        }
    }
}
