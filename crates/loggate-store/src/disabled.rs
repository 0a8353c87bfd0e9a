use crate::{StoreConnector, StoreError, StoreSession};
use async_trait::async_trait;

/// Connector installed when `store.enabled = false`; every request falls back.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledConnector;

#[async_trait]
impl StoreConnector for DisabledConnector {
    async fn connect(&self) -> Result<Box<dyn StoreSession>, StoreError> {
        Err(StoreError::Disabled)
    }
}
