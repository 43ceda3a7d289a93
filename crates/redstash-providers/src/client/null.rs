//! Null store client for testing
//!
//! A client implementation that doesn't store anything.
//! Useful for testing and disabling caching.

use std::sync::Arc;

use async_trait::async_trait;
use redstash_application::ports::registry::{STORE_CLIENTS, StoreClientConfig, StoreClientEntry};
use redstash_domain::error::Result;
use redstash_domain::ports::RemoteStoreClient;
use redstash_domain::value_objects::KeyExpiry;

use crate::constants::NULL_CLIENT_NAME;

/// Null store client that doesn't store anything
///
/// Every write is accepted and dropped, every read misses.
///
/// # Example
///
/// ```rust
/// use redstash_providers::client::NullStoreClient;
///
/// let client = NullStoreClient::new();
/// // All operations succeed but nothing is stored
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullStoreClient;

impl NullStoreClient {
    /// Create a new null store client
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RemoteStoreClient for NullStoreClient {
    async fn connect(&self) -> Result<()> {
        Ok(())
    }

    async fn authenticate(&self, _password: &str) -> Result<()> {
        Ok(())
    }

    async fn select_database(&self, _index: i64) -> Result<()> {
        Ok(())
    }

    async fn get(&self, _key: &str) -> Result<Option<String>> {
        // Always a miss
        Ok(None)
    }

    async fn set(&self, _key: &str, _text: &str) -> Result<()> {
        Ok(())
    }

    async fn set_with_expiry(&self, _key: &str, _seconds: u64, _text: &str) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn list_keys(&self, _pattern: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn flush_all(&self) -> Result<bool> {
        Ok(true)
    }

    async fn expiry(&self, _key: &str) -> Result<KeyExpiry> {
        Ok(KeyExpiry::Missing)
    }

    fn provider_name(&self) -> &str {
        NULL_CLIENT_NAME
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_client_factory(
    _config: &StoreClientConfig,
) -> std::result::Result<Arc<dyn RemoteStoreClient>, String> {
    Ok(Arc::new(NullStoreClient::new()))
}

#[linkme::distributed_slice(STORE_CLIENTS)]
static NULL_CLIENT: StoreClientEntry = StoreClientEntry {
    name: NULL_CLIENT_NAME,
    description: "No-op store that never keeps anything",
    factory: null_client_factory,
};
