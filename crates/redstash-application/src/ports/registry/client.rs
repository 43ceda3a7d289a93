//! Store Client Registry
//!
//! Auto-registration system for remote store client backends.
//! Backends register themselves via `linkme::distributed_slice` and are
//! discovered at runtime by name.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use redstash_domain::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_STORE_HOST, DEFAULT_STORE_PORT,
};
use redstash_domain::ports::RemoteStoreClient;

/// Configuration for store client creation
///
/// Contains all configuration options that a backend might need.
/// Backends should use what they need and ignore the rest.
#[derive(Debug, Clone)]
pub struct StoreClientConfig {
    /// Backend name (e.g., "redis", "memory", "null")
    pub provider: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Time allowed for establishing the connection
    pub connect_timeout: Duration,
    /// Additional backend-specific configuration
    pub extra: HashMap<String, String>,
}

impl StoreClientConfig {
    /// Create a new config with the given backend name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            host: DEFAULT_STORE_HOST.to_string(),
            port: DEFAULT_STORE_PORT,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            extra: HashMap::new(),
        }
    }

    /// Set the host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for store client backends
///
/// Each backend registers itself with this entry using
/// `#[linkme::distributed_slice(STORE_CLIENTS)]`. The entry contains metadata
/// and a factory function to create client instances.
#[derive(Debug)]
pub struct StoreClientEntry {
    /// Unique backend name (e.g., "redis", "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a client instance
    pub factory: fn(&StoreClientConfig) -> Result<Arc<dyn RemoteStoreClient>, String>,
}

#[linkme::distributed_slice]
pub static STORE_CLIENTS: [StoreClientEntry] = [..];

/// Resolve a store client backend by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn RemoteStoreClient>)` - Created client (not yet connected)
/// * `Err(String)` - Error message if the backend is unknown or creation failed
pub fn resolve_store_client(
    config: &StoreClientConfig,
) -> Result<Arc<dyn RemoteStoreClient>, String> {
    if let Some(entry) = STORE_CLIENTS.iter().find(|e| e.name == config.provider) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = STORE_CLIENTS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown store client '{}'. Available clients: {:?}",
        config.provider, available
    ))
}

/// List all registered store client backends
///
/// Returns a list of (name, description) tuples.
pub fn list_store_clients() -> Vec<(&'static str, &'static str)> {
    STORE_CLIENTS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
