//! Redis store client
//!
//! Talks to a Redis server over a single multiplexed connection.
//!
//! ## Features
//!
//! - One connection shared by every clone and every command, so `AUTH` and
//!   `SELECT` issued during initialization apply to all later commands
//! - Lazy connection with a bounded connect timeout
//! - Plain `SET` / `SETEX` writes, `KEYS` listing, `FLUSHALL`
//!
//! ## Example
//!
//! ```ignore
//! use redstash_providers::client::RedisStoreClient;
//! use std::time::Duration;
//!
//! let client = RedisStoreClient::with_host_port("localhost", 6379, Duration::from_secs(5))?;
//! client.connect().await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{Client, RedisError};
use redstash_application::ports::registry::{STORE_CLIENTS, StoreClientConfig, StoreClientEntry};
use redstash_domain::error::{Error, Result};
use redstash_domain::ports::RemoteStoreClient;
use redstash_domain::value_objects::KeyExpiry;
use tokio::sync::OnceCell;
use tokio::time::timeout;

use crate::constants::{REDIS_CLIENT_NAME, REDIS_URL_SCHEME};

/// Redis store client
///
/// Holds one multiplexed connection, established on first use. Commands are
/// pipelined over it; nothing is retried and a dropped connection surfaces
/// as a remote error.
#[derive(Clone)]
pub struct RedisStoreClient {
    client: Client,
    address: String,
    connect_timeout: Duration,
    connection: Arc<OnceCell<MultiplexedConnection>>,
}

impl RedisStoreClient {
    /// Create a new Redis store client with connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    /// * `connect_timeout` - Time allowed for establishing the connection
    ///
    /// No connection is opened here.
    pub fn new(connection_string: &str, connect_timeout: Duration) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::configuration_with_source(
                format!("Invalid Redis connection string '{connection_string}'"),
                e,
            )
        })?;

        Ok(Self {
            client,
            address: connection_string.to_string(),
            connect_timeout,
            connection: Arc::new(OnceCell::new()),
        })
    }

    /// Create a new Redis store client with host and port
    pub fn with_host_port(host: &str, port: u16, connect_timeout: Duration) -> Result<Self> {
        Self::new(
            &format!("{REDIS_URL_SCHEME}://{host}:{port}"),
            connect_timeout,
        )
    }

    /// The connection string this client was created with
    pub fn server_address(&self) -> &str {
        &self.address
    }

    /// Get the shared connection, opening it on first use
    async fn connection(&self) -> Result<MultiplexedConnection> {
        let connection = self
            .connection
            .get_or_try_init(|| async {
                tracing::info!("[REDIS] Connecting to {}", self.address);
                let connection = timeout(
                    self.connect_timeout,
                    self.client.get_multiplexed_async_connection(),
                )
                .await
                .map_err(|_| {
                    Error::remote(format!(
                        "Redis connection to {} timed out after {}s",
                        self.address,
                        self.connect_timeout.as_secs()
                    ))
                })?
                .map_err(|e| {
                    Error::remote_with_source(
                        format!("Failed to connect to Redis at {}: {e}", self.address),
                        e,
                    )
                })?;
                tracing::info!("[REDIS] Connection established");
                Ok::<_, Error>(connection)
            })
            .await?;

        Ok(connection.clone())
    }

    /// Run a command on the shared connection
    async fn query<T: redis::FromRedisValue>(&self, name: &str, cmd: &redis::Cmd) -> Result<T> {
        let mut conn = self.connection().await?;
        cmd.query_async(&mut conn)
            .await
            .map_err(|e| command_error(name, e))
    }
}

/// Payloads are raw bytes on the server; anything not UTF-8 cannot be JSON
fn utf8_payload(key: &str, payload: Option<Vec<u8>>) -> Result<Option<String>> {
    payload
        .map(|bytes| String::from_utf8(bytes).map_err(|e| Error::decode(key, e)))
        .transpose()
}

fn command_error(name: &str, error: RedisError) -> Error {
    tracing::warn!("[REDIS] {} failed: {}", name, error);
    Error::remote_with_source(format!("Redis {name} failed: {error}"), error)
}

#[async_trait]
impl RemoteStoreClient for RedisStoreClient {
    async fn connect(&self) -> Result<()> {
        self.connection().await.map(drop)
    }

    async fn authenticate(&self, password: &str) -> Result<()> {
        self.query("AUTH", redis::cmd("AUTH").arg(password)).await
    }

    async fn select_database(&self, index: i64) -> Result<()> {
        self.query("SELECT", redis::cmd("SELECT").arg(index)).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let payload: Option<Vec<u8>> = self.query("GET", redis::cmd("GET").arg(key)).await?;
        utf8_payload(key, payload)
    }

    async fn set(&self, key: &str, text: &str) -> Result<()> {
        self.query("SET", redis::cmd("SET").arg(key).arg(text)).await
    }

    async fn set_with_expiry(&self, key: &str, seconds: u64, text: &str) -> Result<()> {
        self.query("SETEX", redis::cmd("SETEX").arg(key).arg(seconds).arg(text))
            .await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let removed: i64 = self.query("DEL", redis::cmd("DEL").arg(key)).await?;
        Ok(removed > 0)
    }

    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.query("KEYS", redis::cmd("KEYS").arg(pattern)).await
    }

    async fn flush_all(&self) -> Result<bool> {
        self.query::<()>("FLUSHALL", &redis::cmd("FLUSHALL")).await?;
        Ok(true)
    }

    async fn expiry(&self, key: &str) -> Result<KeyExpiry> {
        let reply: i64 = self.query("TTL", redis::cmd("TTL").arg(key)).await?;
        Ok(KeyExpiry::from_ttl_reply(reply))
    }

    fn provider_name(&self) -> &str {
        REDIS_CLIENT_NAME
    }
}

impl std::fmt::Debug for RedisStoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStoreClient")
            .field("server", &self.address)
            .field("connect_timeout", &self.connect_timeout)
            .field("connected", &self.connection.initialized())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating Redis store client instances.
fn redis_client_factory(
    config: &StoreClientConfig,
) -> std::result::Result<Arc<dyn RemoteStoreClient>, String> {
    let client = RedisStoreClient::with_host_port(&config.host, config.port, config.connect_timeout)
        .map_err(|e| format!("Failed to create Redis client: {e}"))?;

    Ok(Arc::new(client))
}

#[linkme::distributed_slice(STORE_CLIENTS)]
static REDIS_CLIENT: StoreClientEntry = StoreClientEntry {
    name: REDIS_CLIENT_NAME,
    description: "Redis server over a multiplexed connection",
    factory: redis_client_factory,
};
