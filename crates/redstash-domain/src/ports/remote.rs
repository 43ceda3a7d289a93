//! Remote Store Client Port
//!
//! Port for the key-value server behind a store. The adapter never talks to
//! a server directly; every read, write and delete goes through this trait,
//! so any backend satisfying it (Redis, in-memory, null) can be swapped in.
//!
//! Values cross this boundary as already-encoded text. Encoding and decoding
//! are the adapter's job.

use crate::error::Result;
use crate::value_objects::KeyExpiry;
use async_trait::async_trait;

/// Remote Key-Value Client Port
///
/// Mirrors the command surface the store adapter relies on. Implementations
/// report failures as [`Error::Remote`](crate::Error::Remote) and must not
/// retry on their own.
///
/// # Example
///
/// ```ignore
/// use redstash_domain::ports::RemoteStoreClient;
///
/// client.connect().await?;
/// client.set("user:1", r#"{"name":"ada"}"#).await?;
/// assert_eq!(client.get("user:1").await?.as_deref(), Some(r#"{"name":"ada"}"#));
/// ```
#[async_trait]
pub trait RemoteStoreClient: Send + Sync + std::fmt::Debug {
    /// Establish the connection to the server
    ///
    /// Calling it again once connected is a no-op. Other operations connect
    /// on demand, so calling this is only needed to surface connection
    /// failures early.
    async fn connect(&self) -> Result<()>;

    /// Authenticate the connection with a password
    async fn authenticate(&self, password: &str) -> Result<()>;

    /// Switch the connection to the numbered database
    async fn select_database(&self, index: i64) -> Result<()>;

    /// Get the raw text stored at `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `text` at `key` without expiry
    async fn set(&self, key: &str, text: &str) -> Result<()>;

    /// Store `text` at `key`, expiring after `seconds`
    async fn set_with_expiry(&self, key: &str, seconds: u64, text: &str) -> Result<()>;

    /// Delete `key`
    ///
    /// # Returns
    /// True if the key existed and was removed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// List every key matching a glob pattern (`*`, `?`, `[...]`)
    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Remove every key from every database of the server
    ///
    /// # Returns
    /// True when the server acknowledged the flush
    async fn flush_all(&self) -> Result<bool>;

    /// Report how long `key` has left to live
    async fn expiry(&self, key: &str) -> Result<KeyExpiry>;

    /// Get the name/identifier of this client implementation
    ///
    /// # Returns
    /// A string identifier for the backend (e.g., "redis", "memory", "null")
    fn provider_name(&self) -> &str;
}
