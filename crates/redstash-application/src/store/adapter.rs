//! Store adapter over a remote key-value client
//!
//! Values are JSON-encoded on write and decoded on read; everything else is
//! handed to the client as-is. There is no local state besides the client
//! handle, so clones of an adapter share one connection.
//!
//! ## Example
//!
//! ```ignore
//! use redstash_application::{StoreAdapter, StoreOptions};
//!
//! let store = StoreAdapter::new(client, StoreOptions::new(), Some("users".into()));
//! store.initialize().await?;
//!
//! store.set_with_ttl("user:1", &user, 300).await?;
//! let cached: Option<User> = store.get("user:1").await?;
//! store.clear_by_prefix("user:").await?;
//! ```

use std::fmt;
use std::sync::Arc;

use futures::future::join_all;
use redstash_domain::constants::PREFIX_GLOB_WILDCARD;
use redstash_domain::error::{Error, InitStage, Result};
use redstash_domain::ports::RemoteStoreClient;
use redstash_domain::value_objects::{Bucket, KeyExpiry};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::options::StoreOptions;

/// Cache store backed by a remote key-value client
///
/// Every operation issues at most the remote calls it needs and returns
/// exactly one result. Nothing is retried; remote failures come back as
/// [`Error::Remote`] with the client's error as source.
#[derive(Clone)]
pub struct StoreAdapter {
    client: Arc<dyn RemoteStoreClient>,
    options: StoreOptions,
    bucket: Option<Bucket>,
}

impl StoreAdapter {
    /// Create an adapter around a client
    ///
    /// No remote call is made; call [`initialize`](Self::initialize) before
    /// relying on authentication, database selection or the initial flush.
    pub fn new(
        client: Arc<dyn RemoteStoreClient>,
        options: StoreOptions,
        bucket: Option<Bucket>,
    ) -> Self {
        Self {
            client,
            options,
            bucket,
        }
    }

    /// Run the setup steps implied by the options
    ///
    /// In order: connect, authenticate (if a password is set), select the
    /// database (if one is set), flush the server (if
    /// `clear_cache_on_connect`). The first failure stops the sequence.
    ///
    /// # Errors
    /// [`Error::Initialization`] naming the failed step. The store must not be
    /// used after this error.
    pub async fn initialize(&self) -> Result<()> {
        self.client
            .connect()
            .await
            .map_err(|e| Error::initialization(InitStage::Connect, e))?;

        if let Some(password) = self.options.effective_password() {
            self.client
                .authenticate(password)
                .await
                .map_err(|e| Error::initialization(InitStage::Authenticate, e))?;
        }

        if let Some(index) = self.options.database {
            self.client
                .select_database(index)
                .await
                .map_err(|e| Error::initialization(InitStage::SelectDatabase, e))?;
        }

        if self.options.clear_cache_on_connect {
            self.clear_all()
                .await
                .map_err(|e| Error::initialization(InitStage::InitialFlush, e))?;
        }

        info!(
            provider = self.client.provider_name(),
            bucket = self.bucket_name(),
            "[STORE] Store initialized"
        );
        Ok(())
    }

    /// Get the value stored at `key`
    ///
    /// # Returns
    /// `Ok(None)` when the key is absent, a miss is not an error.
    ///
    /// # Errors
    /// [`Error::Decode`] if the stored payload is not valid JSON for `T`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        ensure_key(key)?;

        let payload = self.client.get(key).await.inspect_err(|e| {
            warn!(key, error = %e, "[STORE] GET failed");
        })?;

        match payload {
            Some(text) if !text.is_empty() => {
                debug!(key, "[STORE] Hit");
                serde_json::from_str(&text)
                    .map(Some)
                    .map_err(|source| Error::decode(key, source))
            }
            _ => {
                debug!(key, "[STORE] Miss");
                Ok(None)
            }
        }
    }

    /// Store `value` at `key` without expiry
    ///
    /// # Returns
    /// The value that was passed in.
    ///
    /// # Errors
    /// [`Error::Encode`] if the value cannot be serialized, in which case no
    /// remote call is made.
    pub async fn set<T: Serialize>(&self, key: &str, value: T) -> Result<T> {
        self.write(key, value, None).await
    }

    /// Store `value` at `key`, expiring according to `ttl_secs`
    ///
    /// The transmitted expiry is decided by the configured
    /// [`TtlPolicy`](redstash_domain::TtlPolicy). A TTL of zero stores
    /// the value without expiry.
    pub async fn set_with_ttl<T: Serialize>(&self, key: &str, value: T, ttl_secs: u64) -> Result<T> {
        self.write(key, value, Some(ttl_secs)).await
    }

    /// Alias of [`set`](Self::set)
    pub async fn put<T: Serialize>(&self, key: &str, value: T) -> Result<T> {
        self.set(key, value).await
    }

    /// Alias of [`set_with_ttl`](Self::set_with_ttl)
    pub async fn put_with_ttl<T: Serialize>(&self, key: &str, value: T, ttl_secs: u64) -> Result<T> {
        self.set_with_ttl(key, value, ttl_secs).await
    }

    /// Delete `key`
    ///
    /// # Returns
    /// The client's report: true if the key existed.
    pub async fn del(&self, key: &str) -> Result<bool> {
        ensure_key(key)?;
        self.client.delete(key).await
    }

    /// Clear by prefix, or the whole server when no prefix is given
    ///
    /// An empty prefix counts as no prefix and flushes the whole server.
    /// See [`clear_all`](Self::clear_all) and
    /// [`clear_by_prefix`](Self::clear_by_prefix).
    pub async fn clear(&self, prefix: Option<&str>) -> Result<()> {
        match prefix.filter(|p| !p.is_empty()) {
            Some(prefix) => self.clear_by_prefix(prefix).await.map(drop),
            None => self.clear_all().await.map(drop),
        }
    }

    /// Flush the entire remote server
    ///
    /// This is not scoped to the bucket: entries written by every store
    /// sharing the server, in every database, are removed.
    ///
    /// # Returns
    /// The server's flush acknowledgement.
    pub async fn clear_all(&self) -> Result<bool> {
        warn!(
            bucket = self.bucket_name(),
            "[STORE] Flushing entire remote store"
        );
        self.client.flush_all().await.inspect_err(|e| {
            warn!(error = %e, "[STORE] FLUSHALL failed");
        })
    }

    /// Delete every key starting with `prefix`
    ///
    /// Matching keys are listed with the glob `prefix*` (glob characters in
    /// the prefix keep their meaning), then deleted concurrently with one
    /// independent delete per key. The deletes are not atomic as a group.
    /// All of them are awaited before returning, even when some fail.
    ///
    /// # Returns
    /// Number of keys removed; zero when nothing matched.
    ///
    /// # Errors
    /// The listing error, with no delete attempted, or the error of the
    /// first failed delete in listing order.
    pub async fn clear_by_prefix(&self, prefix: &str) -> Result<usize> {
        if prefix.is_empty() {
            return Err(Error::invalid_argument(
                "prefix must not be empty, use clear_all to flush the store",
            ));
        }

        let pattern = format!("{prefix}{PREFIX_GLOB_WILDCARD}");
        let keys = self.client.list_keys(&pattern).await.inspect_err(|e| {
            warn!(pattern = %pattern, error = %e, "[STORE] KEYS failed");
        })?;

        if keys.is_empty() {
            debug!(pattern = %pattern, "[STORE] Nothing to clear");
            return Ok(0);
        }

        let results = join_all(keys.iter().map(|key| self.client.delete(key))).await;

        let mut removed = 0;
        let mut first_error = None;
        for (key, result) in keys.iter().zip(results) {
            match result {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!(key, error = %e, "[STORE] DEL failed during prefix clear");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        if let Some(error) = first_error {
            return Err(error);
        }

        debug!(
            pattern = %pattern,
            matched = keys.len(),
            removed,
            "[STORE] Prefix cleared"
        );
        Ok(removed)
    }

    /// Report the remote store's own expiry for `key`
    pub async fn expiry(&self, key: &str) -> Result<KeyExpiry> {
        ensure_key(key)?;
        self.client.expiry(key).await
    }

    /// The bucket label, if any
    pub fn bucket(&self) -> Option<&Bucket> {
        self.bucket.as_ref()
    }

    /// The options the adapter was created with
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// The underlying client
    pub fn client(&self) -> &Arc<dyn RemoteStoreClient> {
        &self.client
    }

    async fn write<T: Serialize>(&self, key: &str, value: T, ttl_secs: Option<u64>) -> Result<T> {
        ensure_key(key)?;
        let text = serde_json::to_string(&value).map_err(Error::encode)?;

        let expiry = ttl_secs.and_then(|requested| self.options.ttl_policy.effective_secs(requested));
        let written = match expiry {
            Some(seconds) => self.client.set_with_expiry(key, seconds, &text).await,
            None => self.client.set(key, &text).await,
        };
        written.inspect_err(|e| {
            warn!(key, error = %e, "[STORE] SET failed");
        })?;

        debug!(key, expiry_secs = ?expiry, "[STORE] Stored");
        Ok(value)
    }

    fn bucket_name(&self) -> &str {
        self.bucket.as_ref().map_or("", Bucket::name)
    }
}

impl fmt::Debug for StoreAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreAdapter")
            .field("provider", &self.client.provider_name())
            .field("bucket", &self.bucket)
            .field("options", &self.options)
            .finish()
    }
}

fn ensure_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_argument("cache key must not be empty"));
    }
    Ok(())
}
