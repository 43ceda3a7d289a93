//! In-memory store client
//!
//! In-process stand-in for a Redis server. It keeps numbered databases,
//! per-key expiry and an optional required password, so store behaviour can
//! be exercised without a server.
//!
//! ## Features
//!
//! - `SELECT`-style numbered databases, `FLUSHALL` clears all of them
//! - Per-entry expiry, removed lazily on access
//! - Glob key listing with Redis pattern syntax (`*`, `?`, `[...]`)
//! - A call counter for asserting how many remote calls were made

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use globset::GlobBuilder;
use redstash_application::ports::registry::{STORE_CLIENTS, StoreClientConfig, StoreClientEntry};
use redstash_domain::error::{Error, Result};
use redstash_domain::ports::RemoteStoreClient;
use redstash_domain::value_objects::KeyExpiry;

use crate::constants::{DEFAULT_DATABASE_INDEX, MEMORY_CLIENT_NAME, MEMORY_REQUIREPASS_KEY};

#[derive(Debug, Clone)]
struct MemoryEntry {
    text: String,
    expires_at: Option<Instant>,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// In-memory store client
///
/// Keys live in a concurrent map keyed by `(database, key)`. The selected
/// database is shared by every caller of one client, like a single server
/// connection.
#[derive(Debug, Default)]
pub struct MemoryStoreClient {
    entries: DashMap<(i64, String), MemoryEntry>,
    database: AtomicI64,
    required_password: Option<String>,
    authenticated: AtomicBool,
    calls: AtomicU64,
}

impl MemoryStoreClient {
    /// Create an empty store with no password
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects commands until authenticated
    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            required_password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Number of commands received so far, including failed ones
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Currently selected database index
    pub fn selected_database(&self) -> i64 {
        self.database.load(Ordering::SeqCst)
    }

    /// Number of live keys across all databases
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|e| !e.is_expired(now)).count()
    }

    /// Whether no live key exists in any database
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count the command and check authentication
    fn begin(&self, command: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.required_password.is_some() && !self.authenticated.load(Ordering::SeqCst) {
            return Err(Error::remote(format!(
                "NOAUTH Authentication required for {command}"
            )));
        }
        Ok(())
    }

    fn slot(&self, key: &str) -> (i64, String) {
        (self.selected_database(), key.to_string())
    }

    /// Live entry for a key, dropping it if it has expired
    fn live_entry(&self, key: &str) -> Option<MemoryEntry> {
        let slot = self.slot(key);
        let now = Instant::now();
        self.entries.remove_if(&slot, |_, entry| entry.is_expired(now));
        self.entries.get(&slot).map(|entry| entry.value().clone())
    }

    fn insert(&self, key: &str, text: &str, expires_at: Option<Instant>) {
        self.entries.insert(
            self.slot(key),
            MemoryEntry {
                text: text.to_string(),
                expires_at,
            },
        );
    }
}

/// Translate a Redis `KEYS` pattern into globset syntax
///
/// Redis has no alternation, so braces and commas are escaped to stay
/// literal. Existing backslash escapes are copied through unchanged.
fn redis_glob(pattern: &str) -> String {
    let mut glob = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                glob.push(c);
                if let Some(escaped) = chars.next() {
                    glob.push(escaped);
                }
            }
            '{' | '}' | ',' => {
                glob.push('\\');
                glob.push(c);
            }
            _ => glob.push(c),
        }
    }
    glob
}

#[async_trait]
impl RemoteStoreClient for MemoryStoreClient {
    async fn connect(&self) -> Result<()> {
        Ok(())
    }

    async fn authenticate(&self, password: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.required_password {
            None => Err(Error::remote(
                "ERR AUTH called without any password configured",
            )),
            Some(expected) if expected == password => {
                self.authenticated.store(true, Ordering::SeqCst);
                Ok(())
            }
            Some(_) => Err(Error::remote("WRONGPASS invalid password")),
        }
    }

    async fn select_database(&self, index: i64) -> Result<()> {
        self.begin("SELECT")?;
        if index < DEFAULT_DATABASE_INDEX {
            return Err(Error::remote("ERR DB index is out of range"));
        }
        self.database.store(index, Ordering::SeqCst);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.begin("GET")?;
        Ok(self.live_entry(key).map(|entry| entry.text))
    }

    async fn set(&self, key: &str, text: &str) -> Result<()> {
        self.begin("SET")?;
        self.insert(key, text, None);
        Ok(())
    }

    async fn set_with_expiry(&self, key: &str, seconds: u64, text: &str) -> Result<()> {
        self.begin("SETEX")?;
        let expires_at = Some(seconds)
            .filter(|&s| s > 0)
            .and_then(|s| Instant::now().checked_add(Duration::from_secs(s)))
            .ok_or_else(|| Error::remote("ERR invalid expire time in 'setex' command"))?;
        self.insert(key, text, Some(expires_at));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.begin("DEL")?;
        let existed = self.live_entry(key).is_some();
        self.entries.remove(&self.slot(key));
        Ok(existed)
    }

    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.begin("KEYS")?;
        let matcher = GlobBuilder::new(&redis_glob(pattern))
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .map_err(|e| Error::remote_with_source(format!("ERR invalid pattern '{pattern}'"), e))?
            .compile_matcher();

        let database = self.selected_database();
        let now = Instant::now();
        Ok(self
            .entries
            .iter()
            .filter(|e| e.key().0 == database && !e.is_expired(now))
            .filter(|e| matcher.is_match(&e.key().1))
            .map(|e| e.key().1.clone())
            .collect())
    }

    async fn flush_all(&self) -> Result<bool> {
        self.begin("FLUSHALL")?;
        self.entries.clear();
        Ok(true)
    }

    async fn expiry(&self, key: &str) -> Result<KeyExpiry> {
        self.begin("TTL")?;
        let Some(entry) = self.live_entry(key) else {
            return Ok(KeyExpiry::Missing);
        };
        Ok(match entry.expires_at {
            None => KeyExpiry::Persistent,
            Some(at) => {
                // Round to the nearest second, as the TTL command does
                let millis = at.saturating_duration_since(Instant::now()).as_millis();
                KeyExpiry::Expires(u64::try_from((millis + 500) / 1000).unwrap_or(u64::MAX))
            }
        })
    }

    fn provider_name(&self) -> &str {
        MEMORY_CLIENT_NAME
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating in-memory store client instances.
fn memory_client_factory(
    config: &StoreClientConfig,
) -> std::result::Result<Arc<dyn RemoteStoreClient>, String> {
    let client = match config.extra.get(MEMORY_REQUIREPASS_KEY) {
        Some(password) => MemoryStoreClient::with_password(password.clone()),
        None => MemoryStoreClient::new(),
    };
    Ok(Arc::new(client))
}

#[linkme::distributed_slice(STORE_CLIENTS)]
static MEMORY_CLIENT: StoreClientEntry = StoreClientEntry {
    name: MEMORY_CLIENT_NAME,
    description: "In-process store for tests and single-process use",
    factory: memory_client_factory,
};
