use std::fmt;

use redstash_domain::TtlPolicy;

/// Setup and write behaviour of a [`StoreAdapter`](super::StoreAdapter)
///
/// Host and port are not part of this: they belong to the client, which is
/// built (or supplied) before the adapter.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Password sent with `AUTH` during initialization; empty means none
    pub password: Option<String>,
    /// Database index selected during initialization
    pub database: Option<i64>,
    /// Flush the whole remote server during initialization
    pub clear_cache_on_connect: bool,
    /// How requested TTLs map to transmitted expiries
    pub ttl_policy: TtlPolicy,
}

impl StoreOptions {
    /// Create options with no setup steps and the default TTL policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the database index
    pub fn with_database(mut self, index: i64) -> Self {
        self.database = Some(index);
        self
    }

    /// Flush the remote server when initializing
    pub fn with_clear_on_connect(mut self, clear: bool) -> Self {
        self.clear_cache_on_connect = clear;
        self
    }

    /// Set the TTL policy
    pub fn with_ttl_policy(mut self, policy: TtlPolicy) -> Self {
        self.ttl_policy = policy;
        self
    }

    /// Password to authenticate with, ignoring empty strings
    pub(crate) fn effective_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

impl fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreOptions")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("clear_cache_on_connect", &self.clear_cache_on_connect)
            .field("ttl_policy", &self.ttl_policy)
            .finish()
    }
}
