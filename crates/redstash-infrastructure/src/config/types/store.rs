//! Store configuration types

use std::time::Duration;

use redstash_application::StoreOptions;
use redstash_application::ports::registry::StoreClientConfig;
use redstash_domain::TtlPolicy;
use redstash_domain::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_STORE_HOST, DEFAULT_STORE_PORT,
};
use redstash_domain::value_objects::Bucket;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DEFAULT_STORE_BACKEND;

/// Store configuration
///
/// `host`, `port` and `connect_timeout_secs` are only used when the store
/// builds its own client; a caller-supplied client ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Client backend name ("redis", "memory", "null")
    pub backend: String,

    /// Remote server host
    pub host: String,

    /// Remote server port
    pub port: u16,

    /// Password sent with AUTH during initialization
    #[serde(default, deserialize_with = "string_or_number")]
    pub password: Option<String>,

    /// Database index selected during initialization
    pub database: Option<i64>,

    /// Flush the entire remote server during initialization
    pub clear_cache_on_connect: bool,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// How requested TTLs map to transmitted expiries
    pub ttl_policy: TtlPolicy,

    /// Bucket label attached to the store
    #[serde(default, deserialize_with = "string_or_number")]
    pub bucket: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: DEFAULT_STORE_BACKEND.to_string(),
            host: DEFAULT_STORE_HOST.to_string(),
            port: DEFAULT_STORE_PORT,
            password: None,
            database: None,
            clear_cache_on_connect: false,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            ttl_policy: TtlPolicy::default(),
            bucket: None,
        }
    }
}

impl StoreConfig {
    /// Registry lookup config for building the client
    pub fn client_config(&self) -> StoreClientConfig {
        StoreClientConfig::new(&self.backend)
            .with_host(&self.host)
            .with_port(self.port)
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }

    /// Adapter options derived from this configuration
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            password: self.password.clone(),
            database: self.database,
            clear_cache_on_connect: self.clear_cache_on_connect,
            ttl_policy: self.ttl_policy,
        }
    }

    /// Configured bucket label, if any
    pub fn bucket(&self) -> Option<Bucket> {
        self.bucket.as_deref().map(Bucket::new)
    }
}

/// Environment values that look numeric reach serde as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum TextValue {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextValue>::deserialize(deserializer)?.map(|value| match value {
            TextValue::Text(text) => text,
            TextValue::Unsigned(n) => n.to_string(),
            TextValue::Signed(n) => n.to_string(),
            TextValue::Float(n) => n.to_string(),
        }),
    )
}
