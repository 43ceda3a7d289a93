//! Domain constants
//!
//! Defaults that both the adapter and the backends agree on.

/// Expiry transmitted for every TTL write under [`TtlPolicy::legacy`](crate::TtlPolicy::legacy)
pub const LEGACY_FIXED_TTL_SECS: u64 = 60;

/// Default remote store host
pub const DEFAULT_STORE_HOST: &str = "127.0.0.1";

/// Default remote store port
pub const DEFAULT_STORE_PORT: u16 = 6379;

/// Default time allowed for establishing the remote connection
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Suffix appended to a prefix to build the key-listing glob
pub const PREFIX_GLOB_WILDCARD: &str = "*";
