//! Backend constants

/// Registry name of the Redis backend
pub const REDIS_CLIENT_NAME: &str = "redis";

/// Registry name of the in-memory backend
pub const MEMORY_CLIENT_NAME: &str = "memory";

/// Registry name of the null backend
pub const NULL_CLIENT_NAME: &str = "null";

/// URL scheme used to build Redis connection strings
pub const REDIS_URL_SCHEME: &str = "redis";

/// Extra config key holding the password the in-memory backend requires
pub const MEMORY_REQUIREPASS_KEY: &str = "requirepass";

/// Database selected before any `SELECT`
pub const DEFAULT_DATABASE_INDEX: i64 = 0;
