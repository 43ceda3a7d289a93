//! # redstash
//!
//! A cache store on top of a Redis-compatible key-value server. Values are
//! stored as JSON text, optionally with an expiry, and can be cleared one
//! key at a time, by key prefix, or all at once.
//!
//! ## Example
//!
//! ```ignore
//! use redstash::{ConfigLoader, connect_store};
//!
//! let config = ConfigLoader::new().load()?;
//! let store = connect_store(&config.store, None).await?;
//!
//! store.set_with_ttl("user:1", &user, 300).await?;
//! let cached: Option<User> = store.get("user:1").await?;
//! store.clear(Some("user:")).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, value objects and the remote store port
//! - `application` - the store adapter and the client registry
//! - `providers` - Redis, in-memory and null clients
//! - `infrastructure` - configuration, logging and bootstrap

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use redstash_domain::*;
}

/// Application layer - store adapter and client registry
pub mod application {
    pub use redstash_application::*;
}

/// Client implementations
pub mod providers {
    pub use redstash_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use redstash_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{StoreAdapter, StoreOptions};
pub use infrastructure::{
    AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig, StoreConfig, connect_store,
    connect_store_with_client,
};
