//! # redstash - Remote Store Clients
//!
//! Implementations of the [`RemoteStoreClient`] port defined in
//! `redstash-domain`. Each backend registers itself in the
//! `redstash-application` registry under its name.
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`RedisStoreClient`](client::RedisStoreClient) | Remote | Redis over one multiplexed connection |
//! | [`MemoryStoreClient`](client::MemoryStoreClient) | Local | In-process store for tests and offline use |
//! | [`NullStoreClient`](client::NullStoreClient) | Testing | Stores nothing |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! redstash-providers = { version = "0.1", default-features = false, features = ["client-memory"] }
//! ```

// Re-export redstash-domain types commonly used with clients
pub use redstash_domain::error::{Error, Result};
pub use redstash_domain::ports::RemoteStoreClient;

/// Backend-specific constants
pub mod constants;

/// Remote store client implementations
pub mod client;
