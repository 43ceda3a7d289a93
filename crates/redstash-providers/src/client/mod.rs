//! Remote Store Client Implementations
//!
//! ## Backend Selection Guide
//!
//! - **Production**: `RedisStoreClient`
//! - **Tests / single process**: `MemoryStoreClient`
//! - **Disabled caching**: `NullStoreClient`

#[cfg(feature = "client-memory")]
pub mod memory;
pub mod null;
#[cfg(feature = "client-redis")]
pub mod redis;

// Re-export for convenience
#[cfg(feature = "client-memory")]
pub use memory::MemoryStoreClient;
pub use null::NullStoreClient;
#[cfg(feature = "client-redis")]
pub use redis::RedisStoreClient;
