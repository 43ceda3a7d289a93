//! # redstash - Application Layer
//!
//! Turns the four logical cache operations (get, set, delete, clear) into
//! calls on a [`RemoteStoreClient`](redstash_domain::RemoteStoreClient),
//! layering JSON encoding on top.
//!
//! - [`store`] - the [`StoreAdapter`] and its [`StoreOptions`]
//! - [`ports::registry`] - compile-time registry of client backends

pub mod ports;
pub mod store;

pub use store::{StoreAdapter, StoreOptions};
