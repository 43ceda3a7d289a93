//! Provider registries
//!
//! Backends register themselves through `linkme` distributed slices and are
//! resolved by name at runtime.

pub mod client;

pub use client::{
    STORE_CLIENTS, StoreClientConfig, StoreClientEntry, list_store_clients, resolve_store_client,
};
