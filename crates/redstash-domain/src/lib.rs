//! # redstash - Domain Layer
//!
//! Core types shared by every redstash crate:
//!
//! - [`error`] - the single error enum and `Result` alias
//! - [`ports`] - the [`RemoteStoreClient`](ports::RemoteStoreClient) contract that
//!   every key-value backend implements
//! - [`value_objects`] - buckets, TTL policy and reported key expiry
//! - [`constants`] - defaults shared across layers
//!
//! This crate has no knowledge of Redis itself; backends live in
//! `redstash-providers`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, InitStage, Result};
pub use ports::RemoteStoreClient;
pub use value_objects::{Bucket, KeyExpiry, TtlPolicy};
