//! # redstash - Infrastructure Layer
//!
//! Cross-cutting concerns around the store adapter:
//!
//! - [`config`] - Figment-based configuration (defaults, TOML file, environment)
//! - [`logging`] - tracing subscriber setup
//! - [`error_ext`] - context helpers for foreign errors
//! - [`bootstrap`] - building and initializing a store from configuration

// Link the client crate so its registry entries are present
extern crate redstash_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{connect_store, connect_store_with_client};
pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig, StoreConfig};
