//! Store bootstrap
//!
//! Builds a [`StoreAdapter`] from configuration and runs its initialization
//! sequence, so callers get back a store that is ready to use or an error.

use std::sync::Arc;

use redstash_application::StoreAdapter;
use redstash_application::ports::registry::resolve_store_client;
use redstash_domain::error::{Error, Result};
use redstash_domain::ports::RemoteStoreClient;
use redstash_domain::value_objects::Bucket;

use crate::config::StoreConfig;
use crate::logging::log_store_backend;

/// Resolve the configured backend, build the store and initialize it
///
/// `bucket` takes precedence over the bucket in `config`.
///
/// # Errors
/// [`Error::Configuration`] for an unknown backend or a client that cannot
/// be built, [`Error::Initialization`] when a setup step fails.
pub async fn connect_store(config: &StoreConfig, bucket: Option<Bucket>) -> Result<StoreAdapter> {
    let client = resolve_store_client(&config.client_config()).map_err(Error::configuration)?;
    log_store_backend(&config.backend, &config.host, config.port);

    connect_store_with_client(client, config, bucket).await
}

/// Build and initialize a store around a caller-supplied client
///
/// Only the adapter options and bucket are taken from `config`; the
/// backend, host, port and timeout fields are ignored.
pub async fn connect_store_with_client(
    client: Arc<dyn RemoteStoreClient>,
    config: &StoreConfig,
    bucket: Option<Bucket>,
) -> Result<StoreAdapter> {
    let store = StoreAdapter::new(
        client,
        config.store_options(),
        bucket.or_else(|| config.bucket()),
    );
    store.initialize().await?;
    Ok(store)
}
