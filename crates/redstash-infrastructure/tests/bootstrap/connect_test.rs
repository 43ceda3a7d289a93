//! Store Bootstrap Tests

use std::sync::Arc;

use redstash_domain::error::{Error, InitStage};
use redstash_domain::ports::RemoteStoreClient;
use redstash_domain::value_objects::Bucket;
use redstash_infrastructure::config::StoreConfig;
use redstash_infrastructure::{connect_store, connect_store_with_client};
use redstash_providers::client::MemoryStoreClient;

fn memory_config() -> StoreConfig {
    StoreConfig {
        backend: "memory".to_string(),
        ..StoreConfig::default()
    }
}

#[tokio::test]
async fn test_connect_store_memory_backend() {
    let store = connect_store(&memory_config(), None).await.unwrap();

    assert_eq!(store.client().provider_name(), "memory");
    assert_eq!(store.set("greeting", "hello").await.unwrap(), "hello");
    let cached: Option<String> = store.get("greeting").await.unwrap();
    assert_eq!(cached.as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_connect_store_unknown_backend() {
    let config = StoreConfig {
        backend: "memcached".to_string(),
        ..StoreConfig::default()
    };

    match connect_store(&config, None).await {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains("Unknown store client 'memcached'"));
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connect_store_bucket_precedence() {
    let config = StoreConfig {
        bucket: Some("from-config".to_string()),
        ..memory_config()
    };

    let store = connect_store(&config, None).await.unwrap();
    assert_eq!(store.bucket(), Some(&Bucket::new("from-config")));

    let store = connect_store(&config, Some(Bucket::new("explicit")))
        .await
        .unwrap();
    assert_eq!(store.bucket(), Some(&Bucket::new("explicit")));
}

#[tokio::test]
async fn test_connect_store_password_without_server_password() {
    let config = StoreConfig {
        password: Some("secret".to_string()),
        ..memory_config()
    };

    let error = connect_store(&config, None).await.unwrap_err();
    assert!(error.is_fatal());
    assert_eq!(error.init_stage(), Some(InitStage::Authenticate));
}

#[tokio::test]
async fn test_connect_with_client_authenticates_and_selects() {
    let client = Arc::new(MemoryStoreClient::with_password("secret"));
    let config = StoreConfig {
        password: Some("secret".to_string()),
        database: Some(3),
        ..memory_config()
    };

    let store = connect_store_with_client(client.clone(), &config, None)
        .await
        .unwrap();

    assert_eq!(client.selected_database(), 3);
    store.set("k", 1).await.unwrap();
    assert_eq!(store.get::<i32>("k").await.unwrap(), Some(1));
}

#[tokio::test]
async fn test_connect_with_client_wrong_password() {
    let client = Arc::new(MemoryStoreClient::with_password("secret"));
    let config = StoreConfig {
        password: Some("guess".to_string()),
        database: Some(1),
        ..memory_config()
    };

    let error = connect_store_with_client(client.clone(), &config, None)
        .await
        .unwrap_err();

    assert_eq!(error.init_stage(), Some(InitStage::Authenticate));
    // Initialization stops at the failed step
    assert_eq!(client.selected_database(), 0);
}

#[tokio::test]
async fn test_connect_with_client_clears_on_connect() {
    let client = Arc::new(MemoryStoreClient::new());
    {
        let seeded = connect_store_with_client(client.clone(), &memory_config(), None)
            .await
            .unwrap();
        seeded.set("stale", true).await.unwrap();
    }
    assert_eq!(client.len(), 1);

    let config = StoreConfig {
        clear_cache_on_connect: true,
        ..memory_config()
    };
    connect_store_with_client(client.clone(), &config, None)
        .await
        .unwrap();

    assert!(client.is_empty());
}
