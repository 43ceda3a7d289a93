//! Store Configuration Tests

use std::time::Duration;

use redstash_domain::TtlPolicy;
use redstash_domain::value_objects::Bucket;
use redstash_infrastructure::config::StoreConfig;

#[test]
fn test_store_config_default() {
    let config = StoreConfig::default();

    assert_eq!(config.backend, "redis");
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 6379);
    assert!(config.password.is_none());
    assert!(config.database.is_none());
    assert!(!config.clear_cache_on_connect);
    assert_eq!(config.ttl_policy, TtlPolicy::Requested);
}

#[test]
fn test_store_config_client_config() {
    let config = StoreConfig {
        backend: "memory".to_string(),
        host: "cache.internal".to_string(),
        port: 7000,
        connect_timeout_secs: 3,
        ..StoreConfig::default()
    };

    let client_config = config.client_config();

    assert_eq!(client_config.provider, "memory");
    assert_eq!(client_config.host, "cache.internal");
    assert_eq!(client_config.port, 7000);
    assert_eq!(client_config.connect_timeout, Duration::from_secs(3));
}

#[test]
fn test_store_config_store_options() {
    let config = StoreConfig {
        password: Some("secret".to_string()),
        database: Some(2),
        clear_cache_on_connect: true,
        ttl_policy: TtlPolicy::legacy(),
        ..StoreConfig::default()
    };

    let options = config.store_options();

    assert_eq!(options.password.as_deref(), Some("secret"));
    assert_eq!(options.database, Some(2));
    assert!(options.clear_cache_on_connect);
    assert_eq!(options.ttl_policy, TtlPolicy::Fixed { seconds: 60 });
}

#[test]
fn test_store_config_bucket() {
    assert!(StoreConfig::default().bucket().is_none());

    let config = StoreConfig {
        bucket: Some("users".to_string()),
        ..StoreConfig::default()
    };
    assert_eq!(config.bucket(), Some(Bucket::new("users")));
}
