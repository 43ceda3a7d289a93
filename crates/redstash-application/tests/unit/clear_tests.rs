//! Store Clear Tests
//!
//! Whole-store flushes and prefix clears, including partial failures of the
//! concurrent deletes.

use std::sync::Arc;

use redstash_application::{StoreAdapter, StoreOptions};
use redstash_domain::error::Error;

use crate::test_utils::ScriptedClient;

fn store_with(client: &Arc<ScriptedClient>) -> StoreAdapter {
    StoreAdapter::new(client.clone(), StoreOptions::new(), None)
}

async fn seed(store: &StoreAdapter, keys: &[&str]) {
    for key in keys {
        store.set(key, *key).await.unwrap();
    }
}

#[tokio::test]
async fn test_clear_without_prefix_empties_store() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["a", "b", "c"]).await;

    store.clear(None).await.unwrap();

    for key in ["a", "b", "c"] {
        assert!(store.get::<String>(key).await.unwrap().is_none());
    }
    assert!(client.inner().is_empty());
}

#[tokio::test]
async fn test_clear_all_reports_acknowledgement() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["a"]).await;

    assert!(store.clear_all().await.unwrap());
    assert!(client.inner().is_empty());
}

#[tokio::test]
async fn test_clear_with_empty_prefix_flushes_everything() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["user:1", "order:1"]).await;

    store.clear(Some("")).await.unwrap();

    assert!(client.inner().is_empty());
}

#[tokio::test]
async fn test_prefix_clear_keeps_other_keys() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["user:1", "user:2", "order:1"]).await;

    store.clear(Some("user:")).await.unwrap();

    assert!(store.get::<String>("user:1").await.unwrap().is_none());
    assert!(store.get::<String>("user:2").await.unwrap().is_none());
    assert_eq!(
        store.get::<String>("order:1").await.unwrap().as_deref(),
        Some("order:1")
    );
}

#[tokio::test]
async fn test_prefix_clear_counts_removed_keys() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["user:1", "user:2", "user:3", "order:1"]).await;

    assert_eq!(store.clear_by_prefix("user:").await.unwrap(), 3);
    assert_eq!(client.delete_attempts(), 3);
}

#[tokio::test]
async fn test_prefix_clear_with_no_matches() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["order:1"]).await;

    assert_eq!(store.clear_by_prefix("user:").await.unwrap(), 0);
    assert_eq!(client.delete_attempts(), 0);
    assert!(store.clear(Some("user:")).await.is_ok());
}

#[tokio::test]
async fn test_prefix_clear_rejects_empty_prefix() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["a"]).await;

    assert!(matches!(
        store.clear_by_prefix("").await,
        Err(Error::InvalidArgument { .. })
    ));
    assert_eq!(client.inner().len(), 1);
}

#[tokio::test]
async fn test_prefix_clear_glob_characters_keep_meaning() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["user:1", "usex:2", "other"]).await;

    assert_eq!(store.clear_by_prefix("us?r").await.unwrap(), 1);
    assert_eq!(store.clear_by_prefix("use?").await.unwrap(), 1);
    assert_eq!(client.inner().len(), 1);
}

#[tokio::test]
async fn test_prefix_clear_deletes_run_concurrently() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["job:1", "job:2", "job:3", "job:4"]).await;

    store.clear_by_prefix("job:").await.unwrap();

    assert_eq!(client.max_in_flight_deletes(), 4);
}

#[tokio::test]
async fn test_prefix_clear_listing_failure_deletes_nothing() {
    let client = Arc::new(ScriptedClient::new().failing_list());
    let store = store_with(&client);
    seed(&store, &["user:1"]).await;

    let error = store.clear(Some("user:")).await.unwrap_err();

    assert!(error.is_remote());
    assert_eq!(client.delete_attempts(), 0);
    assert_eq!(client.inner().len(), 1);
}

#[tokio::test]
async fn test_prefix_clear_partial_failure_reports_once() {
    let client = Arc::new(
        ScriptedClient::new()
            .failing_delete("order:2")
            .failing_delete("order:4"),
    );
    let store = store_with(&client);
    seed(
        &store,
        &["order:1", "order:2", "order:3", "order:4", "order:5"],
    )
    .await;

    let error = store.clear_by_prefix("order:").await.unwrap_err();

    // The first failure in listing order is the one reported
    assert!(error.is_remote());
    assert!(error.to_string().contains("order:2"));

    // Every delete ran, the failing ones left their keys behind
    assert_eq!(client.delete_attempts(), 5);
    for key in ["order:1", "order:3", "order:5"] {
        assert!(store.get::<String>(key).await.unwrap().is_none());
    }
    for key in ["order:2", "order:4"] {
        assert!(store.get::<String>(key).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn test_clear_all_is_not_bucket_scoped() {
    let client = Arc::new(ScriptedClient::new());
    let users = StoreAdapter::new(client.clone(), StoreOptions::new(), Some("users".into()));
    let orders = StoreAdapter::new(client.clone(), StoreOptions::new(), Some("orders".into()));

    users.set("u", 1).await.unwrap();
    orders.set("o", 2).await.unwrap();

    users.clear_all().await.unwrap();

    assert!(orders.get::<i32>("o").await.unwrap().is_none());
}

#[tokio::test]
async fn test_prefix_clear_with_hash_tag_prefix() {
    let client = Arc::new(ScriptedClient::new());
    let store = store_with(&client);
    seed(&store, &["{user}:1", "user:1", "a{b"]).await;

    assert_eq!(store.clear_by_prefix("{user}:").await.unwrap(), 1);
    assert!(store.get::<String>("{user}:1").await.unwrap().is_none());
    assert_eq!(
        store.get::<String>("user:1").await.unwrap().as_deref(),
        Some("user:1")
    );

    assert_eq!(store.clear_by_prefix("a{b").await.unwrap(), 1);
}
