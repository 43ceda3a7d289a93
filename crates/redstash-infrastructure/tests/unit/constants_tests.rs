//! Constants Tests

use redstash_infrastructure::constants::*;

#[test]
fn test_config_constants() {
    assert!(DEFAULT_CONFIG_FILENAME.ends_with(".toml"));
    assert_eq!(CONFIG_ENV_PREFIX, "REDSTASH");
    assert_eq!(CONFIG_ENV_SEPARATOR, "__");
}

#[test]
fn test_default_backend_is_registered() {
    let names: Vec<&str> = redstash_application::ports::registry::list_store_clients()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert!(names.contains(&DEFAULT_STORE_BACKEND));
}
