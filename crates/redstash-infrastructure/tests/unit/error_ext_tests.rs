//! Error Extension Tests

use redstash_domain::error::{Error, Result};
use redstash_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_config_context_wraps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).config_context("failed to read config");

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.contains("failed to read config"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_with_config_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_config_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 7);
}
