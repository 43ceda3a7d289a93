//! Bootstrap Tests

mod connect_test;
