//! Test utilities for redstash-application tests
//!
//! Stores under test run on the real in-memory client from
//! `redstash-providers`. [`ScriptedClient`] wraps it to inject failures for
//! chosen commands and keys and to record what the store sent.


pub use scripted_client::*;
