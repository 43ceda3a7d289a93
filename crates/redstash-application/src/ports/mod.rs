//! Application ports
//!
//! Extension points that backend crates plug into.

pub mod registry;
