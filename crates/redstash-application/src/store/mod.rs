//! Store adapter
//!
//! Generic cache-store interface over a remote key-value client.

mod adapter;
mod options;

pub use adapter::StoreAdapter;
pub use options::StoreOptions;
