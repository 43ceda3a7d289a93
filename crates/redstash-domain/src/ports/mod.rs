//! Ports
//!
//! Contracts the domain expects external systems to fulfil.

pub mod remote;

pub use remote::RemoteStoreClient;
