//! Value objects
//!
//! Small immutable types passed between the adapter and the backends.

mod bucket;
mod expiry;
mod ttl;

pub use bucket::Bucket;
pub use expiry::KeyExpiry;
pub use ttl::TtlPolicy;
