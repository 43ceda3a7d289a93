use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque label attached to a store instance
///
/// A bucket is carried for the caller's convenience (logging, lookup of the
/// owning subsystem). It does not scope keys: two stores with different
/// buckets on the same remote server share one key space, and a full clear
/// removes the entries of every bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bucket(String);

impl Bucket {
    /// Create a bucket label
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// The bucket label
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Bucket {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Bucket {
    fn from(name: String) -> Self {
        Self(name)
    }
}
