use serde::{Deserialize, Serialize};

/// Expiry of a key as reported by the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyExpiry {
    /// The key does not exist
    Missing,
    /// The key exists and never expires
    Persistent,
    /// The key expires in the given number of seconds
    Expires(u64),
}

impl KeyExpiry {
    /// Interpret a Redis `TTL` reply (`-2` missing, `-1` persistent)
    pub fn from_ttl_reply(reply: i64) -> Self {
        match u64::try_from(reply) {
            Ok(secs) => Self::Expires(secs),
            Err(_) if reply == -1 => Self::Persistent,
            Err(_) => Self::Missing,
        }
    }

    /// Remaining seconds, if the key expires
    pub fn remaining_secs(self) -> Option<u64> {
        match self {
            Self::Expires(secs) => Some(secs),
            Self::Missing | Self::Persistent => None,
        }
    }
}
