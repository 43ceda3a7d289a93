use serde::{Deserialize, Serialize};

use crate::constants::LEGACY_FIXED_TTL_SECS;

/// How a caller-supplied TTL is turned into the expiry sent to the store
///
/// A requested TTL of zero always means "no expiry", under every policy.
///
/// Serialized with a `mode` tag:
///
/// ```toml
/// [store.ttl_policy]
/// mode = "fixed"
/// seconds = 60
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TtlPolicy {
    /// Expire after exactly the requested number of seconds
    #[default]
    Requested,
    /// Expire after a fixed duration whenever any TTL is requested
    ///
    /// The requested value only decides whether the entry expires at all.
    Fixed {
        /// Expiry sent for every TTL write
        seconds: u64,
    },
}

impl TtlPolicy {
    /// Policy compatible with stores that always expire TTL writes after 60 seconds
    pub fn legacy() -> Self {
        Self::Fixed {
            seconds: LEGACY_FIXED_TTL_SECS,
        }
    }

    /// Expiry to transmit for a requested TTL, `None` for a plain write
    pub fn effective_secs(self, requested: u64) -> Option<u64> {
        if requested == 0 {
            return None;
        }
        match self {
            Self::Requested => Some(requested),
            Self::Fixed { seconds } => Some(seconds),
        }
    }
}
