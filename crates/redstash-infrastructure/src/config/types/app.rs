use serde::{Deserialize, Serialize};

use super::{LoggingConfig, StoreConfig};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Store connection and behaviour
    pub store: StoreConfig,

    /// Logging
    pub logging: LoggingConfig,
}
