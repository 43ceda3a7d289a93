//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Store defaults shared with other layers live in `redstash_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "redstash.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "redstash";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "REDSTASH";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Client backend used when none is configured
pub const DEFAULT_STORE_BACKEND: &str = "redis";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "REDSTASH_LOG";

/// File stem used for rotated log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "redstash";
