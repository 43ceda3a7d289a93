//! Error handling types

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Setup step that failed while initializing a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStage {
    /// Establishing the connection to the remote store
    Connect,
    /// Authenticating with the configured password
    Authenticate,
    /// Selecting the configured database index
    SelectDatabase,
    /// Flushing the store because `clear_cache_on_connect` was set
    InitialFlush,
}

impl fmt::Display for InitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Connect => "connect",
            Self::Authenticate => "authenticate",
            Self::SelectDatabase => "select database",
            Self::InitialFlush => "initial flush",
        };
        f.write_str(stage)
    }
}

/// Main error type for redstash
#[derive(Error, Debug)]
pub enum Error {
    /// Store setup failed; the store must not be used
    ///
    /// Applications are expected to treat this as fatal.
    #[error("Initialization failed during {stage}: {source}")]
    Initialization {
        /// The setup step that failed
        stage: InitStage,
        /// The underlying failure
        #[source]
        source: Box<Error>,
    },

    /// A value could not be serialized before writing
    #[error("Failed to encode value: {source}")]
    Encode {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A stored payload could not be deserialized
    #[error("Failed to decode value stored at '{key}': {source}")]
    Decode {
        /// Key whose payload was malformed
        key: String,
        /// The underlying JSON or UTF-8 error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failure reported by the remote store or its transport
    #[error("Remote store error: {message}")]
    Remote {
        /// Description of the remote error
        message: String,
        /// Original client error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an encode error
    pub fn encode(source: serde_json::Error) -> Self {
        Self::Encode { source }
    }

    /// Create a decode error for the payload stored at `key`
    pub fn decode<S, E>(key: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Wrap a failure as an initialization error for the given stage
    pub fn initialization(stage: InitStage, source: Error) -> Self {
        Self::Initialization {
            stage,
            source: Box::new(source),
        }
    }
}

// Remote error creation methods
impl Error {
    /// Create a remote store error
    pub fn remote<S: Into<String>>(message: S) -> Self {
        Self::Remote {
            message: message.into(),
            source: None,
        }
    }

    /// Create a remote store error with source
    pub fn remote_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Remote {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// Whether the error means the store could not be set up at all
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Initialization { .. })
    }

    /// Whether the error came from the remote store or its transport
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// The failed setup step, if this is an initialization error
    pub fn init_stage(&self) -> Option<InitStage> {
        match self {
            Self::Initialization { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
