//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ruletap
///
/// The audit path itself never produces these; they surface only at the
/// edges (configuration, rule dataset loading, logging setup, sinks).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// YAML parsing error (rule datasets)
    #[error("YAML parsing error: {source}")]
    Yaml {
        /// The underlying YAML error
        #[from]
        source: serde_yaml::Error,
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

    /// A rule definition breaks the registry invariant
    #[error("Invalid rule '{rule_id}': {message}")]
    InvalidRule {
        /// Offending rule id (may be empty)
        rule_id: String,
        /// What is wrong with it
        message: String,
    },

    /// Two definitions share the same id
    #[error("Duplicate rule id: {rule_id}")]
    DuplicateRule {
        /// The repeated id
        rule_id: String,
    },

    /// External telemetry sink failure
    #[error("Telemetry sink error: {message}")]
    Sink {
        /// Description of the sink failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a configuration error without a source
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid-rule error
    pub fn invalid_rule<I: Into<String>, S: Into<String>>(rule_id: I, message: S) -> Self {
        Self::InvalidRule {
            rule_id: rule_id.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink<S: Into<String>>(message: S) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
