//! Core error types for timecat-core.
//!
//! Classification itself never fails: a meeting with no keyword hits is
//! `Uncategorized` and scoring ties resolve by priority. Errors only come
//! from malformed input records, configuration and the file-backed source.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for timecat-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A meeting record reached the core with a missing or invalid field
    #[error("Invalid meeting record{}: field '{field}' {message}", index_suffix(.index))]
    InvalidRecord {
        /// Position of the record in its source, when known
        index: Option<usize>,
        field: String,
        message: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A keyword could not be compiled into a pattern
    #[error("Invalid keyword pattern '{keyword}': {source}")]
    Pattern {
        keyword: String,
        #[source]
        source: regex::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}

impl CoreError {
    /// Shorthand for an `InvalidRecord` with no known position.
    pub fn invalid_record(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::InvalidRecord {
            index: None,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Attach a source position to an `InvalidRecord`; other variants pass through.
    pub fn at_index(self, idx: usize) -> Self {
        match self {
            CoreError::InvalidRecord { field, message, .. } => CoreError::InvalidRecord {
                index: Some(idx),
                field,
                message,
            },
            other => other,
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
