//! Core error types for liferpg-core.
//!
//! A small thiserror hierarchy. Note that referencing a quest id that does
//! not exist in a save record is NOT an error anywhere in this crate -- the
//! engine treats it as a silent no-op, so only genuinely invalid input and
//! storage failures surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for liferpg-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database file
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A stored profile blob could not be decoded
    #[error("Corrupt save record for profile '{profile}': {message}")]
    CorruptRecord { profile: String, message: String },
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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors for engine inputs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Quest text must be non-empty
    #[error("Quest text must not be empty")]
    EmptyQuestText,

    /// Attribute name not in the closed attribute set
    #[error("Unknown attribute: '{0}'")]
    UnknownAttribute(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
