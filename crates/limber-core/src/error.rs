//! Core error types for limber-core.
//!
//! Storage errors distinguish reads from writes because the tick controller
//! treats them differently: a failed read aborts the tick before any
//! mutation, while a failed write abandons the tick's mutation entirely.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for limber-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Duration below the 1-second minimum after clamping.
    /// Unreachable through the public command surface; defensive only.
    #[error("Invalid duration: {seconds} seconds (minimum is 1)")]
    InvalidDuration { seconds: u64 },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database file
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A read against the store failed
    #[error("Storage read failed: {0}")]
    ReadFailed(#[source] rusqlite::Error),

    /// A write against the store failed
    #[error("Storage write failed: {0}")]
    WriteFailed(#[source] rusqlite::Error),

    /// A persisted value could not be decoded
    #[error("Corrupt value for key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
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

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
