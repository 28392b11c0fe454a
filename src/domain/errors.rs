//! Domain error types
//!
//! This module defines the error hierarchy for Trellis. All errors are
//! domain-specific and don't expose driver types from `mysql_async` or
//! `mongodb`.

use thiserror::Error;

/// Main Trellis error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum TrellisError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// MySQL source errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// MongoDB target errors
    #[error("Target error: {0}")]
    Target(#[from] TargetError),

    /// Migration process errors
    #[error("Migration error: {0}")]
    Migration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// MySQL source errors
///
/// Errors that occur when reading from the relational source. These errors
/// don't expose `mysql_async` types.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to connect to the MySQL server
    #[error("Failed to connect to MySQL: {0}")]
    ConnectionFailed(String),

    /// Invalid connection URL
    #[error("Invalid MySQL connection URL: {0}")]
    InvalidUrl(String),

    /// A SELECT against a source table failed
    #[error("Query against table '{table}' failed: {message}")]
    QueryFailed { table: String, message: String },

    /// Failed to disconnect cleanly
    #[error("Failed to close MySQL connection: {0}")]
    DisconnectFailed(String),
}

/// MongoDB target errors
///
/// Errors that occur when writing to the document target. These errors
/// don't expose `mongodb` driver types.
#[derive(Debug, Error)]
pub enum TargetError {
    /// Failed to connect to the MongoDB server
    #[error("Failed to connect to MongoDB: {0}")]
    ConnectionFailed(String),

    /// Connection health check failed
    #[error("MongoDB ping failed: {0}")]
    PingFailed(String),

    /// A single-document insert failed
    #[error("Insert into collection '{collection}' failed: {message}")]
    InsertFailed { collection: String, message: String },

    /// A document could not be serialized to BSON
    #[error("Failed to serialize document for collection '{collection}': {message}")]
    SerializationFailed { collection: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for TrellisError {
    fn from(err: std::io::Error) -> Self {
        TrellisError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TrellisError {
    fn from(err: serde_json::Error) -> Self {
        TrellisError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TrellisError {
    fn from(err: toml::de::Error) -> Self {
        TrellisError::Configuration(format!("TOML parse error: {err}"))
    }
}
