//! Error handling module for drivetrain
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the library should use these types for consistency.

#![allow(dead_code)] // Error variants and helpers are available for future use

use thiserror::Error;

/// Main error type for drivetrain operations
#[derive(Error, Debug)]
pub enum DrivetrainError {
    /// IO errors (writing to the output sink)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine selection errors (unknown engine kind names)
    #[error("Unknown engine kind: {0}")]
    UnknownEngine(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for drivetrain operations
pub type Result<T> = std::result::Result<T, DrivetrainError>;

// Convenient error constructors
impl DrivetrainError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown-engine error
    pub fn unknown_engine(name: impl Into<String>) -> Self {
        Self::UnknownEngine(name.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
