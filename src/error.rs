//! Custom error types for Allotment
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The analysis engine itself never fails;
//! these errors come from loading snapshots, validation, configuration and
//! export.

use thiserror::Error;

/// The main error type for Allotment operations
#[derive(Error, Debug)]
pub enum AllotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for snapshot data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Snapshot loading errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl AllotError {
    /// Create a "not found" error for budget snapshots
    pub fn snapshot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget snapshot",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for AllotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AllotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for AllotError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for Allotment operations
pub type AllotResult<T> = Result<T, AllotError>;
