//! # Error Types
//!
//! Workspace-level error type. Business-rule violations are not modelled
//! here; they live in `osis-proposition` as a taxonomy of status-coded
//! exceptions. `OsisError` covers the technical failures around them.

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level technical error for OSIS Admission.
#[derive(Error, Debug)]
pub enum OsisError {
    /// Runtime configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A timestamp could not be built or parsed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
