//! Error types for the registration service
//!
//! - `DomainError`: failures raised by collaborators behind the port traits
//! - `ConfigError`: problems loading runtime configuration
//!
//! Validation and eligibility rejections are not errors. They are reported
//! as `RejectionReason` values by the service.

use thiserror::Error;

/// Domain layer errors - raised by ports and propagated by the service
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid client directory: {0}")]
    InvalidDirectory(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Storage(format!("malformed JSON: {}", e))
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
