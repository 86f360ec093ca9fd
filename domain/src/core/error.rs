//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised when an enumerated configuration field holds a value outside
/// its closed set. The message names the field, the bad value and the
/// allowed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "'{value}' in the configuration for profile is an invalid value, it could be 'development' or 'production'"
    )]
    InvalidProfile { value: String },

    #[error(
        "'{value}' in the configuration for encoding is an invalid value, it could be 'json' or 'console'"
    )]
    InvalidEncoding { value: String },
}

impl DomainError {
    /// Name of the configuration field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidProfile { .. } => "profile",
            DomainError::InvalidEncoding { .. } => "encoding",
        }
    }

    /// The offending value as written in the configuration
    pub fn value(&self) -> &str {
        match self {
            DomainError::InvalidProfile { value } | DomainError::InvalidEncoding { value } => {
                value
            }
        }
    }
}
