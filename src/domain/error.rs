//! Error types for service discovery domain validation.

use thiserror::Error;

/// Errors returned while constructing discovery domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceDomainError {
    /// The source name is empty after trimming.
    #[error("source name must not be empty")]
    EmptySourceName,

    /// The source name contains characters outside `[a-z0-9_]`.
    #[error(
        "source name '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidSourceName(String),

    /// The source name exceeds the 100-character limit.
    #[error("source name exceeds 100 character limit: {0}")]
    SourceNameTooLong(String),
}
