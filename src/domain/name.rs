//! Validated source name type.

use super::SourceDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a source name.
const MAX_NAME_LENGTH: usize = 100;

/// Validated, lowercase alphanumeric-plus-underscores source label.
///
/// Source names are human-readable labels for registered discovery sources
/// (e.g. `builtin`, `user_extensions`). They are descriptive only; the
/// registry keys uniqueness off [`SourceId`](super::SourceId), never the
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceName(String);

impl SourceName {
    /// Creates a validated source name.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SourceDomainError::EmptySourceName`] when the value is
    /// empty after trimming, [`SourceDomainError::InvalidSourceName`] when
    /// it contains characters outside `[a-z0-9_]`, or
    /// [`SourceDomainError::SourceNameTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, SourceDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(SourceDomainError::EmptySourceName);
        }

        if normalized.len() > MAX_NAME_LENGTH {
            return Err(SourceDomainError::SourceNameTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !is_valid {
            return Err(SourceDomainError::InvalidSourceName(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the source name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SourceName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
