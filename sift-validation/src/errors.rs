// Validation errors

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned by [`MatchRule`](crate::MatchRule) when a value is in an invalid format.
pub static ERR_MATCH_INVALID: Lazy<ValidationError> =
    Lazy::new(|| ValidationError::new("validation_match_invalid", "must be in a valid format"));

/// A failed validation: a stable code plus a human readable message.
///
/// The value is immutable. [`ValidationError::with_message`] produces a copy
/// carrying a different message and the same code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    code: String,
    message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Copy of this error with the message replaced
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            code: self.code.clone(),
            message: message.into(),
        }
    }

    /// Attach this error to a field name
    pub fn for_field(self, field: impl Into<String>) -> FieldError {
        FieldError {
            field: field.into(),
            error: self,
        }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code,
            "message": self.message,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A validation error reported against a named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name that failed validation
    pub field: String,

    /// The error produced by the failing rule
    pub error: ValidationError,
}

impl FieldError {
    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "field": self.field,
            "code": self.error.code(),
            "message": self.error.message(),
        })
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Errors raised while building a rule, before any value is validated.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid rule configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML configuration error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result of building a rule. Not re-exported at the crate root.
pub type Result<T, E = BuildError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_match_error() {
        assert_eq!(ERR_MATCH_INVALID.code(), "validation_match_invalid");
        assert_eq!(ERR_MATCH_INVALID.message(), "must be in a valid format");
        assert_eq!(ERR_MATCH_INVALID.to_string(), "must be in a valid format");
    }

    #[test]
    fn test_with_message_keeps_code() {
        let original = ValidationError::new("code", "abc");
        let renamed = original.with_message("xyz");

        assert_eq!(renamed.code(), "code");
        assert_eq!(renamed.message(), "xyz");
        // The original is untouched
        assert_eq!(original.message(), "abc");
    }

    #[test]
    fn test_field_error_display() {
        let error = ValidationError::new("code", "must be in a valid format").for_field("slug");

        assert_eq!(error.to_string(), "slug: must be in a valid format");
        assert_eq!(error.to_json()["field"], "slug");
        assert_eq!(error.to_json()["code"], "code");
    }

    #[test]
    fn test_error_json() {
        let json = ValidationError::new("c", "m").to_json();
        assert_eq!(json, serde_json::json!({"code": "c", "message": "m"}));
    }

    #[test]
    fn test_invalid_pattern_error() {
        let err: BuildError = regex::Regex::new("[a-").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid pattern"));
    }
}
