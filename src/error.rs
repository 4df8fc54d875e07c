//! Custom error types for Outlay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Rejected amounts are not errors: they are
//! reported through the numpad validator's invalid-input hook instead.

use thiserror::Error;

/// The main error type for Outlay operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage collaborator errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl OutlayError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
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

impl From<std::io::Error> for OutlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OutlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Outlay operations
pub type OutlayResult<T> = Result<T, OutlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutlayError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = OutlayError::category_not_found("Groceries");
        assert_eq!(err.to_string(), "Category not found: Groceries");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_expense_not_found_error() {
        let err = OutlayError::expense_not_found("exp-1234abcd");
        assert_eq!(err.to_string(), "Expense not found: exp-1234abcd");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let outlay_err: OutlayError = io_err.into();
        assert!(matches!(outlay_err, OutlayError::Io(_)));
    }
}
