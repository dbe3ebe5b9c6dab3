//! # Error Types
//!
//! Validation errors for rapido-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  rapido-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  rapido-db errors (separate crate)                                  │
//! │  └── DbError          - Storage failures + domain-state rejections  │
//! │                         (wraps ValidationError via #[from])         │
//! │                                                                     │
//! │  Flow: ValidationError → DbError → caller                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String
//! 4. A validation failure aborts the operation with NO partial write

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet business rules. Validation
/// runs before any persistence, and the FIRST violated rule is
/// reported (matching the form-level behavior users already know).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. unparseable amount, malformed month key).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::required("categoria");
        assert_eq!(err.to_string(), "categoria is required");

        let err = ValidationError::TooLong {
            field: "description".to_string(),
            max: 500,
        };
        assert_eq!(err.to_string(), "description must be at most 500 characters");

        let err = ValidationError::MustBePositive {
            field: "value".to_string(),
        };
        assert_eq!(err.to_string(), "value must be positive");
    }
}
