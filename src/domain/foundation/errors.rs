//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction and template validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Threshold '{field}' must be positive, got {actual}")]
    NonPositiveThreshold { field: String, actual: f64 },

    #[error("Field '{field}' cannot be negative, got {actual}")]
    NegativeValue { field: String, actual: f64 },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-positive threshold validation error.
    pub fn non_positive_threshold(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NonPositiveThreshold {
            field: field.into(),
            actual,
        }
    }

    /// Creates a negative value validation error.
    pub fn negative_value(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NegativeValue {
            field: field.into(),
            actual,
        }
    }
}
