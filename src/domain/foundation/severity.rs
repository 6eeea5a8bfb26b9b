//! Severity value object (0-5 waste score scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A waste severity score on the 0.0 to 5.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(f64);

impl Severity {
    /// Zero severity.
    pub const ZERO: Self = Self(0.0);

    /// Maximum severity.
    pub const MAX: Self = Self(5.0);

    /// Creates a new Severity, clamping to valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 5.0))
    }

    /// Creates a Severity, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=5.0).contains(&value) {
            return Err(ValidationError::out_of_range("severity", 0.0, 5.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the score as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the risk priority number as a percentage (0-100).
    pub fn rpn_pct(&self) -> f64 {
        (self.0 / 5.0 * 100.0).min(100.0)
    }

    /// Returns true when the score is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
