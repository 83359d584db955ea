// src/error.rs
use std::fmt;

/// Custom error types for the lsm-put library
#[derive(Debug, Clone)]
pub enum LsmError {
    /// Input table's leading column is not the recognized path-identifier column
    Schema { found: String, expected: String },

    /// Input table is not a valid rectangular price grid
    GridShape { reason: String },

    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },
}

impl fmt::Display for LsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LsmError::Schema { found, expected } => {
                write!(
                    f,
                    "Schema error: leading column '{}' is not the path-identifier column (expected '{}')",
                    found, expected
                )
            }
            LsmError::GridShape { reason } => {
                write!(f, "Invalid price grid: {}", reason)
            }
            LsmError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
        }
    }
}

impl std::error::Error for LsmError {}

/// Result type alias for lsm-put operations
pub type LsmResult<T> = Result<T, LsmError>;

/// Validation utilities
pub mod validation {
    use super::{LsmError, LsmResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> LsmResult<()> {
        if value <= 0.0 {
            Err(LsmError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> LsmResult<()> {
        if !value.is_finite() {
            Err(LsmError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
