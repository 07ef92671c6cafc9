//! # Error Types
//!
//! Structured error types for carton_core. These errors carry enough
//! context to be handled programmatically by frontends, not just
//! displayed as strings.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::errors::{CartonError, CartonResult};
//!
//! fn validate_length(length: f64) -> CartonResult<()> {
//!     if length <= 0.0 {
//!         return Err(CartonError::InvalidInput {
//!             field: "length".to_string(),
//!             value: length.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for carton_core operations
pub type CartonResult<T> = Result<T, CartonError>;

/// Structured error type for box calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by frontends and exporters.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CartonError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Flute grade not found in the material table
    #[error("Unknown flute grade: {grade}")]
    UnknownGrade { grade: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CartonError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CartonError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownGrade error
    pub fn unknown_grade(grade: impl Into<String>) -> Self {
        CartonError::UnknownGrade {
            grade: grade.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CartonError::InvalidInput { .. } => "INVALID_INPUT",
            CartonError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            CartonError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
