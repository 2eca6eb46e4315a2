//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_coefficient(a: f64) -> CalcResult<()> {
//!     if !a.is_finite() {
//!         return Err(CalcError::InvalidInput {
//!             field: "a".to_string(),
//!             value: a.to_string(),
//!             reason: "Coefficient must be a finite number".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical linear example shown alongside parse errors
pub const LINEAR_EXAMPLE: &str = "2x + 5 = 15";

/// Canonical quadratic example shown alongside parse errors
pub const QUADRATIC_EXAMPLE: &str = "x^2 + 5x + 6 = 0";

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
/// Degenerate outcomes such as "no solutions" are results, not errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Equation text could not be interpreted
    #[error("Could not parse equation '{text}': {reason}. Try something like {examples:?}")]
    EquationParse {
        text: String,
        reason: String,
        examples: Vec<String>,
    },

    /// Calculation could not produce a finite result
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// No calculation registered under this name
    #[error("Unknown calculation: {name}")]
    UnknownCalculation { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an EquationParse error carrying the canonical examples
    pub fn equation_parse(text: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::EquationParse {
            text: text.into(),
            reason: reason.into(),
            examples: vec![LINEAR_EXAMPLE.to_string(), QUADRATIC_EXAMPLE.to_string()],
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCalculation error
    pub fn unknown_calculation(name: impl Into<String>) -> Self {
        CalcError::UnknownCalculation { name: name.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    ///
    /// Every failure here is a defect in the input, so retrying the same
    /// request always fails the same way.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::EquationParse { .. } => "EQUATION_PARSE",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::UnknownCalculation { .. } => "UNKNOWN_CALCULATION",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
