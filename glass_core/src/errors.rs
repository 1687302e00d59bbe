//! # Error Types
//!
//! Structured error types for glass_core. Errors serialize to JSON so a
//! front end (CLI, web form, LLM tool call) can report them without parsing
//! message strings.
//!
//! ## Example
//!
//! ```rust
//! use glass_core::errors::{CalcError, CalcResult};
//!
//! fn check_gamma(gamma: f64) -> CalcResult<()> {
//!     if gamma <= 0.0 {
//!         return Err(CalcError::configuration(
//!             "gamma_ma",
//!             gamma.to_string(),
//!             "Partial factor must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_gamma(1.6).is_ok());
//! assert!(check_gamma(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for glass_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (malformed flag, unparsable number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An option code does not exist in its option table
    #[error("Unknown option '{code}' for {table}")]
    OptionNotFound { table: String, code: String },

    /// A constant the evaluator depends on is broken (zero or negative
    /// partial factor, missing γ_M;v for prestressed glass, ...)
    #[error("Configuration error for '{parameter}': {value} - {reason}")]
    Configuration {
        parameter: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (report compilation, etc.)
    #[error("Internal error: {message}")]
    Internal { message: String },
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

    /// Create an OptionNotFound error
    pub fn option_not_found(table: impl Into<String>, code: impl Into<String>) -> Self {
        CalcError::OptionNotFound {
            table: table.into(),
            code: code.into(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(parameter: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Configuration {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error points at the caller's input rather than at
    /// the calculator's own configuration
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::MissingField { .. } | CalcError::OptionNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::OptionNotFound { .. } => "OPTION_NOT_FOUND",
            CalcError::Configuration { .. } => "CONFIGURATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}
