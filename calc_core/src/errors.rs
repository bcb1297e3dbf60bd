//! # Error Types
//!
//! Structured error types for calc_core. Calculators only ever fail while
//! turning user text into numbers, so [`CalcError::InputError`] is the one
//! variant a calculation can produce. The remaining variants come from
//! loading a settings file.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::Calculator;
//! use calc_core::errors::{CalcError, CalcResult, INPUT_ERROR_TITLE};
//!
//! fn income(text: &str) -> CalcResult<f64> {
//!     text.trim()
//!         .parse()
//!         .map_err(|_| CalcError::input_error(Calculator::Balance, "income", text))
//! }
//!
//! let err = income("abc").unwrap_err();
//! assert_eq!(INPUT_ERROR_TITLE, "Input Error");
//! assert_eq!(err.user_message(), "Please enter valid numeric values.");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::Calculator;

/// Title of the dialog (or stderr prefix) used to report an input error
pub const INPUT_ERROR_TITLE: &str = "Input Error";

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calc_core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required field could not be parsed as a number
    #[error("{calculator}: '{value}' is not a valid number for '{field}'")]
    InputError {
        calculator: Calculator,
        field: String,
        value: String,
    },

    /// Settings file could not be read
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Settings (or JSON output) could not be (de)serialized
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings parsed but describe an unusable configuration
    #[error("Invalid settings: {reason}")]
    InvalidSettings { reason: String },
}

impl CalcError {
    /// Create an InputError
    pub fn input_error(calculator: Calculator, field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::InputError {
            calculator,
            field: field.into(),
            value: value.into(),
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

    /// Create an InvalidSettings error
    pub fn invalid_settings(reason: impl Into<String>) -> Self {
        CalcError::InvalidSettings {
            reason: reason.into(),
        }
    }

    /// True if this error came from unparsable user input
    pub fn is_input_error(&self) -> bool {
        matches!(self, CalcError::InputError { .. })
    }

    /// Message shown to the user.
    ///
    /// Input errors use the guidance text of the calculator that rejected
    /// the input; everything else falls back to the `Display` text.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::InputError { calculator, .. } => calculator.input_error_message().to_string(),
            other => other.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InputError { .. } => "INPUT_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::input_error(Calculator::Electricity, "units", "abc");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InputError\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::input_error(Calculator::Balance, "income", "x").error_code(),
            "INPUT_ERROR"
        );
        assert_eq!(CalcError::invalid_settings("empty tariff").error_code(), "INVALID_SETTINGS");
    }

    #[test]
    fn test_user_message_per_calculator() {
        let msg = |c| CalcError::input_error(c, "f", "x").user_message();
        assert_eq!(msg(Calculator::Balance), "Please enter valid numeric values.");
        assert_eq!(msg(Calculator::UnitConversion), "Please enter a valid numeric input.");
        assert_eq!(msg(Calculator::Percentage), "Enter valid numbers for both fields.");
        assert_eq!(
            msg(Calculator::Electricity),
            "Provide numeric values for units, fixed charge, and tax %."
        );
    }

    #[test]
    fn test_display_names_field() {
        let err = CalcError::input_error(Calculator::Percentage, "base", "1,000");
        let text = err.to_string();
        assert!(text.contains("'1,000'"));
        assert!(text.contains("'base'"));
        assert!(err.is_input_error());
    }
}
