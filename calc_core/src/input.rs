//! # Number Parsing
//!
//! Turns text typed into a field into an `f64`. This is the only place a
//! calculator can fail.

use crate::calculations::Calculator;
use crate::errors::{CalcError, CalcResult};

/// Parse the text of one input field.
///
/// Surrounding whitespace is ignored. Empty text, text that is not a
/// number, and non-finite values (`NaN`, `inf`) are rejected with an
/// [`CalcError::InputError`] naming the calculator and field.
///
/// The accepted syntax is Rust's `f64` grammar. `NaN`, `Infinity` and
/// type suffixes such as `2.5d` or `1f` are all rejected.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::Calculator;
/// use calc_core::input::parse_number;
///
/// assert_eq!(parse_number(Calculator::Balance, "income", " 2500.5 ").unwrap(), 2500.5);
/// assert!(parse_number(Calculator::Balance, "income", "abc").is_err());
/// ```
pub fn parse_number(calculator: Calculator, field: &str, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::input_error(calculator, field, text)),
    }
}
