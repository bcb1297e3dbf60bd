//! # calc_core - Multicalc Calculation Engine
//!
//! `calc_core` holds everything the Multicalc front ends compute: four
//! independent calculators, the number parser that feeds them, and the
//! formatters that render their results.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Text In, Text Out**: `*Form` parses field text, `summary()` renders results
//! - **One Failure Mode**: Only parsing fails, always with [`CalcError::InputError`]
//! - **JSON-Friendly**: Inputs and results implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{evaluate, CalculationForm, ElectricityForm, TariffSchedule};
//!
//! let form = CalculationForm::Electricity(ElectricityForm::new("300", "75", "5"));
//! let result = evaluate(&form, &TariffSchedule::default()).unwrap();
//! assert_eq!(result.summary(), "Energy: 650.00 | Tax: 36.25 | Total: 761.25");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Balance, conversion, percentage and electricity calculators
//! - [`input`] - Field text to number parsing
//! - [`format`] - Money and plain-number display formatting
//! - [`settings`] - Optional TOML settings (field defaults, tariff)
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod format;
pub mod input;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, evaluate, CalculationForm, CalculationRequest, CalculationResult, Calculator};
pub use errors::{CalcError, CalcResult, INPUT_ERROR_TITLE};
pub use format::{format_money, format_number};
pub use settings::Settings;
