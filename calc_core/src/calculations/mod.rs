//! # Calculators
//!
//! Each calculator module follows the same pattern:
//!
//! - `*Form` - Raw text as typed into the fields, `parse()` into an input
//! - `*Input` - Parsed numeric fields (JSON-serializable)
//! - `*Result` - Derived values plus a `summary()` display label
//! - `calculate(&input) -> *Result` - Pure calculation function
//!
//! Parsing is the only step that can fail. Calculations never do.
//!
//! ## Available Calculators
//!
//! - [`balance`] - Income vs expenses, savings percentage
//! - [`conversion`] - Meters to feet, kilograms to pounds, Celsius to Fahrenheit
//! - [`percentage`] - Increase, decrease, percent-of, what-percent
//! - [`electricity`] - Tiered electricity bill estimate

pub mod balance;
pub mod conversion;
pub mod electricity;
pub mod percentage;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CalcResult;

// Re-export commonly used types
pub use balance::{BalanceForm, BalanceInput, BalanceResult};
pub use conversion::{ConversionCategory, ConversionForm, ConversionInput, ConversionResult};
pub use electricity::{
    ElectricityForm, ElectricityInput, ElectricityResult, TariffSchedule, TariffTier, TierCharge,
};
pub use percentage::{PercentageForm, PercentageInput, PercentageOperation, PercentageResult};

/// The four calculators, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calculator {
    Balance,
    UnitConversion,
    Percentage,
    Electricity,
}

impl Calculator {
    pub const ALL: &'static [Calculator] = &[
        Calculator::Balance,
        Calculator::UnitConversion,
        Calculator::Percentage,
        Calculator::Electricity,
    ];

    /// Tab title
    pub fn display_name(&self) -> &'static str {
        match self {
            Calculator::Balance => "Income & Expense",
            Calculator::UnitConversion => "Unit Conversion",
            Calculator::Percentage => "Percentage Toolkit",
            Calculator::Electricity => "Electricity Bill",
        }
    }

    /// Guidance shown when one of this calculator's fields is not a number
    pub fn input_error_message(&self) -> &'static str {
        match self {
            Calculator::Balance => "Please enter valid numeric values.",
            Calculator::UnitConversion => "Please enter a valid numeric input.",
            Calculator::Percentage => "Enter valid numbers for both fields.",
            Calculator::Electricity => "Provide numeric values for units, fixed charge, and tax %.",
        }
    }
}

impl std::fmt::Display for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A parsed request for any calculator.
///
/// ## JSON Example
///
/// ```json
/// { "calculator": "electricity", "units": 120.0, "fixed_charge": 75.0, "tax_percent": 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationRequest {
    Balance(BalanceInput),
    UnitConversion(ConversionInput),
    Percentage(PercentageInput),
    Electricity(ElectricityInput),
}

impl CalculationRequest {
    pub fn calculator(&self) -> Calculator {
        match self {
            CalculationRequest::Balance(_) => Calculator::Balance,
            CalculationRequest::UnitConversion(_) => Calculator::UnitConversion,
            CalculationRequest::Percentage(_) => Calculator::Percentage,
            CalculationRequest::Electricity(_) => Calculator::Electricity,
        }
    }
}

/// Result of any calculator, tagged like [`CalculationRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationResult {
    Balance(BalanceResult),
    UnitConversion(ConversionResult),
    Percentage(PercentageResult),
    Electricity(ElectricityResult),
}

impl CalculationResult {
    pub fn calculator(&self) -> Calculator {
        match self {
            CalculationResult::Balance(_) => Calculator::Balance,
            CalculationResult::UnitConversion(_) => Calculator::UnitConversion,
            CalculationResult::Percentage(_) => Calculator::Percentage,
            CalculationResult::Electricity(_) => Calculator::Electricity,
        }
    }

    /// Display label for the result area
    pub fn summary(&self) -> String {
        match self {
            CalculationResult::Balance(r) => r.summary(),
            CalculationResult::UnitConversion(r) => r.summary(),
            CalculationResult::Percentage(r) => r.summary(),
            CalculationResult::Electricity(r) => r.summary(),
        }
    }
}

/// Raw text for any calculator, as collected by a front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationForm {
    Balance(BalanceForm),
    UnitConversion(ConversionForm),
    Percentage(PercentageForm),
    Electricity(ElectricityForm),
}

impl CalculationForm {
    /// Parse every field into a [`CalculationRequest`].
    pub fn parse(&self) -> CalcResult<CalculationRequest> {
        Ok(match self {
            CalculationForm::Balance(form) => CalculationRequest::Balance(form.parse()?),
            CalculationForm::UnitConversion(form) => CalculationRequest::UnitConversion(form.parse()?),
            CalculationForm::Percentage(form) => CalculationRequest::Percentage(form.parse()?),
            CalculationForm::Electricity(form) => CalculationRequest::Electricity(form.parse()?),
        })
    }
}

/// Run a parsed request.
///
/// The tariff is only consulted by the electricity calculator.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::{calculate, BalanceInput, CalculationRequest, TariffSchedule};
///
/// let request = CalculationRequest::Balance(BalanceInput { income: 5000.0, expenses: 3750.0 });
/// let result = calculate(&request, &TariffSchedule::default());
/// assert_eq!(result.summary(), "Balance: 1,250.00 | Savings: 25%");
/// ```
pub fn calculate(request: &CalculationRequest, tariff: &TariffSchedule) -> CalculationResult {
    debug!(calculator = ?request.calculator(), "running calculation");
    match request {
        CalculationRequest::Balance(input) => CalculationResult::Balance(balance::calculate(input)),
        CalculationRequest::UnitConversion(input) => {
            CalculationResult::UnitConversion(conversion::calculate(input))
        }
        CalculationRequest::Percentage(input) => CalculationResult::Percentage(percentage::calculate(input)),
        CalculationRequest::Electricity(input) => {
            CalculationResult::Electricity(electricity::calculate_with_tariff(input, tariff))
        }
    }
}

/// Parse a form and run it in one step.
pub fn evaluate(form: &CalculationForm, tariff: &TariffSchedule) -> CalcResult<CalculationResult> {
    let request = form.parse()?;
    Ok(calculate(&request, tariff))
}
