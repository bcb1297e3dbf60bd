//! # Percentage Toolkit
//!
//! Four operations over two shared slots. The first slot is the base (or
//! the part), the second is the percent (or the whole).
//!
//! | Operation   | Slots         | Value                              |
//! |-------------|---------------|------------------------------------|
//! | Increase    | base, percent | `base + base * percent / 100`      |
//! | Decrease    | base, percent | `base - base * percent / 100`      |
//! | PercentOf   | base, percent | `base * percent / 100`             |
//! | WhatPercent | part, whole   | `part / whole * 100`, `0` if whole is `0` |
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::percentage::{calculate, PercentageInput, PercentageOperation};
//!
//! let result = calculate(&PercentageInput {
//!     operation: PercentageOperation::Increase,
//!     base: 200.0,
//!     secondary: 15.0,
//! });
//! assert_eq!(result.value, 230.0);
//! assert_eq!(result.delta, Some(30.0));
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::errors::CalcResult;
use crate::format::{format_money, format_number};
use crate::input::parse_number;

/// Which percentage operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageOperation {
    #[default]
    Increase,
    Decrease,
    PercentOf,
    WhatPercent,
}

impl PercentageOperation {
    pub const ALL: &'static [PercentageOperation] = &[
        PercentageOperation::Increase,
        PercentageOperation::Decrease,
        PercentageOperation::PercentOf,
        PercentageOperation::WhatPercent,
    ];

    /// Button label
    pub fn display_name(&self) -> &'static str {
        match self {
            PercentageOperation::Increase => "Increase",
            PercentageOperation::Decrease => "Decrease",
            PercentageOperation::PercentOf => "% of Total",
            PercentageOperation::WhatPercent => "What %?",
        }
    }
}

impl std::fmt::Display for PercentageOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw text from the two slots plus the chosen operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentageForm {
    pub operation: PercentageOperation,
    /// "Base / Part" field
    pub base: String,
    /// "Percent / Whole" field
    pub secondary: String,
}

impl PercentageForm {
    pub fn new(operation: PercentageOperation, base: impl Into<String>, secondary: impl Into<String>) -> Self {
        PercentageForm {
            operation,
            base: base.into(),
            secondary: secondary.into(),
        }
    }

    /// Parse both slots.
    ///
    /// `PercentOf` reads the percent slot before the base slot; every other
    /// operation reads the base first. Field names follow the operation
    /// (`part`/`whole` for `WhatPercent`).
    pub fn parse(&self) -> CalcResult<PercentageInput> {
        let calc = Calculator::Percentage;
        let (base, secondary) = match self.operation {
            PercentageOperation::Increase | PercentageOperation::Decrease => (
                parse_number(calc, "base", &self.base)?,
                parse_number(calc, "percent", &self.secondary)?,
            ),
            PercentageOperation::PercentOf => {
                let percent = parse_number(calc, "percent", &self.secondary)?;
                (parse_number(calc, "base", &self.base)?, percent)
            }
            PercentageOperation::WhatPercent => (
                parse_number(calc, "part", &self.base)?,
                parse_number(calc, "whole", &self.secondary)?,
            ),
        };

        Ok(PercentageInput {
            operation: self.operation,
            base,
            secondary,
        })
    }
}

/// Input parameters for a percentage operation.
///
/// ## JSON Example
///
/// ```json
/// { "operation": "what_percent", "base": 50.0, "secondary": 200.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageInput {
    pub operation: PercentageOperation,

    /// Base amount (or the part, for `WhatPercent`)
    pub base: f64,

    /// Percent (or the whole, for `WhatPercent`)
    pub secondary: f64,
}

/// Results from a percentage operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageResult {
    pub operation: PercentageOperation,
    pub base: f64,
    pub secondary: f64,

    /// Outcome for increase/decrease, the share for percent-of, the
    /// percentage for what-percent
    pub value: f64,

    /// `base * percent / 100`, only for increase and decrease
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

impl PercentageResult {
    /// Display label for the result area
    pub fn summary(&self) -> String {
        match self.operation {
            PercentageOperation::Increase | PercentageOperation::Decrease => format!(
                "{} result: {} (Δ={})",
                self.operation.display_name(),
                format_money(self.value),
                format_money(self.delta.unwrap_or_default())
            ),
            PercentageOperation::PercentOf => format!(
                "{}% of {} = {}",
                format_number(self.secondary),
                format_money(self.base),
                format_money(self.value)
            ),
            PercentageOperation::WhatPercent => format!(
                "{} is {}% of {}",
                format_money(self.base),
                format_number(self.value),
                format_money(self.secondary)
            ),
        }
    }
}

/// `percent` percent of `base`
pub fn percent_of(base: f64, percent: f64) -> f64 {
    base * percent / 100.0
}

/// What percent `part` is of `whole`; zero when `whole` is zero
pub fn what_percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Run the selected operation.
pub fn calculate(input: &PercentageInput) -> PercentageResult {
    let (value, delta) = match input.operation {
        PercentageOperation::Increase => {
            let delta = percent_of(input.base, input.secondary);
            (input.base + delta, Some(delta))
        }
        PercentageOperation::Decrease => {
            let delta = percent_of(input.base, input.secondary);
            (input.base - delta, Some(delta))
        }
        PercentageOperation::PercentOf => (percent_of(input.base, input.secondary), None),
        PercentageOperation::WhatPercent => (what_percent(input.base, input.secondary), None),
    };

    PercentageResult {
        operation: input.operation,
        base: input.base,
        secondary: input.secondary,
        value,
        delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn run(operation: PercentageOperation, base: f64, secondary: f64) -> PercentageResult {
        calculate(&PercentageInput { operation, base, secondary })
    }

    #[test]
    fn test_increase() {
        let result = run(PercentageOperation::Increase, 1200.0, 10.0);
        assert_eq!(result.value, 1320.0);
        assert_eq!(result.delta, Some(120.0));
        assert_eq!(result.summary(), "Increase result: 1,320.00 (Δ=120.00)");
    }

    #[test]
    fn test_decrease() {
        let result = run(PercentageOperation::Decrease, 80.0, 25.0);
        assert_eq!(result.value, 60.0);
        assert_eq!(result.delta, Some(20.0));
        assert_eq!(result.summary(), "Decrease result: 60.00 (Δ=20.00)");
    }

    #[test]
    fn test_percent_of() {
        let result = run(PercentageOperation::PercentOf, 2500.0, 12.5);
        assert_eq!(result.value, 312.5);
        assert_eq!(result.delta, None);
        assert_eq!(result.summary(), "12.5% of 2,500.00 = 312.50");
    }

    #[test]
    fn test_what_percent() {
        assert_eq!(what_percent(50.0, 200.0), 25.0);
        assert_eq!(what_percent(7.0, 0.0), 0.0);
        let result = run(PercentageOperation::WhatPercent, 1.0, 3.0);
        assert_eq!(result.summary(), "1.00 is 33.333% of 3.00");
    }

    #[test]
    fn test_what_percent_of_zero_whole() {
        let result = run(PercentageOperation::WhatPercent, 50.0, 0.0);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.summary(), "50.00 is 0% of 0.00");
    }

    #[test]
    fn test_percent_of_parses_percent_first() {
        let form = PercentageForm::new(PercentageOperation::PercentOf, "x", "y");
        match form.parse().unwrap_err() {
            CalcError::InputError { field, .. } => assert_eq!(field, "percent"),
            other => panic!("unexpected error: {:?}", other),
        }

        let form = PercentageForm::new(PercentageOperation::Increase, "x", "y");
        match form.parse().unwrap_err() {
            CalcError::InputError { field, .. } => assert_eq!(field, "base"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_what_percent_field_names() {
        let form = PercentageForm::new(PercentageOperation::WhatPercent, "10", "");
        match form.parse().unwrap_err() {
            CalcError::InputError { calculator, field, .. } => {
                assert_eq!(calculator, Calculator::Percentage);
                assert_eq!(field, "whole");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_delta_omitted_from_json() {
        let json = serde_json::to_string(&run(PercentageOperation::PercentOf, 10.0, 10.0)).unwrap();
        assert!(!json.contains("delta"));
        let json = serde_json::to_string(&run(PercentageOperation::Increase, 10.0, 10.0)).unwrap();
        assert!(json.contains("\"delta\":1.0"));
    }
}
