//! # Balance Calculation
//!
//! Monthly income against monthly expenses.
//!
//! - `balance = income - expenses`
//! - `savings_percent = balance / income * 100`, or `0` when income is zero
//!
//! Neither field is sign-checked; a negative balance is a valid answer.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::balance::{calculate, BalanceInput};
//!
//! let result = calculate(&BalanceInput { income: 4000.0, expenses: 3000.0 });
//! assert_eq!(result.balance, 1000.0);
//! assert_eq!(result.savings_percent, 25.0);
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::errors::CalcResult;
use crate::format::{format_money, format_number};
use crate::input::parse_number;

/// Raw text from the income and expense fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceForm {
    pub income: String,
    pub expenses: String,
}

impl BalanceForm {
    pub fn new(income: impl Into<String>, expenses: impl Into<String>) -> Self {
        BalanceForm {
            income: income.into(),
            expenses: expenses.into(),
        }
    }

    /// Parse both fields, income first.
    pub fn parse(&self) -> CalcResult<BalanceInput> {
        Ok(BalanceInput {
            income: parse_number(Calculator::Balance, "income", &self.income)?,
            expenses: parse_number(Calculator::Balance, "expenses", &self.expenses)?,
        })
    }
}

/// Input parameters for the balance calculator.
///
/// ## JSON Example
///
/// ```json
/// { "income": 4000.0, "expenses": 3000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceInput {
    /// Monthly income
    pub income: f64,

    /// Monthly expenses
    pub expenses: f64,
}

/// Results from the balance calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    /// Income minus expenses
    pub balance: f64,

    /// Share of income left over, in percent
    pub savings_percent: f64,
}

impl BalanceResult {
    /// Display label, e.g. `Balance: 1,000.00 | Savings: 25%`
    pub fn summary(&self) -> String {
        format!(
            "Balance: {} | Savings: {}%",
            format_money(self.balance),
            format_number(self.savings_percent)
        )
    }
}

/// Calculate balance and savings percentage.
pub fn calculate(input: &BalanceInput) -> BalanceResult {
    let balance = input.income - input.expenses;
    let savings_percent = if input.income == 0.0 {
        0.0
    } else {
        balance / input.income * 100.0
    };

    BalanceResult {
        balance,
        savings_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_balance_and_savings() {
        let result = calculate(&BalanceInput { income: 5000.0, expenses: 3250.0 });
        assert!((result.balance - 1750.0).abs() < 1e-9);
        assert!((result.savings_percent - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_income_has_zero_savings() {
        let result = calculate(&BalanceInput { income: 0.0, expenses: 1200.0 });
        assert_eq!(result.balance, -1200.0);
        assert_eq!(result.savings_percent, 0.0);
    }

    #[test]
    fn test_deficit_gives_negative_savings() {
        let result = calculate(&BalanceInput { income: 2000.0, expenses: 2500.0 });
        assert_eq!(result.savings_percent, -25.0);
        assert_eq!(result.summary(), "Balance: -500.00 | Savings: -25%");
    }

    #[test]
    fn test_summary() {
        let result = calculate(&BalanceInput { income: 3000.0, expenses: 1765.5 });
        // 1234.5 / 3000 * 100 = 41.15
        assert_eq!(result.summary(), "Balance: 1,234.50 | Savings: 41.15%");
    }

    #[test]
    fn test_form_parsing() {
        let input = BalanceForm::new(" 4000 ", "3000").parse().unwrap();
        assert_eq!(input, BalanceInput { income: 4000.0, expenses: 3000.0 });
    }

    #[test]
    fn test_form_rejects_text() {
        let err = BalanceForm::new("4000", "abc").parse().unwrap_err();
        match err {
            CalcError::InputError { calculator, field, .. } => {
                assert_eq!(calculator, Calculator::Balance);
                assert_eq!(field, "expenses");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
