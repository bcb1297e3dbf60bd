//! Income & Expense tab
//!
//! Monthly income and expenses in, balance and savings percentage out.

use iced::widget::{column, Column, Space};

use calc_core::calculations::Calculator;

use super::shared::{action_button, heading, labeled_input, result_label};
use crate::{App, Message};

/// Render the balance calculator
pub fn view(app: &App) -> Column<'_, Message> {
    column![
        heading("Income vs Expense"),
        Space::new().height(8),
        labeled_input(
            "Monthly Income:",
            &app.balance.income,
            Message::IncomeChanged,
            Some(Message::CalculateBalance),
        ),
        labeled_input(
            "Monthly Expenses:",
            &app.balance.expenses,
            Message::ExpensesChanged,
            Some(Message::CalculateBalance),
        ),
        action_button("Calculate", Message::CalculateBalance),
        result_label(app.result_text(Calculator::Balance)),
    ]
    .spacing(8)
}
