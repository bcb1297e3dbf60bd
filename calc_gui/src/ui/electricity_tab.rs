//! Electricity Bill tab
//!
//! Units, fixed charge and tax fields, the estimate, and the per-tier
//! breakdown of the last estimate.

use iced::widget::{column, rule, text, Column, Space};

use calc_core::calculations::Calculator;

use super::shared::{action_button, heading, labeled_input, result_label};
use crate::{App, Message};

/// Render the bill estimator
pub fn view(app: &App) -> Column<'_, Message> {
    let form = &app.electricity;

    let mut panel = column![
        heading("Electricity Bill Estimator"),
        Space::new().height(8),
        labeled_input("Units Consumed (kWh):", &form.units, Message::UnitsChanged, Some(Message::EstimateBill)),
        labeled_input("Fixed Charges:", &form.fixed_charge, Message::FixedChargeChanged, Some(Message::EstimateBill)),
        labeled_input("Tax (%):", &form.tax_percent, Message::TaxChanged, Some(Message::EstimateBill)),
        action_button("Estimate Bill", Message::EstimateBill),
        result_label(app.result_text(Calculator::Electricity)),
    ]
    .spacing(8);

    if let Some(result) = app.electricity_result() {
        panel = panel
            .push(rule::horizontal(1))
            .push(text("Energy charge by tier").size(11).color([0.5, 0.5, 0.5]));
        for (i, tier) in result.tiers.iter().enumerate() {
            panel = panel.push(text(format!("Tier {}: {}", i + 1, tier.describe())).size(10));
        }
    }

    panel
}
