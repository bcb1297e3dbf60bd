//! Percentage Toolkit tab
//!
//! Two shared fields and four operation buttons laid out in two rows.

use iced::widget::{button, column, row, text, Column, Space};
use iced::{Element, Length, Padding};

use calc_core::calculations::{CalculationResult, Calculator, PercentageOperation};

use super::shared::{heading, labeled_input, result_label};
use crate::{App, Message};

/// Render the percentage toolkit
pub fn view(app: &App) -> Column<'_, Message> {
    let last_operation = match app.results.get(&Calculator::Percentage) {
        Some(CalculationResult::Percentage(result)) => Some(result.operation),
        _ => None,
    };

    column![
        heading("Percentage Toolkit"),
        Space::new().height(8),
        labeled_input("Base / Part:", &app.percentage.base, Message::PercentBaseChanged, None),
        labeled_input(
            "Percent / Whole:",
            &app.percentage.secondary,
            Message::PercentSecondaryChanged,
            None,
        ),
        row![
            operation_button(PercentageOperation::Increase, last_operation),
            operation_button(PercentageOperation::Decrease, last_operation),
        ]
        .spacing(8),
        row![
            operation_button(PercentageOperation::PercentOf, last_operation),
            operation_button(PercentageOperation::WhatPercent, last_operation),
        ]
        .spacing(8),
        result_label(app.result_text(Calculator::Percentage)),
    ]
    .spacing(8)
}

/// Half-width button for one operation; the last one run is highlighted
fn operation_button<'a>(
    operation: PercentageOperation,
    last_operation: Option<PercentageOperation>,
) -> Element<'a, Message> {
    let style = if last_operation == Some(operation) {
        button::primary
    } else {
        button::secondary
    };

    button(text(operation.display_name()).size(11))
        .on_press(Message::RunPercentage(operation))
        .padding(Padding::from([6, 16]))
        .style(style)
        .width(Length::FillPortion(1))
        .into()
}
