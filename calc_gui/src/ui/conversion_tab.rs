//! Unit Conversion tab
//!
//! Category picker plus a single value field.

use iced::widget::{column, pick_list, row, text, Column, Space};
use iced::{Alignment, Length};

use calc_core::calculations::{Calculator, ConversionCategory};

use super::shared::{action_button, heading, labeled_input, result_label};
use crate::{App, Message};

/// Render the unit converter
pub fn view(app: &App) -> Column<'_, Message> {
    let category_picker = row![
        text("Category:").size(11).width(Length::Fixed(150.0)),
        pick_list(
            ConversionCategory::ALL,
            Some(app.conversion.category),
            Message::CategorySelected
        )
        .width(Length::Fill)
        .text_size(11),
    ]
    .align_y(Alignment::Center);

    column![
        heading("Quick Conversions"),
        Space::new().height(8),
        category_picker,
        labeled_input(
            "Value:",
            &app.conversion.value,
            Message::ConversionValueChanged,
            Some(Message::Convert),
        ),
        action_button("Convert", Message::Convert),
        result_label(app.result_text(Calculator::UnitConversion)),
    ]
    .spacing(8)
}
