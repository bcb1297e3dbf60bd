//! Modal dialog component
//!
//! The "Input Error" alert shown when a tab's fields do not parse. It sits
//! on a backdrop that swallows clicks meant for the tab underneath.

use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length, Padding};

use calc_core::{CalcError, INPUT_ERROR_TITLE};

use crate::Message;

/// Contents of an open error dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

impl ErrorDialog {
    /// Dialog for an error, using the calculator's guidance text
    pub fn from_error(error: &CalcError) -> Self {
        ErrorDialog {
            title: INPUT_ERROR_TITLE.to_string(),
            message: error.user_message(),
        }
    }
}

/// Render a modal backdrop (semi-transparent overlay that catches clicks).
///
/// Only the OK button closes the dialog.
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::BackdropPressed)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the error dialog
pub fn view_modal(dialog: &ErrorDialog) -> Element<'_, Message> {
    let ok_button = button(text("OK").size(11))
        .on_press(Message::DismissError)
        .padding(Padding::from([6, 16]))
        .style(button::primary);

    let content = column![
        text(dialog.title.as_str()).size(18),
        Space::new().height(12),
        text(dialog.message.as_str()).size(12),
        Space::new().height(20),
        container(ok_button)
            .align_x(iced::alignment::Horizontal::Right)
            .width(Length::Fill),
    ]
    .width(Length::Fixed(360.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
