//! Shared UI components reusable across the calculator tabs

use iced::widget::{button, container, row, text, text_input};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Width of the label column in every tab
const LABEL_WIDTH: f32 = 150.0;

/// Section heading at the top of a tab
pub fn heading(title: &str) -> Element<'_, Message> {
    text(title).size(14).into()
}

/// Helper to create a labeled text input.
///
/// With `on_submit`, pressing Enter in the field sends that message.
pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
    on_submit: Option<Message>,
) -> Element<'a, Message> {
    let input = text_input("", value)
        .on_input(on_change)
        .width(Length::Fill)
        .padding(4)
        .size(11);

    let input = match on_submit {
        Some(message) => input.on_submit(message),
        None => input,
    };

    row![text(label).size(11).width(Length::Fixed(LABEL_WIDTH)), input]
        .align_y(Alignment::Center)
        .into()
}

/// Primary action button
pub fn action_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(11))
        .on_press(message)
        .padding(Padding::from([6, 16]))
        .style(button::primary)
        .into()
}

/// Result label inside a bordered box
pub fn result_label<'a>(result: String) -> Element<'a, Message> {
    container(text(result).size(12))
        .padding(8)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
