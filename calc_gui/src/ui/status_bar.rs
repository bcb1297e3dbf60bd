//! Status Bar (Bottom)
//!
//! Shows the outcome of the last action and the crate version.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str) -> Element<'_, Message> {
    row![
        text(status).size(10),
        Space::new().width(Length::Fill),
        text(concat!("v", env!("CARGO_PKG_VERSION"))).size(10).color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
