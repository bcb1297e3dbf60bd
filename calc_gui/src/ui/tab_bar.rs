//! Tab bar component
//!
//! One button per calculator; the active tab is drawn with the primary style.

use iced::widget::{button, row, text, Row};
use iced::{Alignment, Element, Padding};

use calc_core::calculations::Calculator;

use crate::Message;

/// Render the tab bar
pub fn view_tab_bar(active: Calculator) -> Element<'static, Message> {
    let tabs = Calculator::ALL.iter().fold(Row::new().spacing(4), |tabs, &tab| {
        let style = if tab == active { button::primary } else { button::secondary };
        tabs.push(
            button(text(tab.display_name()).size(11))
                .on_press(Message::TabSelected(tab))
                .padding(Padding::from([4, 10]))
                .style(style),
        )
    });

    row![tabs]
        .padding(Padding::from([4, 0]))
        .align_y(Alignment::Center)
        .into()
}
