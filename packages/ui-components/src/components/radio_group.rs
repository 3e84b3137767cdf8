use iced::widget::{column, radio, text, Row};
use iced::{Alignment, Element};
use lector_core::OptionSet;

use crate::style::LABEL_COLOR;

/// Titled row of radio buttons over a fixed option set
pub fn radio_group<'a, T, Message>(
    title: &'a str,
    selected: T,
    on_change: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: OptionSet + Eq,
    Message: Clone + 'a,
{
    let label = text(title)
        .size(14)
        .style(iced::theme::Text::Color(LABEL_COLOR));

    let options = T::all()
        .iter()
        .fold(Row::new().spacing(24), |row, option| {
            row.push(radio(option.label(), *option, Some(selected), &on_change).size(18))
        })
        .align_items(Alignment::Center);

    column![label, options].spacing(8).into()
}
