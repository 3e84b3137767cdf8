use iced::widget::{column, pick_list, text};
use iced::{Element, Length};
use lector_core::OptionSet;

use crate::style::LABEL_COLOR;

/// Titled drop-down over a fixed option set
pub fn select<'a, T, Message>(
    title: &'a str,
    selected: T,
    on_change: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: OptionSet + std::fmt::Display,
    Message: Clone + 'a,
{
    let label = text(title)
        .size(14)
        .style(iced::theme::Text::Color(LABEL_COLOR));

    let list = pick_list(T::all().to_vec(), Some(selected), on_change)
        .width(Length::Fill)
        .padding([10, 12]);

    column![label, list].spacing(8).into()
}
