use iced::widget::{button, text};
use iced::{alignment, Element, Length};
use lector_core::geometry::TOGGLE_SIZE;

use crate::style::ArrowButtonStyle;

/// Round toggle control for the settings panel
///
/// The arrow points toward the panel's next position.
pub fn arrow_button<'a, Message: Clone + 'a>(is_open: bool, on_press: Message) -> Element<'a, Message> {
    let glyph = if is_open { "\u{2190}" } else { "\u{2192}" };

    button(
        text(glyph)
            .size(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .horizontal_alignment(alignment::Horizontal::Center)
            .vertical_alignment(alignment::Vertical::Center),
    )
    .width(Length::Fixed(TOGGLE_SIZE))
    .height(Length::Fixed(TOGGLE_SIZE))
    .padding(0)
    .style(iced::theme::Button::Custom(Box::new(ArrowButtonStyle { is_open })))
    .on_press(on_press)
    .into()
}
