use iced::widget::{button, text};

/// Filled button that commits the form
pub fn apply_button<'a, Message: Clone>(label: &'a str) -> button::Button<'a, Message> {
    button(text(label).size(16))
        .padding([12, 24])
        .style(iced::theme::Button::Primary)
}

/// Outlined button that clears the form back to defaults
pub fn clear_button<'a, Message: Clone>(label: &'a str) -> button::Button<'a, Message> {
    button(text(label).size(16))
        .padding([12, 24])
        .style(iced::theme::Button::Secondary)
}
