use iced::widget::{column, horizontal_rule, Space};
use iced::Element;

/// Thin horizontal divider between form sections
pub fn separator<'a, Message: 'a>() -> Element<'a, Message> {
    column![
        Space::with_height(12),
        horizontal_rule(1),
        Space::with_height(12),
    ]
    .into()
}
