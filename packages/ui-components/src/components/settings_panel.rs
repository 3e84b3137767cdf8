//! Slide-out settings form
//!
//! Renders the panel's draft as five controls plus the reset and apply
//! buttons. All state lives in [`lector_core::SettingsPanel`]; this view only
//! emits [`PanelMessage`]s.

use iced::widget::{column, container, row, text, Space};
use iced::{Element, Length};
use lector_core::{PanelMessage, PresentationSettings, SettingChange};

use crate::button::{apply_button, clear_button};
use crate::radio_group::radio_group;
use crate::select::select;
use crate::separator::separator;
use crate::style::PanelSurface;

/// Build the panel view for a draft, `width` pixels wide
pub fn settings_panel_view(
    draft: PresentationSettings,
    width: f32,
) -> Element<'static, PanelMessage> {
    let title = text("Article settings").size(28);

    let font_family = select("Font", draft.font_family, |v| {
        PanelMessage::FieldChanged(SettingChange::FontFamily(v))
    });
    let font_size = radio_group("Font size", draft.font_size, |v| {
        PanelMessage::FieldChanged(SettingChange::FontSize(v))
    });
    let font_color = select("Font color", draft.font_color, |v| {
        PanelMessage::FieldChanged(SettingChange::FontColor(v))
    });
    let background_color = select("Background color", draft.background_color, |v| {
        PanelMessage::FieldChanged(SettingChange::BackgroundColor(v))
    });
    let content_width = select("Content width", draft.content_width, |v| {
        PanelMessage::FieldChanged(SettingChange::ContentWidth(v))
    });

    let actions = row![
        clear_button("Reset").on_press(PanelMessage::Reset),
        Space::with_width(Length::Fill),
        apply_button("Apply").on_press(PanelMessage::Submit),
    ];

    let form = column![
        title,
        Space::with_height(24),
        font_family,
        separator(),
        font_size,
        separator(),
        font_color,
        separator(),
        background_color,
        separator(),
        content_width,
        Space::with_height(Length::Fill),
        actions,
    ]
    .spacing(8)
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill);

    container(form)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(PanelSurface)))
        .into()
}
