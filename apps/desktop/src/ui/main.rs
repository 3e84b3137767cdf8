//! Main reading view: the optional panel, its toggle and the article

use crate::app::{LectorApp, Message};
use iced::{
    widget::{container, Row},
    Element, Length,
};
use lector_core::geometry::TOGGLE_MARGIN;
use lector_core::PanelMessage;
use lector_ui::style::{ArticleStyle, PageBackground};
use lector_ui::{arrow_button, article_view, settings_panel_view};

pub fn main_view(app: &LectorApp) -> Element<'_, Message> {
    let store = app.session.store();
    let style = ArticleStyle::from_variables(store.style_variables());

    let mut layout = Row::new();

    let panel = app.session.panel();
    if let Some(draft) = panel.draft() {
        let width = panel.layout().panel.width;
        layout = layout.push(settings_panel_view(*draft, width).map(Message::Panel));
    }

    let toggle = container(arrow_button(
        store.is_panel_open(),
        Message::Panel(PanelMessage::Toggle),
    ))
    .padding(TOGGLE_MARGIN);

    layout = layout.push(toggle).push(article_view(style));

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(PageBackground(
            style.background_color,
        ))))
        .into()
}
