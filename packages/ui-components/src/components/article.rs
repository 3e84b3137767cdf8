//! The article being read

use iced::widget::{column, container, scrollable, text, Column};
use iced::{Element, Length};

use crate::style::ArticleStyle;

pub const ARTICLE_TITLE: &str = "Portrait of the Reader as a Young Typesetter";

pub const ARTICLE_SUBTITLE: &str = "Notes on how the shape of a page changes the way we read it";

pub const ARTICLE_BODY: &[&str] = &[
    "Long before screens, compositors set every line of a book by hand. They chose \
     the face, the size and the measure of the column, and a reader who never met \
     them lived with those choices for hundreds of pages.",
    "A measure that is too wide tires the eye: by the time it returns to the left \
     margin it has lost its place. A measure that is too narrow breaks the rhythm of \
     the sentence into stutters. Somewhere between the two is a column the reader \
     stops noticing, which is the whole point.",
    "Size works the same way. Type that is too small turns reading into squinting; \
     type that is too large turns a paragraph into a poster. The right size depends \
     on the face, the distance to the page and the person holding it.",
    "Color matters less than we think and more than we admit. Black on white is the \
     default because it is safe, not because it is best. Some readers prefer a warm \
     gray, others a dark background late at night.",
    "None of these choices is universal, and that is why this page lets you make \
     them. Open the panel on the left, try another face or a narrower column, and \
     apply it when the page feels like your own.",
];

/// Render the article with the applied style
pub fn article_view<'a, Message: 'a>(style: ArticleStyle) -> Element<'a, Message> {
    let color = iced::theme::Text::Color(style.font_color);

    let title = text(ARTICLE_TITLE)
        .font(style.font)
        .size(style.font_size * 2.0)
        .style(color);
    let subtitle = text(ARTICLE_SUBTITLE)
        .font(style.font)
        .size(style.font_size * 1.25)
        .style(color);

    let paragraphs = ARTICLE_BODY.iter().fold(
        Column::new().spacing(style.font_size),
        |body, paragraph| {
            body.push(
                text(*paragraph)
                    .font(style.font)
                    .size(style.font_size)
                    .style(color),
            )
        },
    );

    let article = column![title, subtitle, paragraphs]
        .spacing(style.font_size * 1.5)
        .max_width(style.content_width)
        .padding(40);

    scrollable(container(article).width(Length::Fill).center_x())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
