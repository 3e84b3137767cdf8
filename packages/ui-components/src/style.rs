//! Conversions from applied style variables to iced styling

use iced::widget::{button, container};
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};
use lector_core::settings::{
    BACKGROUND_COLOR_VAR, CONTAINER_WIDTH_VAR, FONT_COLOR_VAR, FONT_FAMILY_VAR, FONT_SIZE_VAR,
};
use lector_core::{PresentationSettings, StyleVariables};

pub const LABEL_COLOR: Color = Color {
    r: 0.16,
    g: 0.16,
    b: 0.16,
    a: 1.0,
};
pub const PANEL_COLOR: Color = Color::WHITE;
const ACCENT_COLOR: Color = Color {
    r: 0.99,
    g: 0.14,
    b: 0.69,
    a: 1.0,
};

/// Article styling resolved from the style variables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleStyle {
    pub font: Font,
    pub font_size: f32,
    pub font_color: Color,
    pub background_color: Color,
    pub content_width: f32,
}

impl ArticleStyle {
    /// Resolve every variable, using the default style for any that is
    /// missing or unparsable
    pub fn from_variables(vars: &StyleVariables) -> Self {
        let fallback = Self::from_settings(&PresentationSettings::default());

        Self {
            font: vars
                .get(FONT_FAMILY_VAR)
                .map(Font::with_name)
                .unwrap_or(fallback.font),
            font_size: vars
                .get(FONT_SIZE_VAR)
                .and_then(parse_px)
                .unwrap_or(fallback.font_size),
            font_color: vars
                .get(FONT_COLOR_VAR)
                .and_then(parse_hex)
                .unwrap_or(fallback.font_color),
            background_color: vars
                .get(BACKGROUND_COLOR_VAR)
                .and_then(parse_hex)
                .unwrap_or(fallback.background_color),
            content_width: vars
                .get(CONTAINER_WIDTH_VAR)
                .and_then(parse_px)
                .unwrap_or(fallback.content_width),
        }
    }

    fn from_settings(settings: &PresentationSettings) -> Self {
        let rgb = |c: lector_core::Rgb| Color::from_rgb8(c.r, c.g, c.b);
        Self {
            font: Font::with_name(lector_core::OptionSet::value(&settings.font_family)),
            font_size: settings.font_size.px(),
            font_color: rgb(settings.font_color.rgb()),
            background_color: rgb(settings.background_color.rgb()),
            content_width: settings.content_width.px(),
        }
    }
}

/// Parse a `"18px"` style length
pub fn parse_px(value: &str) -> Option<f32> {
    value.strip_suffix("px")?.trim().parse().ok()
}

/// Parse a `"#RRGGBB"` style color
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
}

/// Solid page background behind the article
pub struct PageBackground(pub Color);

impl container::StyleSheet for PageBackground {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(self.0)),
            ..Default::default()
        }
    }
}

/// Raised white surface for the slide-out panel
pub struct PanelSurface;

impl container::StyleSheet for PanelSurface {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(LABEL_COLOR),
            background: Some(Background::Color(PANEL_COLOR)),
            border: Border {
                color: Color::from_rgb(0.85, 0.85, 0.85),
                width: 1.0,
                radius: 0.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(4.0, 0.0),
                blur_radius: 16.0,
            },
        }
    }
}

/// Round toggle button; filled with the accent color while the panel is open
pub struct ArrowButtonStyle {
    pub is_open: bool,
}

impl button::StyleSheet for ArrowButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        let (background, text_color) = if self.is_open {
            (ACCENT_COLOR, Color::WHITE)
        } else {
            (Color::WHITE, LABEL_COLOR)
        };
        button::Appearance {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: ACCENT_COLOR,
                width: 2.0,
                radius: 24.0.into(),
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let mut active = self.active(style);
        active.border.width = 3.0;
        active
    }
}
