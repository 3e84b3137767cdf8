//! Presentation settings and their projection onto style variables

use crate::options::{BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize, OptionSet};
use serde::{Deserialize, Serialize};

/// The five presentation fields, replaced wholesale on change
///
/// `Default` is the single hard-coded default used at startup and as the
/// reset target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PresentationSettings {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_color: FontColor,
    pub background_color: BackgroundColor,
    pub content_width: ContentWidth,
}

/// A change to exactly one settings field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    FontFamily(FontFamily),
    FontSize(FontSize),
    FontColor(FontColor),
    BackgroundColor(BackgroundColor),
    ContentWidth(ContentWidth),
}

impl PresentationSettings {
    /// Copy of these settings with one field replaced
    #[must_use]
    pub fn with_change(mut self, change: SettingChange) -> Self {
        match change {
            SettingChange::FontFamily(v) => self.font_family = v,
            SettingChange::FontSize(v) => self.font_size = v,
            SettingChange::FontColor(v) => self.font_color = v,
            SettingChange::BackgroundColor(v) => self.background_color = v,
            SettingChange::ContentWidth(v) => self.content_width = v,
        }
        self
    }
}

pub const FONT_FAMILY_VAR: &str = "--font-family";
pub const FONT_SIZE_VAR: &str = "--font-size";
pub const FONT_COLOR_VAR: &str = "--font-color";
pub const BACKGROUND_COLOR_VAR: &str = "--bg-color";
pub const CONTAINER_WIDTH_VAR: &str = "--container-width";

/// Applied settings exposed as named style variables, one per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVariables {
    vars: [(&'static str, &'static str); 5],
}

impl StyleVariables {
    /// Value of a variable by name
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.vars
            .iter()
            .find(|(var, _)| *var == name)
            .map(|(_, value)| *value)
    }

    /// All `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.vars.iter().copied()
    }
}

impl From<&PresentationSettings> for StyleVariables {
    fn from(settings: &PresentationSettings) -> Self {
        Self {
            vars: [
                (FONT_FAMILY_VAR, settings.font_family.value()),
                (FONT_SIZE_VAR, settings.font_size.value()),
                (FONT_COLOR_VAR, settings.font_color.value()),
                (BACKGROUND_COLOR_VAR, settings.background_color.value()),
                (CONTAINER_WIDTH_VAR, settings.content_width.value()),
            ],
        }
    }
}
