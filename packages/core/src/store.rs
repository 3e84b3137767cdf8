//! Applied presentation settings and panel visibility, owned by the shell

use crate::settings::{PresentationSettings, StyleVariables};
use tracing::debug;

/// Whether the settings panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

impl PanelVisibility {
    pub fn is_open(self) -> bool {
        matches!(self, PanelVisibility::Open)
    }
}

impl From<bool> for PanelVisibility {
    fn from(open: bool) -> Self {
        if open {
            PanelVisibility::Open
        } else {
            PanelVisibility::Closed
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    applied: PresentationSettings,
    visibility: PanelVisibility,
    variables: StyleVariables,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(PresentationSettings::default())
    }
}

impl SettingsStore {
    /// Create a store with the given applied settings and the panel closed
    pub fn new(applied: PresentationSettings) -> Self {
        Self {
            applied,
            visibility: PanelVisibility::Closed,
            variables: StyleVariables::from(&applied),
        }
    }

    /// Currently applied settings
    pub fn settings(&self) -> PresentationSettings {
        self.applied
    }

    /// Style variables for the applied settings
    pub fn style_variables(&self) -> &StyleVariables {
        &self.variables
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn is_panel_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Replace the applied settings and close the panel
    pub fn apply_settings(&mut self, settings: PresentationSettings) {
        debug!("Applying settings: {:?}", settings);
        self.replace(settings);
    }

    /// Restore the default settings and close the panel
    pub fn reset_settings(&mut self) {
        debug!("Resetting settings to defaults");
        self.replace(PresentationSettings::default());
    }

    /// Show or hide the panel without touching the settings
    pub fn set_panel_open(&mut self, open: bool) {
        let visibility = PanelVisibility::from(open);
        if visibility != self.visibility {
            debug!("Panel visibility: {:?} -> {:?}", self.visibility, visibility);
            self.visibility = visibility;
        }
    }

    fn replace(&mut self, settings: PresentationSettings) {
        self.applied = settings;
        self.variables = StyleVariables::from(&settings);
        self.set_panel_open(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{FontSize, OptionSet};
    use crate::settings::{SettingChange, FONT_SIZE_VAR};

    #[test]
    fn test_new_store_is_closed() {
        let store = SettingsStore::default();
        assert_eq!(store.visibility(), PanelVisibility::Closed);
        assert_eq!(store.settings(), PresentationSettings::default());
    }

    #[test]
    fn test_apply_replaces_and_closes() {
        let mut store = SettingsStore::default();
        store.set_panel_open(true);
        assert!(store.is_panel_open());

        let settings =
            PresentationSettings::default().with_change(SettingChange::FontSize(FontSize::ExtraLarge));
        store.apply_settings(settings);

        assert_eq!(store.settings(), settings);
        assert!(!store.is_panel_open());
        assert_eq!(
            store.style_variables().get(FONT_SIZE_VAR),
            Some(FontSize::ExtraLarge.value())
        );
    }

    #[test]
    fn test_reset_restores_defaults_and_closes() {
        let settings =
            PresentationSettings::default().with_change(SettingChange::FontSize(FontSize::Large));
        let mut store = SettingsStore::new(settings);
        store.set_panel_open(true);

        store.reset_settings();

        assert_eq!(store.settings(), PresentationSettings::default());
        assert!(!store.is_panel_open());
        assert_eq!(store.style_variables().get(FONT_SIZE_VAR), Some("18px"));
    }

    #[test]
    fn test_visibility_toggle_leaves_settings() {
        let mut store = SettingsStore::default();
        store.set_panel_open(true);
        store.set_panel_open(false);
        assert_eq!(store.settings(), PresentationSettings::default());
    }
}
