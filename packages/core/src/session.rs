//! Reading session: the settings store and panel wired together

use crate::geometry::PanelLayout;
use crate::listener::ListenerRegistry;
use crate::panel::{PanelAction, PanelMessage, SettingsPanel};
use crate::settings::PresentationSettings;
use crate::store::SettingsStore;
use tracing::info;

/// Observable outcome of handling one panel message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Applied settings changed (and the panel closed)
    SettingsChanged,
    /// Only the panel's visibility changed
    VisibilityChanged,
    Unchanged,
}

#[derive(Debug)]
pub struct ReadingSession {
    store: SettingsStore,
    panel: SettingsPanel,
}

impl Default for ReadingSession {
    fn default() -> Self {
        Self::new(PresentationSettings::default())
    }
}

impl ReadingSession {
    pub fn new(settings: PresentationSettings) -> Self {
        Self::with_registry(settings, ListenerRegistry::new())
    }

    pub fn with_registry(settings: PresentationSettings, registry: ListenerRegistry) -> Self {
        Self {
            store: SettingsStore::new(settings),
            panel: SettingsPanel::new(registry),
        }
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    /// Recompute hit-test bounds after the window is resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.panel.set_layout(PanelLayout::for_viewport(width, height));
    }

    /// Route a message through the panel and apply its action to the store
    pub fn handle(&mut self, message: PanelMessage) -> SessionEvent {
        let before = (self.store.settings(), self.store.visibility());

        if let Some(action) = self.panel.update(message) {
            match action {
                PanelAction::SetOpen(open) => self.store.set_panel_open(open),
                PanelAction::Apply(settings) => {
                    info!("Applying presentation settings");
                    self.store.apply_settings(settings);
                }
                PanelAction::Reset => {
                    info!("Resetting presentation settings");
                    self.store.reset_settings();
                }
                PanelAction::Close => self.store.set_panel_open(false),
            }
        }
        self.panel.sync(&self.store);

        if self.store.settings() != before.0 {
            SessionEvent::SettingsChanged
        } else if self.store.visibility() != before.1 {
            SessionEvent::VisibilityChanged
        } else {
            SessionEvent::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::options::ContentWidth;
    use crate::settings::SettingChange;

    #[test]
    fn test_toggle_round_trip() {
        let mut session = ReadingSession::default();

        assert_eq!(
            session.handle(PanelMessage::Toggle),
            SessionEvent::VisibilityChanged
        );
        assert!(session.store().is_panel_open());
        assert!(session.panel().is_open());

        assert_eq!(
            session.handle(PanelMessage::Toggle),
            SessionEvent::VisibilityChanged
        );
        assert!(!session.store().is_panel_open());
        assert!(!session.panel().is_open());
    }

    #[test]
    fn test_apply_reports_settings_change() {
        let mut session = ReadingSession::default();
        session.handle(PanelMessage::Toggle);
        session.handle(PanelMessage::FieldChanged(SettingChange::ContentWidth(
            ContentWidth::Narrow,
        )));

        assert_eq!(
            session.handle(PanelMessage::Submit),
            SessionEvent::SettingsChanged
        );
        assert_eq!(session.store().settings().content_width, ContentWidth::Narrow);
    }

    #[test]
    fn test_submit_unchanged_draft_only_closes() {
        let mut session = ReadingSession::default();
        session.handle(PanelMessage::Toggle);

        assert_eq!(
            session.handle(PanelMessage::Submit),
            SessionEvent::VisibilityChanged
        );
    }

    #[test]
    fn test_resize_moves_hit_area() {
        let mut session = ReadingSession::default();
        session.resize(700.0, 500.0);
        session.handle(PanelMessage::Toggle);

        assert_eq!(
            session.handle(PanelMessage::PointerPressed(Point::new(300.0, 450.0))),
            SessionEvent::Unchanged
        );
        assert_eq!(
            session.handle(PanelMessage::PointerPressed(Point::new(690.0, 450.0))),
            SessionEvent::VisibilityChanged
        );
    }
}
