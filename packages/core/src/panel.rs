//! Settings panel state machine
//!
//! The panel stages a draft copy of the applied settings while it is open.
//! It never mutates the store itself: [`SettingsPanel::update`] returns a
//! [`PanelAction`] for the shell to carry out, after which the shell calls
//! [`SettingsPanel::sync`] so the panel follows the store's visibility.

use crate::geometry::{PanelLayout, Point};
use crate::listener::{ListenerRegistry, PointerListener};
use crate::settings::{PresentationSettings, SettingChange};
use crate::store::SettingsStore;
use tracing::debug;

/// Messages from the panel's controls and the pointer listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMessage {
    /// The toggle control was pressed
    Toggle,
    /// One form control changed
    FieldChanged(SettingChange),
    /// The apply button was pressed
    Submit,
    /// The reset button was pressed
    Reset,
    /// A pointer press anywhere in the window
    PointerPressed(Point),
    /// Keyboard dismissal (Escape)
    Dismiss,
}

/// What the shell should do in response to a panel message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    SetOpen(bool),
    Apply(PresentationSettings),
    Reset,
    Close,
}

/// Panel state; the draft and the listener only exist while open
#[derive(Debug, Default)]
enum PanelState {
    #[default]
    Closed,
    Open {
        draft: PresentationSettings,
        listener: PointerListener,
    },
}

#[derive(Debug)]
pub struct SettingsPanel {
    state: PanelState,
    registry: ListenerRegistry,
    layout: PanelLayout,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new(ListenerRegistry::new())
    }
}

impl SettingsPanel {
    /// Create a closed panel that registers its listener with `registry`
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            state: PanelState::Closed,
            registry,
            layout: PanelLayout::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PanelState::Open { .. })
    }

    /// Whether this panel currently holds a pointer listener
    pub fn is_listening(&self) -> bool {
        self.is_open()
    }

    /// The draft being edited, if open
    pub fn draft(&self) -> Option<&PresentationSettings> {
        match &self.state {
            PanelState::Open { draft, .. } => Some(draft),
            PanelState::Closed => None,
        }
    }

    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: PanelLayout) {
        self.layout = layout;
    }

    pub fn listener_registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// Follow the store's visibility
    ///
    /// Opening seeds the draft from the applied settings and acquires the
    /// pointer listener. Closing drops both.
    pub fn sync(&mut self, store: &SettingsStore) {
        match (store.is_panel_open(), self.is_open()) {
            (true, false) => {
                debug!("Panel opened, seeding draft from applied settings");
                self.state = PanelState::Open {
                    draft: store.settings(),
                    listener: self.registry.acquire(),
                };
            }
            (false, true) => {
                debug!("Panel closed, discarding draft");
                self.state = PanelState::Closed;
            }
            _ => {}
        }
    }

    /// Handle a panel message
    pub fn update(&mut self, message: PanelMessage) -> Option<PanelAction> {
        match message {
            PanelMessage::Toggle => Some(PanelAction::SetOpen(!self.is_open())),
            PanelMessage::FieldChanged(change) => {
                match &mut self.state {
                    PanelState::Open { draft, .. } => *draft = draft.with_change(change),
                    PanelState::Closed => debug!("Ignoring {:?} while closed", change),
                }
                None
            }
            PanelMessage::Submit => self.draft().copied().map(PanelAction::Apply),
            PanelMessage::Reset => self.is_open().then_some(PanelAction::Reset),
            PanelMessage::PointerPressed(point) => {
                if self.is_open() && !self.layout.is_inside(point) {
                    debug!("Pointer pressed outside panel at {:?}", point);
                    Some(PanelAction::Close)
                } else {
                    None
                }
            }
            PanelMessage::Dismiss => self.is_open().then_some(PanelAction::Close),
        }
    }
}
