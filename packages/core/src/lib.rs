pub mod error;
pub mod fonts;
pub mod geometry;
pub mod listener;
pub mod options;
pub mod panel;
pub mod preferences;
pub mod session;
pub mod settings;
pub mod store;

pub use error::{ReaderError, ReaderResult};
pub use fonts::FontFile;
pub use geometry::{Bounds, PanelLayout, Point};
pub use listener::{ListenerRegistry, PointerListener};
pub use options::{BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize, OptionSet, Rgb};
pub use panel::{PanelAction, PanelMessage, SettingsPanel};
pub use preferences::Preferences;
pub use session::{ReadingSession, SessionEvent};
pub use settings::{PresentationSettings, SettingChange, StyleVariables};
pub use store::{PanelVisibility, SettingsStore};
