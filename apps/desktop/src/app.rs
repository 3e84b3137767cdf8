//! Main application: the reading session behind an iced window

use crate::ui::main_view;
use iced::{
    event, executor, keyboard, mouse, touch, window, Application, Command, Element, Event,
    Subscription, Theme,
};
use lector_core::{fonts, FontFile, PanelMessage, Point, Preferences, ReadingSession, SessionEvent};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Initial window size in logical pixels
pub const WINDOW_SIZE: (f32, f32) = (1280.0, 860.0);

pub struct LectorApp {
    pub session: ReadingSession,
    pub preferences: Preferences,
    pub preferences_path: PathBuf,
    /// Last known cursor position; mouse presses carry no position
    pub cursor: Point,
}

/// Startup state handed to the application
#[derive(Debug, Clone)]
pub struct Flags {
    pub preferences: Preferences,
    pub preferences_path: PathBuf,
    pub fonts_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum Message {
    Panel(PanelMessage),
    CursorMoved(iced::Point),
    PointerPressed,
    WindowResized { width: u32, height: u32 },
    PreferencesSaved(Result<(), String>),
    FontsRead(Result<Vec<FontFile>, String>),
    FontLoaded(Result<(), iced::font::Error>),
}

impl Application for LectorApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Flags;

    fn new(flags: Flags) -> (Self, Command<Message>) {
        info!("Initializing Lector application");

        let mut session = ReadingSession::new(flags.preferences.initial_settings());
        session.resize(WINDOW_SIZE.0, WINDOW_SIZE.1);

        let fonts_dir = flags.fonts_dir;
        let read_fonts = Command::perform(
            async move {
                fonts::read_font_files(&fonts_dir)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::FontsRead,
        );

        (
            Self {
                session,
                preferences: flags.preferences,
                preferences_path: flags.preferences_path,
                cursor: Point::default(),
            },
            read_fonts,
        )
    }

    fn title(&self) -> String {
        if self.session.store().is_panel_open() {
            "Lector - Article Settings".to_string()
        } else {
            "Lector".to_string()
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Panel(panel_message) => {
                debug!("Handling panel message: {:?}", panel_message);
                match self.session.handle(panel_message) {
                    SessionEvent::SettingsChanged => self.persist_settings(),
                    SessionEvent::VisibilityChanged | SessionEvent::Unchanged => Command::none(),
                }
            }
            Message::CursorMoved(position) => {
                self.cursor = Point::new(position.x, position.y);
                Command::none()
            }
            Message::PointerPressed => {
                self.update(Message::Panel(PanelMessage::PointerPressed(self.cursor)))
            }
            Message::WindowResized { width, height } => {
                self.session.resize(width as f32, height as f32);
                Command::none()
            }
            Message::PreferencesSaved(result) => {
                match result {
                    Ok(()) => debug!("Preferences saved to {:?}", self.preferences_path),
                    Err(e) => error!("Failed to save preferences: {}", e),
                }
                Command::none()
            }
            Message::FontsRead(Ok(files)) => {
                info!("Registering {} font files", files.len());
                Command::batch(
                    files
                        .into_iter()
                        .map(|file| iced::font::load(file.bytes).map(Message::FontLoaded)),
                )
            }
            Message::FontsRead(Err(e)) => {
                warn!("Failed to read fonts, using system fonts: {}", e);
                Command::none()
            }
            Message::FontLoaded(result) => {
                if let Err(e) = result {
                    warn!("Font could not be registered: {:?}", e);
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let tracking = event::listen_with(track_window);

        // The pointer listener only exists while the panel holds one
        if self.session.panel().is_listening() {
            Subscription::batch([tracking, event::listen_with(pointer_listener)])
        } else {
            tracking
        }
    }
}

impl LectorApp {
    fn persist_settings(&mut self) -> Command<Message> {
        if !self.preferences.remember_settings {
            return Command::none();
        }

        self.preferences.record(self.session.store().settings());
        let preferences = self.preferences.clone();
        let path = self.preferences_path.clone();
        Command::perform(
            async move { preferences.save_to(&path).await.map_err(|e| e.to_string()) },
            Message::PreferencesSaved,
        )
    }
}

/// Cursor and window size tracking, always active
fn track_window(event: Event, _status: event::Status) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::CursorMoved(position)),
        Event::Window(_, window::Event::Resized { width, height }) => {
            Some(Message::WindowResized { width, height })
        }
        _ => None,
    }
}

/// Global press listener, subscribed only while the panel is open
fn pointer_listener(event: Event, _status: event::Status) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerPressed),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => Some(Message::Panel(
            PanelMessage::PointerPressed(Point::new(position.x, position.y)),
        )),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Panel(PanelMessage::Dismiss)),
        _ => None,
    }
}
