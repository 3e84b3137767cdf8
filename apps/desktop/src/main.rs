use anyhow::Context;
use iced::{Application, Settings, Size};
use lector_core::geometry::MIN_WINDOW_SIZE;
use lector_core::{fonts, Preferences};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::{Flags, LectorApp, WINDOW_SIZE};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,lector=debug")),
        )
        .init();

    info!("Starting Lector v{}", env!("CARGO_PKG_VERSION"));

    let preferences_path = Preferences::default_path();
    let preferences = Preferences::load_or_default(&preferences_path);
    info!("Using preferences at {:?}", preferences_path);

    let fonts_dir = fonts::default_fonts_dir();
    info!("Looking for article fonts in {:?}", fonts_dir);

    // Run the application
    LectorApp::run(Settings {
        window: iced::window::Settings {
            size: Size::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
            min_size: Some(Size::new(MIN_WINDOW_SIZE.0, MIN_WINDOW_SIZE.1)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        ..Settings::with_flags(Flags {
            preferences,
            preferences_path,
            fonts_dir,
        })
    })
    .context("Lector window exited with an error")?;

    Ok(())
}
