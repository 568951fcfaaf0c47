//! Profile Editor - Desktop GUI Application
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;
use tracing_subscriber::EnvFilter;

use profile_editor::{App, Settings};

/// Application entry point.
pub fn main() -> iced::Result {
    let (settings, load_error) = match Settings::try_load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    // RUST_LOG takes precedence over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Profile Editor");
    if let Some(err) = &load_error {
        tracing::warn!(error = %err, "settings could not be loaded, using defaults");
    }

    let size = Size::new(settings.window.width, settings.window.height);

    iced::application(
        move || App::new(settings.clone(), load_error.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .subscription(App::subscription)
    .font(iced_fonts::LUCIDE_FONT_BYTES)
    .window(window::Settings {
        size,
        min_size: Some(Size::new(640.0, 480.0)),
        ..Default::default()
    })
    .run()
}
