mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::cache::FilePreferences;
use crate::config::AppConfig;
use crate::resume::Resume;
use crate::theme::{ThemeState, system_theme};
use iced::{Size, window};
use std::path::Path;
use tracing::debug;

/// Helper to launch the viewer with the loaded resume.
pub fn run_app(resume: Resume, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(320.0, 240.0)),
        ..window::Settings::default()
    };
    let store = FilePreferences::in_dir(Path::new(&config.cache_dir));
    debug!(path = %store.path().display(), "Theme preference store");
    let theme = ThemeState::load(Box::new(store), system_theme(), config.fallback_theme);

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| app.theme.iced_theme())
        .run_with(move || App::bootstrap(resume, config, theme))
}

impl App {
    fn title(&self) -> String {
        format!("{} | Resume", self.resume.personal.name)
    }
}
