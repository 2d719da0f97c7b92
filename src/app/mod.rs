mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::{AppConfig, ThemeMode};
use crate::music::RodioMusic;
use iced::{Size, Theme, window};
use std::path::PathBuf;

/// Launch the viewer window.
pub fn run_app(config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Flipbook", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || {
            let music = RodioMusic::new(PathBuf::from(&config.music_path), config.require_gesture);
            App::bootstrap(config, Box::new(music))
        })
}
