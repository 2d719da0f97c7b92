mod book;

use super::messages::Message;
use crate::config::AppConfig;
use flipbook_core::audio::{AudioFadeController, MusicOutput};
use iced::Task;
use tracing::info;

pub(in crate::app) use book::BookState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) book: BookState,
    pub(super) audio: AudioFadeController,
    pub(super) music: Box<dyn MusicOutput>,
}

impl App {
    pub(super) fn bootstrap(config: AppConfig, music: Box<dyn MusicOutput>) -> (Self, Task<Message>) {
        let book = BookState::new(config.page_paths());
        let audio = AudioFadeController::new(config.fade_settings(), book.layout);
        info!(
            pages = book.pages.len(),
            base_volume = audio.settings().base_volume,
            fade_step = audio.settings().step,
            tick_ms = audio.settings().tick_interval.as_millis() as u64,
            "Bootstrapped flipbook viewer"
        );
        let initial = book.current_page.get();
        let app = App {
            config,
            book,
            audio,
            music,
        };
        (app, Task::done(Message::PageChanged(initial)))
    }
}
