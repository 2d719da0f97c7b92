use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use flipbook_core::audio::MusicOutput;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::touch;
use iced::window;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Audio(command) => match command.apply(self.music.as_mut()) {
                Some(resolution) => Task::done(Message::PlaybackResolved(resolution)),
                None => Task::none(),
            },
            Effect::FlipTo(index) => Task::done(Message::PageChanged(index.get())),
            Effect::QuitSafely => {
                info!(page = self.book.current_page.get(), "Quitting viewer");
                self.music.pause();
                iced::exit()
            }
        }
    }
}

/// Gestures are reported even when a widget captured the event: a click on
/// a button still counts as user interaction for the autoplay gate.
pub(super) fn runtime_event_to_message(
    event: Event,
    _status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        Event::Mouse(mouse::Event::ButtonPressed(_))
        | Event::Touch(touch::Event::FingerPressed { .. }) => Some(Message::UserGesture),
        _ => None,
    }
}
