mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::App;
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

/// Cadence for checking process signals such as Ctrl+C.
const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(250);

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(SIGNAL_POLL_INTERVAL).map(|_| Message::PollSystemSignals),
        ];

        // Keyed by generation so a replaced fade gets its own timer.
        if let Some(job) = app.audio.active_ramp() {
            subscriptions.push(
                time::every(app.audio.settings().tick_interval)
                    .with(job.generation)
                    .map(|(generation, _)| Message::FadeTick(generation)),
            );
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
