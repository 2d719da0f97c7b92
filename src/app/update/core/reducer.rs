use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app::update) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextPage => self.handle_next_page(&mut effects),
            Message::PreviousPage => self.handle_previous_page(&mut effects),
            Message::PageChanged(index) => self.handle_page_changed(index, &mut effects),
            Message::ToggleMute => self.handle_toggle_mute(&mut effects),
            Message::UserGesture => self.handle_user_gesture(&mut effects),
            Message::FadeTick(generation) => self.handle_fade_tick(generation, &mut effects),
            Message::PlaybackResolved(resolution) => {
                self.handle_playback_resolved(resolution, &mut effects)
            }
            Message::KeyPressed { key, modifiers } => {
                self.handle_user_gesture(&mut effects);
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            tracing::info!("Received Ctrl+C; shutting down");
            effects.push(Effect::QuitSafely);
        }
    }
}
