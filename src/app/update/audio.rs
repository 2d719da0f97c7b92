use super::super::state::App;
use super::Effect;
use flipbook_core::audio::StartResolution;

impl App {
    pub(super) fn handle_user_gesture(&mut self, effects: &mut Vec<Effect>) {
        effects.extend(self.audio.on_user_gesture().into_iter().map(Effect::Audio));
    }

    pub(super) fn handle_toggle_mute(&mut self, effects: &mut Vec<Effect>) {
        effects.extend(self.audio.toggle_mute().into_iter().map(Effect::Audio));
        self.handle_user_gesture(effects);
    }

    pub(super) fn handle_fade_tick(&mut self, generation: u64, effects: &mut Vec<Effect>) {
        effects.extend(self.audio.on_tick(generation).into_iter().map(Effect::Audio));
    }

    pub(super) fn handle_playback_resolved(
        &mut self,
        resolution: StartResolution,
        effects: &mut Vec<Effect>,
    ) {
        effects.extend(
            self.audio
                .on_start_resolved(resolution.request_id, resolution.outcome)
                .into_iter()
                .map(Effect::Audio),
        );
    }
}
