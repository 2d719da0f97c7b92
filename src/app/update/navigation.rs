use super::super::state::App;
use super::Effect;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_next_page(&mut self, effects: &mut Vec<Effect>) {
        self.handle_user_gesture(effects);
        match self.book.layout.next(self.book.current_page) {
            Some(next) => effects.push(Effect::FlipTo(next)),
            None => debug!("Already on the back cover"),
        }
    }

    pub(super) fn handle_previous_page(&mut self, effects: &mut Vec<Effect>) {
        self.handle_user_gesture(effects);
        match self.book.layout.previous(self.book.current_page) {
            Some(previous) => effects.push(Effect::FlipTo(previous)),
            None => debug!("Already on the cover"),
        }
    }

    pub(super) fn handle_page_changed(&mut self, raw_index: usize, effects: &mut Vec<Effect>) {
        let index = match self.book.layout.page(raw_index) {
            Ok(index) => index,
            Err(err) => {
                warn!("Ignoring page change: {err}");
                return;
            }
        };
        self.book.show_page(index);
        info!(
            page = index.get(),
            mode = self.book.view.mode.class_name(),
            label = self.book.view.label,
            "Navigated to page"
        );
        effects.extend(self.audio.on_page_changed(index).into_iter().map(Effect::Audio));
    }
}
