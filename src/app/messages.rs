use flipbook_core::audio::StartResolution;
use iced::keyboard::{Key, Modifiers};

/// Messages emitted by the UI and the runtime.
#[derive(Debug, Clone)]
pub enum Message {
    NextPage,
    PreviousPage,
    /// The page viewer settled on a new page (also sent once at startup).
    PageChanged(usize),
    ToggleMute,
    /// Any click, touch or key press.
    UserGesture,
    FadeTick(u64),
    PlaybackResolved(StartResolution),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    PollSystemSignals,
    SafeQuit,
}
