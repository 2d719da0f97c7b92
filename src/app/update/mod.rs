use flipbook_core::PageIndex;
use flipbook_core::audio::AudioCommand;

mod audio;
mod core;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, PartialEq)]
pub(super) enum Effect {
    Audio(AudioCommand),
    /// Ask the page viewer to turn to a page; it answers with `PageChanged`.
    FlipTo(PageIndex),
    QuitSafely,
}
