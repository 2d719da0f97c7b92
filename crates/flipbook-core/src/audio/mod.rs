//! Ambient music that follows the open/closed state of the book.

mod controller;
mod latch;
mod output;
mod ramp;

pub use controller::{
    AudioFadeController, AudioPhase, AudioState, DEFAULT_BASE_VOLUME, DEFAULT_FADE_STEP,
    DEFAULT_FADE_TICK, FadeSettings, MuteButtonView, QUIET_BASE_VOLUME, mute_button,
};
pub use latch::{LatchEvent, PermissionLatch};
pub use output::{
    AudioCommand, MusicOutput, PlayPurpose, PlayRequest, StartOutcome, StartResolution,
};
pub use ramp::{FadeDirection, FadeJob, RAMP_EPSILON, RampSlot, RampStep};
