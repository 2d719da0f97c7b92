use anyhow::Result;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPurpose {
    /// Short start/stop used only to satisfy the autoplay gate.
    Probe,
    FadeIn,
    /// Direct resume at full volume after unmuting.
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayRequest {
    pub id: u64,
    pub purpose: PlayPurpose,
    pub gesture: bool,
}

/// Work the controller asks of the audio subsystem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    Start(PlayRequest),
    Pause,
    Rewind,
    SetVolume(f32),
    SetMuted(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartResolution {
    pub request_id: u64,
    pub outcome: StartOutcome,
}

/// A looping music track the controller can drive.
pub trait MusicOutput {
    /// Begin or resume playback. An error means the environment refused.
    fn start(&mut self, gesture: bool) -> Result<()>;
    /// Pause while keeping the position.
    fn pause(&mut self);
    /// Move back to the top of the track.
    fn rewind(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn set_muted(&mut self, muted: bool);
}

impl AudioCommand {
    /// Execute against an output. Starts report their outcome so it can be
    /// fed back to the controller later.
    pub fn apply<O: MusicOutput + ?Sized>(self, output: &mut O) -> Option<StartResolution> {
        match self {
            AudioCommand::Start(request) => {
                let outcome = match output.start(request.gesture) {
                    Ok(()) => {
                        debug!(request_id = request.id, purpose = ?request.purpose, "Playback start accepted");
                        StartOutcome::Accepted
                    }
                    Err(err) => {
                        warn!(
                            request_id = request.id,
                            purpose = ?request.purpose,
                            gesture = request.gesture,
                            "Playback start rejected: {err:#}"
                        );
                        StartOutcome::Rejected
                    }
                };
                Some(StartResolution {
                    request_id: request.id,
                    outcome,
                })
            }
            AudioCommand::Pause => {
                output.pause();
                None
            }
            AudioCommand::Rewind => {
                output.rewind();
                None
            }
            AudioCommand::SetVolume(volume) => {
                output.set_volume(volume);
                None
            }
            AudioCommand::SetMuted(muted) => {
                output.set_muted(muted);
                None
            }
        }
    }
}
