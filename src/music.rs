//! Background music playback through `rodio`.
//!
//! The track is opened lazily on the first accepted start and loops forever.
//! Starts that do not come from a user gesture are refused until one gesture
//! start has gone through, mirroring how browsers gate autoplay.

use anyhow::{Context, Result, bail};
use flipbook_core::audio::MusicOutput;
use rodio::{Decoder, OutputStream, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
struct AutoplayGate {
    require_gesture: bool,
    granted: bool,
}

impl AutoplayGate {
    fn check(&self, gesture: bool) -> Result<()> {
        if self.require_gesture && !self.granted && !gesture {
            bail!("autoplay blocked until the first user gesture");
        }
        Ok(())
    }

    fn record_success(&mut self, gesture: bool) {
        if gesture && !self.granted {
            debug!("Autoplay granted by user gesture");
            self.granted = true;
        }
    }
}

struct MusicPlayback {
    _stream: OutputStream,
    sink: Sink,
}

pub struct RodioMusic {
    source_path: PathBuf,
    gate: AutoplayGate,
    playback: Option<MusicPlayback>,
    volume: f32,
    muted: bool,
}

impl RodioMusic {
    pub fn new(source_path: PathBuf, require_gesture: bool) -> Self {
        info!(
            path = %source_path.display(),
            require_gesture,
            "Configured background music"
        );
        Self {
            source_path,
            gate: AutoplayGate {
                require_gesture,
                granted: false,
            },
            playback: None,
            volume: 0.0,
            muted: false,
        }
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    fn open(&self) -> Result<MusicPlayback> {
        let (_stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;
        let file = File::open(&self.source_path)
            .with_context(|| format!("Opening music file {}", self.source_path.display()))?;
        let source = Decoder::new(BufReader::new(file)).context("Decoding music file")?;
        sink.pause();
        sink.append(source.repeat_infinite());
        info!(path = %self.source_path.display(), "Opened looping music track");
        Ok(MusicPlayback { _stream, sink })
    }
}

impl MusicOutput for RodioMusic {
    fn start(&mut self, gesture: bool) -> Result<()> {
        self.gate.check(gesture)?;
        if self.playback.is_none() {
            self.playback = Some(self.open()?);
        }
        let volume = self.effective_volume();
        if let Some(playback) = &self.playback {
            playback.sink.set_volume(volume);
            playback.sink.play();
        }
        self.gate.record_success(gesture);
        debug!(volume, gesture, "Music playing");
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(playback) = &self.playback {
            debug!("Pausing music");
            playback.sink.pause();
        }
    }

    fn rewind(&mut self) {
        if let Some(playback) = self.playback.take() {
            debug!("Rewinding music to the start of the track");
            playback.sink.stop();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        let effective = self.effective_volume();
        if let Some(playback) = &self.playback {
            playback.sink.set_volume(effective);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        let effective = self.effective_volume();
        if let Some(playback) = &self.playback {
            playback.sink.set_volume(effective);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_refuses_autoplay_before_any_gesture() {
        let gate = AutoplayGate {
            require_gesture: true,
            granted: false,
        };
        assert!(gate.check(false).is_err());
        assert!(gate.check(true).is_ok());
    }

    #[test]
    fn gate_opens_after_gesture_start() {
        let mut gate = AutoplayGate {
            require_gesture: true,
            granted: false,
        };
        gate.record_success(true);
        assert!(gate.check(false).is_ok());
    }

    #[test]
    fn gate_can_be_disabled() {
        let gate = AutoplayGate {
            require_gesture: false,
            granted: false,
        };
        assert!(gate.check(false).is_ok());
    }

    #[test]
    fn refused_start_leaves_device_closed() {
        let mut music = RodioMusic::new(PathBuf::from("/nonexistent/music.mpeg"), true);
        assert!(music.start(false).is_err());
        assert!(music.playback.is_none());
    }

    #[test]
    fn mute_zeroes_effective_volume() {
        let mut music = RodioMusic::new(PathBuf::from("/nonexistent/music.mpeg"), true);
        music.set_volume(0.6);
        music.set_muted(true);
        assert_eq!(music.effective_volume(), 0.0);
        music.set_muted(false);
        assert_eq!(music.effective_volume(), 0.6);
    }
}
