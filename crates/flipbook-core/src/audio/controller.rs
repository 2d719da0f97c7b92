use super::latch::{LatchEvent, PermissionLatch};
use super::output::{AudioCommand, PlayPurpose, PlayRequest, StartOutcome};
use super::ramp::{FadeJob, RAMP_EPSILON, RampSlot, RampStep};
use crate::book::{BookLayout, PageIndex};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

pub const DEFAULT_BASE_VOLUME: f32 = 0.6;
pub const QUIET_BASE_VOLUME: f32 = 0.35;
pub const DEFAULT_FADE_STEP: f32 = 0.04;
pub const DEFAULT_FADE_TICK: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSettings {
    pub base_volume: f32,
    pub step: f32,
    pub tick_interval: Duration,
}

impl Default for FadeSettings {
    fn default() -> Self {
        Self {
            base_volume: DEFAULT_BASE_VOLUME,
            step: DEFAULT_FADE_STEP,
            tick_interval: DEFAULT_FADE_TICK,
        }
    }
}

impl FadeSettings {
    /// Upper bound on ticks for a full-range ramp.
    pub fn max_ramp_ticks(&self) -> u32 {
        ((self.base_volume / self.step) - RAMP_EPSILON).ceil().max(1.0) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioPhase {
    Silent,
    FadingIn,
    Playing,
    FadingOut,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioState {
    pub volume: f32,
    pub playing: bool,
    pub muted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuteButtonView {
    pub icon: &'static str,
    pub label: &'static str,
}

pub fn mute_button(muted: bool) -> MuteButtonView {
    if muted {
        MuteButtonView {
            icon: "🔇",
            label: "Activer le son",
        }
    } else {
        MuteButtonView {
            icon: "🔊",
            label: "Couper le son",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingStart {
    id: u64,
    purpose: PlayPurpose,
}

/// Ambient music follows the page: it fades in while the book is open on
/// its interior pages and fades out otherwise, unless the user muted it.
///
/// Every input returns the commands to run against the music output, in
/// order. Playback starts are asynchronous: their outcome comes back through
/// [`AudioFadeController::on_start_resolved`].
#[derive(Debug)]
pub struct AudioFadeController {
    settings: FadeSettings,
    layout: BookLayout,
    state: AudioState,
    phase: AudioPhase,
    ramp: RampSlot,
    latch: PermissionLatch,
    wants_playback: bool,
    pending: Option<PendingStart>,
    request_id: u64,
}

impl AudioFadeController {
    pub fn new(settings: FadeSettings, layout: BookLayout) -> Self {
        Self {
            settings,
            layout,
            state: AudioState {
                volume: 0.0,
                playing: false,
                muted: false,
            },
            phase: AudioPhase::Silent,
            ramp: RampSlot::default(),
            latch: PermissionLatch::default(),
            wants_playback: false,
            pending: None,
            request_id: 0,
        }
    }

    pub fn settings(&self) -> &FadeSettings {
        &self.settings
    }

    pub fn phase(&self) -> AudioPhase {
        self.phase
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn latch(&self) -> PermissionLatch {
        self.latch
    }

    pub fn active_ramp(&self) -> Option<FadeJob> {
        self.ramp.current()
    }

    pub fn has_pending_start(&self) -> bool {
        self.pending.is_some()
    }

    pub fn mute_button(&self) -> MuteButtonView {
        mute_button(self.state.muted)
    }

    pub fn on_page_changed(&mut self, index: PageIndex) -> Vec<AudioCommand> {
        let inside = self.layout.is_interior(index);
        self.wants_playback = inside;
        debug!(page = index.get(), inside, phase = ?self.phase, "Audio saw page change");
        if inside {
            self.on_should_play()
        } else {
            self.on_should_pause()
        }
    }

    fn on_should_play(&mut self) -> Vec<AudioCommand> {
        if self.state.muted {
            debug!("Music muted; deferring playback until unmuted");
            return Vec::new();
        }
        match self.phase {
            AudioPhase::Playing | AudioPhase::FadingIn => Vec::new(),
            AudioPhase::FadingOut => {
                info!(volume = self.state.volume, "Reversing fade-out from current volume");
                self.begin_ramp(self.settings.base_volume)
            }
            AudioPhase::Silent | AudioPhase::Muted => match self.pending.as_mut() {
                Some(pending) if pending.purpose == PlayPurpose::Probe => {
                    debug!(request_id = pending.id, "Upgrading unlock probe to fade-in");
                    pending.purpose = PlayPurpose::FadeIn;
                    Vec::new()
                }
                Some(_) => Vec::new(),
                None => vec![self.request_start(PlayPurpose::FadeIn, false)],
            },
        }
    }

    fn on_should_pause(&mut self) -> Vec<AudioCommand> {
        match self.phase {
            AudioPhase::Playing | AudioPhase::FadingIn => self.begin_ramp(0.0),
            _ => Vec::new(),
        }
    }

    pub fn toggle_mute(&mut self) -> Vec<AudioCommand> {
        if self.state.muted {
            self.unmute()
        } else {
            self.mute()
        }
    }

    fn mute(&mut self) -> Vec<AudioCommand> {
        if let Some(job) = self.ramp.cancel() {
            debug!(generation = job.generation, "Cancelled fade for mute");
        }
        if let Some(pending) = self.pending.take() {
            debug!(request_id = pending.id, "Abandoning pending start for mute");
        }
        self.state.volume = 0.0;
        self.state.muted = true;
        self.state.playing = false;
        self.phase = AudioPhase::Muted;
        info!("Music muted");
        vec![
            AudioCommand::SetVolume(0.0),
            AudioCommand::SetMuted(true),
            AudioCommand::Pause,
        ]
    }

    fn unmute(&mut self) -> Vec<AudioCommand> {
        self.state.muted = false;
        self.phase = AudioPhase::Silent;
        let mut commands = vec![AudioCommand::SetMuted(false)];
        if !self.wants_playback {
            info!("Music unmuted outside the interior pages; staying silent");
            return commands;
        }
        if self.state.volume <= RAMP_EPSILON {
            self.state.volume = self.settings.base_volume;
            commands.push(AudioCommand::SetVolume(self.settings.base_volume));
        }
        info!(volume = self.state.volume, "Music unmuted; resuming playback");
        commands.push(self.request_start(PlayPurpose::Resume, true));
        commands
    }

    /// A click, touch or key press anywhere in the viewer.
    pub fn on_user_gesture(&mut self) -> Vec<AudioCommand> {
        if !self.latch.transition(LatchEvent::Gesture) {
            return Vec::new();
        }
        if self.pending.is_some() {
            return Vec::new();
        }
        let purpose =
            if self.wants_playback && !self.state.muted && self.phase == AudioPhase::Silent {
                PlayPurpose::FadeIn
            } else {
                PlayPurpose::Probe
            };
        info!(?purpose, "Attempting audio unlock from user gesture");
        vec![self.request_start(purpose, true)]
    }

    pub fn on_start_resolved(
        &mut self,
        request_id: u64,
        outcome: StartOutcome,
    ) -> Vec<AudioCommand> {
        let accepted = outcome == StartOutcome::Accepted;
        self.latch.transition(if accepted {
            LatchEvent::StartAccepted
        } else {
            LatchEvent::StartRejected
        });

        let Some(pending) = self.pending.filter(|pending| pending.id == request_id) else {
            debug!(
                request_id,
                current = self.request_id,
                "Ignoring stale playback start"
            );
            return Vec::new();
        };
        self.pending = None;

        if !accepted {
            warn!(purpose = ?pending.purpose, "Playback not permitted yet; waiting for next gesture");
            self.state.playing = false;
            self.phase = if self.state.muted {
                AudioPhase::Muted
            } else {
                AudioPhase::Silent
            };
            if self.state.volume > 0.0 {
                self.state.volume = 0.0;
                return vec![AudioCommand::SetVolume(0.0)];
            }
            return Vec::new();
        }

        match pending.purpose {
            PlayPurpose::Probe => {
                if self.state.playing {
                    return Vec::new();
                }
                debug!("Audio unlocked");
                vec![AudioCommand::Pause, AudioCommand::Rewind]
            }
            _ if self.state.muted || !self.wants_playback => {
                debug!(purpose = ?pending.purpose, "Playback started after intent changed; pausing");
                self.state.playing = false;
                let mut commands = vec![AudioCommand::Pause];
                if self.state.volume > 0.0 {
                    self.state.volume = 0.0;
                    commands.push(AudioCommand::SetVolume(0.0));
                }
                commands
            }
            PlayPurpose::FadeIn => {
                self.state.playing = true;
                self.begin_ramp(self.settings.base_volume)
            }
            PlayPurpose::Resume => {
                self.state.playing = true;
                self.phase = AudioPhase::Playing;
                Vec::new()
            }
        }
    }

    /// Timer tick for the ramp with the given generation.
    pub fn on_tick(&mut self, generation: u64) -> Vec<AudioCommand> {
        match self
            .ramp
            .advance(generation, self.state.volume, self.settings.base_volume)
        {
            None => {
                trace!(generation, "Dropping tick for inactive ramp");
                Vec::new()
            }
            Some(RampStep::Continue(volume)) => {
                self.state.volume = volume;
                vec![AudioCommand::SetVolume(volume)]
            }
            Some(RampStep::Reached(target)) => self.finish_ramp(target),
        }
    }

    fn begin_ramp(&mut self, target: f32) -> Vec<AudioCommand> {
        let from = self.state.volume;
        if (from - target).abs() <= RAMP_EPSILON {
            self.ramp.cancel();
            return self.finish_ramp(target);
        }
        let job = self.ramp.replace(from, target, self.settings.step);
        self.phase = if target > from {
            AudioPhase::FadingIn
        } else {
            AudioPhase::FadingOut
        };
        debug!(
            generation = job.generation,
            from,
            target,
            direction = ?job.direction(),
            "Started fade"
        );
        Vec::new()
    }

    fn finish_ramp(&mut self, target: f32) -> Vec<AudioCommand> {
        self.state.volume = target;
        let mut commands = vec![AudioCommand::SetVolume(target)];
        if target <= 0.0 {
            self.state.playing = false;
            self.phase = AudioPhase::Silent;
            commands.push(AudioCommand::Pause);
            debug!("Fade-out complete; music paused");
        } else {
            self.phase = AudioPhase::Playing;
            debug!(volume = target, "Fade-in complete");
        }
        commands
    }

    fn request_start(&mut self, purpose: PlayPurpose, gesture: bool) -> AudioCommand {
        self.request_id = self.request_id.wrapping_add(1);
        let id = self.request_id;
        self.pending = Some(PendingStart { id, purpose });
        debug!(request_id = id, ?purpose, gesture, "Requesting playback start");
        AudioCommand::Start(PlayRequest {
            id,
            purpose,
            gesture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> AudioFadeController {
        AudioFadeController::new(FadeSettings::default(), BookLayout::default())
    }

    fn page(index: usize) -> PageIndex {
        PageIndex::new(index).expect("index in range")
    }

    fn start_request(commands: &[AudioCommand]) -> PlayRequest {
        commands
            .iter()
            .find_map(|command| match command {
                AudioCommand::Start(request) => Some(*request),
                _ => None,
            })
            .expect("a start request")
    }

    fn accept(audio: &mut AudioFadeController, commands: &[AudioCommand]) -> Vec<AudioCommand> {
        let request = start_request(commands);
        audio.on_start_resolved(request.id, StartOutcome::Accepted)
    }

    /// Tick the active ramp to completion; returns the number of ticks and
    /// the volume seen after each one.
    fn run_ramp(audio: &mut AudioFadeController) -> (u32, Vec<f32>) {
        let mut ticks = 0;
        let mut volumes = Vec::new();
        while let Some(job) = audio.active_ramp() {
            audio.on_tick(job.generation);
            ticks += 1;
            volumes.push(audio.state().volume);
            assert!(ticks <= 100, "ramp did not terminate");
        }
        (ticks, volumes)
    }

    fn playing_at_base(audio: &mut AudioFadeController) {
        let commands = audio.on_page_changed(page(1));
        accept(audio, &commands);
        run_ramp(audio);
        assert_eq!(audio.phase(), AudioPhase::Playing);
    }

    #[test]
    fn fade_in_is_monotonic_and_bounded() {
        let mut audio = controller();
        let commands = audio.on_page_changed(page(1));
        accept(&mut audio, &commands);
        assert_eq!(audio.phase(), AudioPhase::FadingIn);

        let (ticks, volumes) = run_ramp(&mut audio);
        assert!(ticks <= audio.settings().max_ramp_ticks());
        assert!(volumes.windows(2).all(|pair| pair[1] > pair[0]));
        assert_eq!(audio.state().volume, DEFAULT_BASE_VOLUME);
        assert_eq!(audio.phase(), AudioPhase::Playing);
    }

    #[test]
    fn quieter_base_volume_ends_exactly_on_target() {
        let settings = FadeSettings {
            base_volume: QUIET_BASE_VOLUME,
            ..FadeSettings::default()
        };
        let mut audio = AudioFadeController::new(settings, BookLayout::default());
        let commands = audio.on_page_changed(page(2));
        accept(&mut audio, &commands);
        let (ticks, volumes) = run_ramp(&mut audio);
        assert_eq!(ticks, settings.max_ramp_ticks());
        assert!(volumes.iter().all(|v| *v <= QUIET_BASE_VOLUME));
        assert_eq!(audio.state().volume, QUIET_BASE_VOLUME);
    }

    #[test]
    fn should_play_while_playing_is_a_no_op() {
        let mut audio = controller();
        playing_at_base(&mut audio);
        assert!(audio.on_page_changed(page(2)).is_empty());
        assert!(audio.active_ramp().is_none());
        assert!(!audio.has_pending_start());
    }

    #[test]
    fn full_walk_through_the_book() {
        let mut audio = controller();
        assert!(audio.on_page_changed(page(0)).is_empty());
        assert_eq!(audio.phase(), AudioPhase::Silent);

        let commands = audio.on_page_changed(page(1));
        assert_eq!(audio.phase(), AudioPhase::Silent);
        accept(&mut audio, &commands);
        assert_eq!(audio.phase(), AudioPhase::FadingIn);
        run_ramp(&mut audio);
        assert_eq!(audio.phase(), AudioPhase::Playing);

        assert!(audio.on_page_changed(page(2)).is_empty());
        assert_eq!(audio.state().volume, DEFAULT_BASE_VOLUME);

        audio.on_page_changed(page(3));
        assert_eq!(audio.phase(), AudioPhase::FadingOut);
        let (_, volumes) = run_ramp(&mut audio);
        assert!(volumes.windows(2).all(|pair| pair[1] < pair[0]));
        assert_eq!(audio.phase(), AudioPhase::Silent);
        assert_eq!(audio.state().volume, 0.0);
        assert!(!audio.state().playing);
    }

    #[test]
    fn fade_out_completion_pauses_playback() {
        let mut audio = controller();
        playing_at_base(&mut audio);
        audio.on_page_changed(page(0));
        let mut last = Vec::new();
        while let Some(job) = audio.active_ramp() {
            last = audio.on_tick(job.generation);
        }
        assert_eq!(last, vec![AudioCommand::SetVolume(0.0), AudioCommand::Pause]);
    }

    #[test]
    fn mute_during_fade_in_silences_immediately() {
        let mut audio = controller();
        let commands = audio.on_page_changed(page(1));
        accept(&mut audio, &commands);
        for _ in 0..5 {
            let job = audio.active_ramp().expect("fade running");
            audio.on_tick(job.generation);
        }
        assert!((audio.state().volume - 0.2).abs() < 1e-4);

        let commands = audio.toggle_mute();
        assert_eq!(
            commands,
            vec![
                AudioCommand::SetVolume(0.0),
                AudioCommand::SetMuted(true),
                AudioCommand::Pause
            ]
        );
        assert_eq!(audio.phase(), AudioPhase::Muted);
        assert_eq!(audio.state().volume, 0.0);
        assert!(!audio.state().playing);
        assert!(audio.active_ramp().is_none());
    }

    #[test]
    fn stale_tick_after_mute_is_ignored() {
        let mut audio = controller();
        let commands = audio.on_page_changed(page(1));
        accept(&mut audio, &commands);
        let job = audio.active_ramp().expect("fade running");
        audio.toggle_mute();
        assert!(audio.on_tick(job.generation).is_empty());
        assert_eq!(audio.state().volume, 0.0);
    }

    #[test]
    fn muted_interior_page_does_not_start_playback() {
        let mut audio = controller();
        audio.toggle_mute();
        assert!(audio.on_page_changed(page(1)).is_empty());
        assert_eq!(audio.phase(), AudioPhase::Muted);
        assert!(audio.active_ramp().is_none());
    }

    #[test]
    fn unmute_on_interior_page_resumes_at_base_volume() {
        let mut audio = controller();
        playing_at_base(&mut audio);
        audio.on_page_changed(page(2));
        audio.toggle_mute();

        let commands = audio.toggle_mute();
        assert_eq!(commands[0], AudioCommand::SetMuted(false));
        assert_eq!(commands[1], AudioCommand::SetVolume(DEFAULT_BASE_VOLUME));
        let request = start_request(&commands);
        assert_eq!(request.purpose, PlayPurpose::Resume);
        assert!(request.gesture);

        assert!(accept(&mut audio, &commands).is_empty());
        assert_eq!(audio.phase(), AudioPhase::Playing);
        assert_eq!(audio.state().volume, DEFAULT_BASE_VOLUME);
        assert!(audio.state().playing);
        assert!(audio.active_ramp().is_none());
    }

    #[test]
    fn unmute_on_cover_stays_silent() {
        let mut audio = controller();
        audio.toggle_mute();
        audio.on_page_changed(page(0));
        assert_eq!(audio.toggle_mute(), vec![AudioCommand::SetMuted(false)]);
        assert_eq!(audio.phase(), AudioPhase::Silent);
        assert_eq!(audio.mute_button().icon, "🔊");
    }

    #[test]
    fn rejected_start_never_claims_playback() {
        let mut audio = controller();
        let commands = audio.on_page_changed(page(1));
        let request = start_request(&commands);
        audio.on_start_resolved(request.id, StartOutcome::Rejected);
        assert_eq!(audio.phase(), AudioPhase::Silent);
        assert!(!audio.state().playing);
        assert!(audio.active_ramp().is_none());
        assert_eq!(audio.latch(), PermissionLatch::Locked);
    }

    #[test]
    fn gesture_after_rejection_retries_with_fade_in() {
        let mut audio = controller();
        let commands = audio.on_page_changed(page(1));
        let request = start_request(&commands);
        audio.on_start_resolved(request.id, StartOutcome::Rejected);

        let commands = audio.on_user_gesture();
        let retry = start_request(&commands);
        assert_eq!(retry.purpose, PlayPurpose::FadeIn);
        assert!(retry.gesture);
        accept(&mut audio, &commands);
        assert_eq!(audio.phase(), AudioPhase::FadingIn);
        assert!(audio.latch().is_unlocked());
        assert!(audio.on_user_gesture().is_empty());
    }

    #[test]
    fn probe_pauses_and_rewinds_on_success() {
        let mut audio = controller();
        let commands = audio.on_user_gesture();
        assert_eq!(start_request(&commands).purpose, PlayPurpose::Probe);
        assert_eq!(
            accept(&mut audio, &commands),
            vec![AudioCommand::Pause, AudioCommand::Rewind]
        );
        assert_eq!(audio.phase(), AudioPhase::Silent);
    }

    #[test]
    fn pending_probe_is_upgraded_by_interior_page() {
        let mut audio = controller();
        let probe = audio.on_user_gesture();
        assert!(audio.on_page_changed(page(1)).is_empty());
        accept(&mut audio, &probe);
        assert_eq!(audio.phase(), AudioPhase::FadingIn);
    }

    #[test]
    fn start_resolving_after_leaving_interior_is_paused() {
        let mut audio = controller();
        let commands = audio.on_page_changed(page(1));
        audio.on_page_changed(page(0));
        assert_eq!(accept(&mut audio, &commands), vec![AudioCommand::Pause]);
        assert_eq!(audio.phase(), AudioPhase::Silent);
        assert!(!audio.state().playing);
    }

    #[test]
    fn start_abandoned_by_mute_is_stale() {
        let mut audio = controller();
        let commands = audio.on_page_changed(page(1));
        audio.toggle_mute();
        assert!(accept(&mut audio, &commands).is_empty());
        assert_eq!(audio.phase(), AudioPhase::Muted);
    }

    #[test]
    fn interior_signal_reverses_fade_out() {
        let mut audio = controller();
        playing_at_base(&mut audio);
        audio.on_page_changed(page(3));
        let fade_out = audio.active_ramp().expect("fading out");
        for _ in 0..3 {
            audio.on_tick(fade_out.generation);
        }
        let partial = audio.state().volume;
        assert!(partial < DEFAULT_BASE_VOLUME && partial > 0.0);

        assert!(audio.on_page_changed(page(2)).is_empty());
        assert_eq!(audio.phase(), AudioPhase::FadingIn);
        let fade_in = audio.active_ramp().expect("fading in");
        assert_ne!(fade_in.generation, fade_out.generation);
        assert!(audio.on_tick(fade_out.generation).is_empty());

        run_ramp(&mut audio);
        assert_eq!(audio.phase(), AudioPhase::Playing);
        assert_eq!(audio.state().volume, DEFAULT_BASE_VOLUME);
    }

    #[test]
    fn mute_button_reflects_preference() {
        assert_eq!(mute_button(false).icon, "🔊");
        assert_eq!(mute_button(true).icon, "🔇");
        assert_eq!(mute_button(true).label, "Activer le son");
    }
}
