//! In-memory stand-ins for the browser seams.

#![allow(dead_code)]

use std::time::Duration;

use showreel_core::{
    ControlSurface, FullscreenIcon, MediaElement, NotificationKind, Notifier, PlayAttempt,
    PendingCommand, PlaybackController, PlaybackView, PlayerConfig, PlayerError, Result,
    TimerHost, TimerId, VolumeIcon,
};

/// Media element whose state tests set directly.
#[derive(Debug)]
pub struct FakeMedia {
    pub paused: bool,
    pub current_time: f64,
    /// Host duration; `None` reads as `NaN`.
    pub duration: Option<f64>,
    pub volume: f64,
    pub muted: bool,
    pub fullscreen: bool,
    pub error_code: Option<u16>,
    pub source: Option<String>,
    /// When set, `play()` fails synchronously with this message.
    pub refuse_play: Option<String>,
    /// When set, fullscreen calls fail synchronously with this message.
    pub refuse_fullscreen: Option<String>,
    pub play_calls: usize,
    pub seeks: Vec<f64>,
    pub fullscreen_requests: usize,
    pub fullscreen_exits: usize,
}

impl Default for FakeMedia {
    fn default() -> Self {
        Self {
            paused: true,
            current_time: 0.0,
            duration: Some(190.0),
            volume: 0.8,
            muted: false,
            fullscreen: false,
            error_code: None,
            source: Some("media/promo.mp4".to_string()),
            refuse_play: None,
            refuse_fullscreen: None,
            play_calls: 0,
            seeks: Vec::new(),
            fullscreen_requests: 0,
            fullscreen_exits: 0,
        }
    }
}

impl MediaElement for FakeMedia {
    type Pending = ();

    fn play(&mut self) -> Result<()> {
        self.play_calls += 1;
        if let Some(reason) = &self.refuse_play {
            return Err(PlayerError::PlayRejected(reason.clone()));
        }
        // Browsers clear `paused` as soon as play() is called.
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn seek_to(&mut self, seconds: f64) {
        self.seeks.push(seconds);
        self.current_time = seconds;
    }

    fn set_volume(&mut self, fraction: f64) {
        self.volume = fraction;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        self.fullscreen_requests += 1;
        match &self.refuse_fullscreen {
            Some(reason) => Err(PlayerError::Fullscreen(reason.clone())),
            None => Ok(()),
        }
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.fullscreen_exits += 1;
        match &self.refuse_fullscreen {
            Some(reason) => Err(PlayerError::Fullscreen(reason.clone())),
            None => Ok(()),
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn raw_duration(&self) -> f64 {
        self.duration.unwrap_or(f64::NAN)
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn error_code(&self) -> Option<u16> {
        self.error_code
    }

    fn source(&self) -> Option<String> {
        self.source.clone()
    }
}

/// Surface recording the last value pushed into each affordance.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub view: Option<PlaybackView>,
    pub controls_visible: Option<bool>,
    pub progress: Option<(f64, String)>,
    pub volume_icon: Option<VolumeIcon>,
    pub volume_slider: Option<f64>,
    pub fullscreen_icon: Option<FullscreenIcon>,
    pub hovering: bool,
    pub playback_renders: usize,
}

impl ControlSurface for FakeSurface {
    fn show_playback(&mut self, view: PlaybackView) {
        self.playback_renders += 1;
        self.view = Some(view);
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = Some(visible);
    }

    fn show_progress(&mut self, percent: f64, label: &str) {
        self.progress = Some((percent, label.to_string()));
    }

    fn show_volume_icon(&mut self, icon: VolumeIcon) {
        self.volume_icon = Some(icon);
    }

    fn set_volume_slider(&mut self, value: f64) {
        self.volume_slider = Some(value);
    }

    fn show_fullscreen_icon(&mut self, icon: FullscreenIcon) {
        self.fullscreen_icon = Some(icon);
    }

    fn pointer_over_player(&self) -> bool {
        self.hovering
    }
}

/// Timer host driven by a manual clock.
#[derive(Debug, Default)]
pub struct ManualTimers {
    now: Duration,
    next_id: u64,
    scheduled: Vec<(TimerId, Duration)>,
    pub cancelled: Vec<TimerId>,
}

impl ManualTimers {
    /// Moves the clock forward and returns the ids that came due, in order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<(TimerId, Duration)> = self
            .scheduled
            .iter()
            .copied()
            .filter(|(_, deadline)| *deadline <= now)
            .collect();
        self.scheduled.retain(|(_, deadline)| *deadline > now);
        due.sort_by_key(|(_, deadline)| *deadline);
        due.into_iter().map(|(id, _)| id).collect()
    }

    /// Number of timers still scheduled.
    pub fn pending(&self) -> usize {
        self.scheduled.len()
    }
}

impl TimerHost for ManualTimers {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.scheduled.push((id, self.now + delay));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.cancelled.push(id);
        self.scheduled.retain(|(scheduled, _)| *scheduled != id);
    }
}

/// Notifier collecting every message.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(String, NotificationKind)>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.messages.push((message.to_string(), kind));
    }
}

pub type TestController = PlaybackController<FakeMedia, FakeSurface, ManualTimers, RecordingNotifier>;

/// Builds an initialized controller over a fresh fake media element.
pub fn controller() -> TestController {
    controller_with(FakeMedia::default(), PlayerConfig::default())
}

/// Builds an initialized controller over the given media and config.
pub fn controller_with(media: FakeMedia, config: PlayerConfig) -> TestController {
    let mut controller = PlaybackController::new(
        media,
        FakeSurface::default(),
        ManualTimers::default(),
        RecordingNotifier::default(),
        config,
    );
    assert!(controller.initialize());
    controller
}

/// Advances the manual clock and delivers due timers to the controller.
pub fn advance(controller: &mut TestController, millis: u64) {
    let fired = controller
        .timers_mut()
        .advance(Duration::from_millis(millis));
    for id in fired {
        controller.on_timer_elapsed(id);
    }
}

/// Issues a toggle that must produce a play request.
pub fn request_play(controller: &mut TestController) -> PlayAttempt {
    match controller.toggle_play() {
        PendingCommand::Play { attempt, .. } => attempt,
        other => panic!("expected a play request, got {other:?}"),
    }
}

/// Toggles to play and resolves the request successfully.
pub fn start_playing(controller: &mut TestController) {
    let attempt = request_play(controller);
    controller.play_settled(attempt, Ok(()));
}
