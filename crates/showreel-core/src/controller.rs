//! Headless playback controller.
//!
//! [`PlaybackController`] binds one [`MediaElement`] to a [`ControlSurface`].
//! Host event handlers call its methods; it issues commands to the media
//! element, tracks [`PlaybackState`], and reflects that state back into the
//! surface. It owns no DOM and no event loop, so it runs unchanged under the
//! browser bindings and under the in-memory fakes used by the tests.
//!
//! # Asynchronous commands
//!
//! Play and fullscreen complete later. Methods issuing them return a
//! [`PendingCommand`] carrying the host's pending handle; the caller drives it
//! and reports back through [`play_settled`](PlaybackController::play_settled)
//! or [`fullscreen_failed`](PlaybackController::fullscreen_failed). Each play
//! carries a [`PlayAttempt`] token, and a settlement for anything but the
//! current attempt is dropped, so a pause issued while a play is in flight
//! always wins.

use tracing::{debug, error, info, warn};

use crate::auto_hide::{AutoHideTimer, TimerHost, TimerId};
use crate::config::PlayerConfig;
use crate::error::{PlayerError, Result};
use crate::keyboard::{skip_target, ShortcutKey};
use crate::media::{MediaElement, MediaErrorCode, MediaPosition};
use crate::notify::{NotificationKind, Notifier};
use crate::progress::{format_progress_label, progress_percent, seek_fraction};
use crate::state::{PlayAttempt, PlaybackPhase, PlaybackState};
use crate::surface::{ControlSurface, FullscreenIcon, PlaybackView, VolumeIcon};

/// An asynchronous command the caller must drive to completion.
#[must_use = "pending commands must be driven and their outcome reported back"]
#[derive(Debug)]
pub enum PendingCommand<P> {
    /// Nothing to await.
    None,
    /// A play request; report the outcome with `play_settled(attempt, ..)`.
    Play {
        /// Token to hand back on settlement.
        attempt: PlayAttempt,
        /// Host handle for the request.
        pending: P,
    },
    /// A fullscreen request or exit; report failures with `fullscreen_failed`.
    Fullscreen(P),
}

impl<P> PendingCommand<P> {
    /// Returns true if there is nothing to await.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Media playback controller for one player.
pub struct PlaybackController<M, S, T, N> {
    media: M,
    surface: S,
    timers: T,
    notifier: N,
    config: PlayerConfig,
    state: PlaybackState,
    auto_hide: AutoHideTimer,
}

impl<M, S, T, N> PlaybackController<M, S, T, N>
where
    M: MediaElement,
    S: ControlSurface,
    T: TimerHost,
    N: Notifier,
{
    /// Creates an uninitialized controller.
    ///
    /// Nothing is touched until [`initialize`](Self::initialize).
    pub fn new(media: M, surface: S, timers: T, notifier: N, config: PlayerConfig) -> Self {
        let auto_hide = AutoHideTimer::new(config.hide_delay());
        Self {
            media,
            surface,
            timers,
            notifier,
            config,
            state: PlaybackState::new(),
            auto_hide,
        }
    }

    /// Binds to the media element and renders the initial UI.
    ///
    /// Returns false without side effects if already initialized, so callers
    /// attach their event listeners only when this returns true.
    pub fn initialize(&mut self) -> bool {
        if !self.state.mark_initialized() {
            debug!("video player already initialized, skipping");
            return false;
        }

        let volume = self.config.initial_volume;
        self.media.set_volume(volume);
        self.surface.set_volume_slider(volume);

        if self.media.is_paused() {
            self.enter(PlaybackPhase::Paused);
            self.surface.set_controls_visible(true);
        } else {
            // Autoplay started before we bound.
            self.enter(PlaybackPhase::Playing);
            self.hide_controls_after_delay();
        }

        self.sync_volume_icon();
        self.on_fullscreen_change();
        self.update_progress();

        info!(source = ?self.media.source(), "video player initialized");
        true
    }

    /// Playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase()
    }

    /// Controller configuration.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// The media element.
    pub fn media(&self) -> &M {
        &self.media
    }

    /// The media element, mutably.
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// The control surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The control surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The timer host.
    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// The timer host, mutably.
    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// The notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns true while an auto-hide is scheduled.
    pub fn is_auto_hide_armed(&self) -> bool {
        self.auto_hide.is_armed()
    }

    // ------------------------------------------------------------------
    // Play / pause
    // ------------------------------------------------------------------

    /// Plays if paused, pauses otherwise.
    pub fn toggle_play(&mut self) -> PendingCommand<M::Pending> {
        debug!(paused = self.media.is_paused(), "toggle play");
        if self.media.is_paused() {
            self.start_play()
        } else {
            self.pause();
            PendingCommand::None
        }
    }

    fn start_play(&mut self) -> PendingCommand<M::Pending> {
        let attempt = self.state.begin_play();
        debug!(attempt = attempt.sequence(), "requesting playback");
        match self.media.play() {
            Ok(pending) => PendingCommand::Play { attempt, pending },
            Err(err) => {
                self.play_settled(attempt, Err(err));
                PendingCommand::None
            }
        }
    }

    fn pause(&mut self) {
        self.media.pause();
        self.enter(PlaybackPhase::Paused);
        self.auto_hide.cancel(&mut self.timers);
        self.surface.set_controls_visible(true);
        debug!("playback paused");
    }

    /// Reports the outcome of a play request.
    ///
    /// Outcomes for superseded attempts are ignored.
    pub fn play_settled(&mut self, attempt: PlayAttempt, outcome: Result<()>) {
        if !self.state.settle_play(attempt) {
            debug!(
                attempt = attempt.sequence(),
                ok = outcome.is_ok(),
                "ignoring stale play settlement"
            );
            return;
        }

        match outcome {
            Ok(()) => {
                info!(attempt = attempt.sequence(), "video playing");
                self.enter(PlaybackPhase::Playing);
                self.hide_controls_after_delay();
            }
            Err(err) => {
                warn!(attempt = attempt.sequence(), %err, "playback rejected");
                let phase = match self.state.phase() {
                    PlaybackPhase::Ended => PlaybackPhase::Ended,
                    _ => PlaybackPhase::Paused,
                };
                self.enter(phase);
                self.auto_hide.cancel(&mut self.timers);
                self.surface.set_controls_visible(true);
                let message = self.config.messages.play_failed(&err.to_string());
                self.notifier.notify(&message, NotificationKind::Error);
            }
        }
    }

    // ------------------------------------------------------------------
    // Progress
    // ------------------------------------------------------------------

    /// Renders the progress fill and time label. No-op until the duration is
    /// known.
    pub fn update_progress(&mut self) {
        let MediaPosition {
            current_time,
            duration: Some(duration),
        } = self.media.position()
        else {
            return;
        };
        let percent = progress_percent(current_time, duration);
        let label = format_progress_label(current_time, duration);
        self.surface.show_progress(percent, &label);
    }

    /// Seeks to the position under a pointer on the progress bar.
    ///
    /// `bar_left` and `bar_width` describe the bar's bounding box in the same
    /// coordinate space as `pointer_x`.
    pub fn set_progress(&mut self, pointer_x: f64, bar_left: f64, bar_width: f64) {
        let Some(duration) = self.media.duration() else {
            return;
        };
        let Some(pos) = seek_fraction(
            pointer_x,
            bar_left,
            bar_width,
            self.config.clamp_progress_seek,
        ) else {
            return;
        };
        let target = pos * duration;
        debug!(pos, target, "seeking from progress bar");
        self.media.seek_to(target);
    }

    /// Metadata arrived; the duration may now be known.
    pub fn on_metadata_loaded(&mut self) {
        debug!(duration = ?self.media.duration(), "video metadata loaded");
        self.update_progress();
    }

    // ------------------------------------------------------------------
    // Volume
    // ------------------------------------------------------------------

    /// Flips the muted flag.
    pub fn toggle_mute(&mut self) {
        let muted = !self.media.is_muted();
        self.media.set_muted(muted);
        self.sync_volume_icon();
    }

    /// Applies a volume slider value.
    ///
    /// The value is passed through unclamped; mute is set iff the resulting
    /// volume is exactly zero.
    pub fn change_volume(&mut self, value: f64) {
        self.media.set_volume(value);
        let silent = self.media.volume() == 0.0;
        self.media.set_muted(silent);
        self.sync_volume_icon();
    }

    fn sync_volume_icon(&mut self) {
        let icon = VolumeIcon::for_state(self.media.volume_state());
        self.surface.show_volume_icon(icon);
    }

    // ------------------------------------------------------------------
    // Fullscreen
    // ------------------------------------------------------------------

    /// Enters fullscreen if nothing is fullscreen, leaves it otherwise.
    pub fn toggle_fullscreen(&mut self) -> PendingCommand<M::Pending> {
        let request = if self.media.is_fullscreen() {
            self.media.exit_fullscreen()
        } else {
            self.media.request_fullscreen()
        };
        match request {
            Ok(pending) => PendingCommand::Fullscreen(pending),
            Err(err) => {
                self.fullscreen_failed(err);
                PendingCommand::None
            }
        }
    }

    /// Reports a failed fullscreen transition. Logged only.
    pub fn fullscreen_failed(&mut self, err: PlayerError) {
        warn!(%err, "fullscreen transition failed");
    }

    /// The document's fullscreen state changed, from any cause.
    pub fn on_fullscreen_change(&mut self) {
        let icon = FullscreenIcon::for_fullscreen(self.media.is_fullscreen());
        self.surface.show_fullscreen_icon(icon);
    }

    // ------------------------------------------------------------------
    // Control bar visibility
    // ------------------------------------------------------------------

    /// Shows the controls and, while playing, schedules hiding them after the
    /// configured inactivity delay.
    pub fn hide_controls_after_delay(&mut self) {
        self.auto_hide.cancel(&mut self.timers);
        self.surface.set_controls_visible(true);
        if self.state.is_playing() {
            self.auto_hide.rearm(&mut self.timers);
        }
    }

    /// A host timer elapsed.
    pub fn on_timer_elapsed(&mut self, id: TimerId) {
        if !self.auto_hide.claim(id) {
            debug!(?id, "ignoring stale hide timer");
            return;
        }
        if self.state.is_playing() && !self.surface.pointer_over_player() {
            self.surface.set_controls_visible(false);
        }
    }

    /// Pointer entered the player.
    pub fn on_pointer_enter(&mut self) {
        if self.state.is_playing() {
            self.hide_controls_after_delay();
        } else {
            self.auto_hide.cancel(&mut self.timers);
            self.surface.set_controls_visible(true);
        }
    }

    /// Pointer moved over the player.
    pub fn on_pointer_move(&mut self) {
        if self.state.is_playing() {
            self.hide_controls_after_delay();
        }
    }

    /// Pointer left the player.
    pub fn on_pointer_leave(&mut self) {
        if self.state.is_playing() {
            self.hide_controls_after_delay();
        }
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Applies a keyboard shortcut.
    pub fn handle_key(&mut self, key: ShortcutKey) -> PendingCommand<M::Pending> {
        let step = self.config.seek_step_secs;
        match key {
            ShortcutKey::TogglePlay => return self.toggle_play(),
            ShortcutKey::SeekBack => self.seek_by(-step),
            ShortcutKey::SeekForward => self.seek_by(step),
            ShortcutKey::ToggleMute => self.toggle_mute(),
        }
        PendingCommand::None
    }

    /// Seeks relative to the current position, clamped to `[0, duration]`.
    pub fn seek_by(&mut self, delta: f64) {
        let target = skip_target(self.media.current_time(), self.media.raw_duration(), delta);
        self.media.seek_to(target);
    }

    // ------------------------------------------------------------------
    // Media element events
    // ------------------------------------------------------------------

    /// Playback reached the end.
    pub fn on_ended(&mut self) {
        info!("video ended");
        self.enter(PlaybackPhase::Ended);
        self.auto_hide.cancel(&mut self.timers);
        self.surface.set_controls_visible(true);
    }

    /// The element failed to load or decode its source.
    pub fn on_media_error(&mut self) {
        let code = self.media.error_code().map(MediaErrorCode::from_code);
        let source = self.media.source();
        let err = PlayerError::Media { code };
        error!(%err, source = ?source, "video failed to load");

        let message = self.config.messages.load_failed(source.as_deref());
        self.notifier.notify(&message, NotificationKind::Error);

        self.enter(PlaybackPhase::Paused);
        self.auto_hide.cancel(&mut self.timers);
        self.surface.set_controls_visible(true);
    }

    /// The element reports it is playing.
    ///
    /// Only acts on playback started outside the controller (media keys,
    /// browser UI); our own requests are handled by `play_settled`.
    pub fn on_media_playing(&mut self) {
        if self.state.is_playing() || self.state.pending_play().is_some() {
            return;
        }
        debug!("playback started by the host");
        self.enter(PlaybackPhase::Playing);
        self.hide_controls_after_delay();
    }

    /// The element reports it paused.
    pub fn on_media_paused(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        debug!("playback paused by the host");
        self.enter(PlaybackPhase::Paused);
        self.auto_hide.cancel(&mut self.timers);
        self.surface.set_controls_visible(true);
    }

    fn enter(&mut self, phase: PlaybackPhase) {
        self.state.enter(phase);
        self.surface.show_playback(PlaybackView::for_phase(phase));
    }
}

impl<M, S, T, N> std::fmt::Debug for PlaybackController<M, S, T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("auto_hide", &self.auto_hide)
            .finish_non_exhaustive()
    }
}
