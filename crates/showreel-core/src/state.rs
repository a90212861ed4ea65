//! Playback state tracking.
//!
//! ```text
//! Uninitialized ──initialize──► Paused ◄──pause/error──► Playing
//!                                  ▲                        │
//!                                  │                     ended
//!                                  └──── replay ◄── Ended ◄─┘
//! ```
//!
//! An error returns to `Paused` without touching the playback position.

/// Coarse playback phase reflected by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// The controller has not bound to its media element yet.
    #[default]
    Uninitialized,
    /// Paused, including the state after a failed play or a media error.
    Paused,
    /// Playing after a successful play.
    Playing,
    /// Playback reached the end; the surface offers replay.
    Ended,
}

/// Identifies one play request.
///
/// Tokens increase monotonically so a late settlement can be matched against
/// the request the controller is still waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayAttempt(u64);

impl PlayAttempt {
    /// Raw sequence number.
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Ephemeral state owned by one controller instance.
#[derive(Debug, Default)]
pub struct PlaybackState {
    phase: PlaybackPhase,
    initialized: bool,
    next_attempt: u64,
    pending_play: Option<PlayAttempt>,
}

impl PlaybackState {
    /// Creates an uninitialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// Returns true iff the last settled command was a successful play.
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// Returns true once [`mark_initialized`](Self::mark_initialized) succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Marks the state initialized and enters `Paused`.
    ///
    /// Returns false (and changes nothing) if it was already initialized.
    pub fn mark_initialized(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.phase = PlaybackPhase::Paused;
        true
    }

    /// Registers a new play request, superseding any earlier one.
    pub fn begin_play(&mut self) -> PlayAttempt {
        self.next_attempt += 1;
        let attempt = PlayAttempt(self.next_attempt);
        self.pending_play = Some(attempt);
        attempt
    }

    /// Play request still awaiting settlement.
    pub fn pending_play(&self) -> Option<PlayAttempt> {
        self.pending_play
    }

    /// Consumes the pending request if `attempt` is it.
    ///
    /// Returns false for stale attempts, which callers must ignore.
    pub fn settle_play(&mut self, attempt: PlayAttempt) -> bool {
        if self.pending_play == Some(attempt) {
            self.pending_play = None;
            true
        } else {
            false
        }
    }

    /// Enters `phase`, invalidating any pending play unless entering `Playing`.
    pub fn enter(&mut self, phase: PlaybackPhase) {
        if phase != PlaybackPhase::Playing {
            self.pending_play = None;
        }
        self.phase = phase;
    }
}
