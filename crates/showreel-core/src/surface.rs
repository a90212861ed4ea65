//! Control surface abstraction.
//!
//! The controller never touches the DOM directly. It pushes state into a
//! [`ControlSurface`], which on the web swaps icon markup, toggles styles and
//! classes, and answers hover queries.

use crate::media::VolumeState;
use crate::state::PlaybackPhase;

/// Glyph shown on the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    /// Paused: offer to play.
    Play,
    /// Playing: offer to pause.
    Pause,
    /// Ended: offer to start over.
    Replay,
}

impl PlayIcon {
    /// Icon glyph name (Font Awesome suffix).
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Replay => "replay",
        }
    }
}

/// Glyph shown on the volume button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    /// Audible.
    Up,
    /// Muted or zero volume.
    Muted,
}

impl VolumeIcon {
    /// Picks the icon for a volume state.
    pub fn for_state(state: VolumeState) -> Self {
        if state.is_silent() {
            Self::Muted
        } else {
            Self::Up
        }
    }

    /// Icon glyph name.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "volume-up",
            Self::Muted => "volume-mute",
        }
    }
}

/// Glyph shown on the fullscreen button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    /// Windowed: offer to expand.
    Expand,
    /// Fullscreen: offer to compress.
    Compress,
}

impl FullscreenIcon {
    /// Picks the icon for the document's fullscreen state.
    pub fn for_fullscreen(is_fullscreen: bool) -> Self {
        if is_fullscreen {
            Self::Compress
        } else {
            Self::Expand
        }
    }

    /// Icon glyph name.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Expand => "expand",
            Self::Compress => "compress",
        }
    }
}

/// Visible affordances that mirror playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackView {
    /// Play button glyph.
    pub icon: PlayIcon,
    /// Whether the click-to-play overlay is shown.
    pub overlay_visible: bool,
    /// Whether the wrapper carries the `playing` marker.
    pub playing: bool,
}

impl PlaybackView {
    /// The one view each phase must present.
    pub fn for_phase(phase: PlaybackPhase) -> Self {
        match phase {
            PlaybackPhase::Playing => Self {
                icon: PlayIcon::Pause,
                overlay_visible: false,
                playing: true,
            },
            PlaybackPhase::Ended => Self {
                icon: PlayIcon::Replay,
                overlay_visible: true,
                playing: false,
            },
            PlaybackPhase::Paused | PlaybackPhase::Uninitialized => Self {
                icon: PlayIcon::Play,
                overlay_visible: true,
                playing: false,
            },
        }
    }
}

/// UI sink driven by the controller.
///
/// Implementations must tolerate missing parts: if an element backing a
/// method is absent, the method does nothing.
pub trait ControlSurface {
    /// Applies the play icon, overlay visibility and playing marker.
    fn show_playback(&mut self, view: PlaybackView);

    /// Shows or hides the control bar.
    fn set_controls_visible(&mut self, visible: bool);

    /// Renders the progress fill (0-100) and the time label.
    fn show_progress(&mut self, percent: f64, label: &str);

    /// Swaps the volume glyph.
    fn show_volume_icon(&mut self, icon: VolumeIcon);

    /// Moves the volume slider thumb.
    fn set_volume_slider(&mut self, value: f64);

    /// Swaps the fullscreen glyph.
    fn show_fullscreen_icon(&mut self, icon: FullscreenIcon);

    /// Returns true while the pointer hovers the player container.
    fn pointer_over_player(&self) -> bool;
}
