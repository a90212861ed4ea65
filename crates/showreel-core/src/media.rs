//! Media element abstraction.
//!
//! [`MediaElement`] is the capability contract the controller needs from the
//! host's playable media object. On the web it is implemented over
//! `HtmlVideoElement`; tests substitute an in-memory fake.

use std::fmt;

use crate::error::Result;

/// Commands and queries the controller issues against a media element.
///
/// Asynchronous commands (play, fullscreen) return a host-specific
/// [`Pending`](MediaElement::Pending) handle. The controller never awaits it;
/// it hands the handle back to the caller, which drives it to completion and
/// reports the outcome through
/// [`PlaybackController::play_settled`](crate::PlaybackController::play_settled)
/// or [`PlaybackController::fullscreen_failed`](crate::PlaybackController::fullscreen_failed).
pub trait MediaElement {
    /// In-flight asynchronous command (a JS promise in the browser).
    type Pending;

    /// Starts or resumes playback.
    ///
    /// An `Err` means the host refused synchronously and is treated exactly
    /// like an asynchronous rejection.
    fn play(&mut self) -> Result<Self::Pending>;

    /// Pauses playback. Always synchronous.
    fn pause(&mut self);

    /// Sets the current playback position in seconds.
    fn seek_to(&mut self, seconds: f64);

    /// Sets the volume as a fraction in `[0, 1]`.
    fn set_volume(&mut self, fraction: f64);

    /// Sets the muted flag.
    fn set_muted(&mut self, muted: bool);

    /// Requests fullscreen for the player container.
    fn request_fullscreen(&mut self) -> Result<Self::Pending>;

    /// Leaves fullscreen.
    fn exit_fullscreen(&mut self) -> Result<Self::Pending>;

    /// Returns true if some element is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Returns true if the element is paused.
    fn is_paused(&self) -> bool;

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Duration as reported by the host: `NaN` before metadata loads,
    /// `+Infinity` for unbounded streams.
    fn raw_duration(&self) -> f64;

    /// Total duration in seconds, `None` before metadata loads or for
    /// unbounded streams.
    fn duration(&self) -> Option<f64> {
        known_duration(self.raw_duration())
    }

    /// Volume fraction in `[0, 1]`.
    fn volume(&self) -> f64;

    /// Returns true if audio is muted.
    fn is_muted(&self) -> bool;

    /// Raw `MediaError.code` of the last load/decode failure.
    fn error_code(&self) -> Option<u16>;

    /// URL of the currently selected source, if any.
    fn source(&self) -> Option<String>;

    /// Snapshot of position and duration.
    fn position(&self) -> MediaPosition {
        MediaPosition {
            current_time: self.current_time(),
            duration: self.duration(),
        }
    }

    /// Snapshot of volume and mute state.
    fn volume_state(&self) -> VolumeState {
        VolumeState {
            volume: self.volume(),
            muted: self.is_muted(),
        }
    }
}

/// Normalizes a raw host duration.
///
/// Browsers report `NaN` before metadata, `+Infinity` for live streams and
/// `0` for empty sources; none of them can drive a progress bar.
pub fn known_duration(raw: f64) -> Option<f64> {
    if raw.is_finite() && raw > 0.0 {
        Some(raw)
    } else {
        None
    }
}

/// Playback position derived from the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaPosition {
    /// Elapsed seconds.
    pub current_time: f64,
    /// Total seconds, if known.
    pub duration: Option<f64>,
}

/// Volume and mute state derived from the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeState {
    /// Volume fraction.
    pub volume: f64,
    /// Muted flag.
    pub muted: bool,
}

impl VolumeState {
    /// Returns true if the user would hear nothing.
    ///
    /// Zero volume counts as silent even when the muted flag is clear.
    pub fn is_silent(&self) -> bool {
        self.muted || self.volume == 0.0
    }
}

/// Decoded `MediaError.code` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorCode {
    /// Fetching was aborted by the user agent at the user's request.
    Aborted,
    /// A network error interrupted fetching.
    Network,
    /// The resource could not be decoded.
    Decode,
    /// The source is missing or in an unsupported format.
    SourceNotSupported,
    /// A code outside the standard set.
    Unknown(u16),
}

impl MediaErrorCode {
    /// Decodes a raw code.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::SourceNotSupported,
            other => Self::Unknown(other),
        }
    }

    /// Raw numeric code.
    pub fn code(&self) -> u16 {
        match self {
            Self::Aborted => 1,
            Self::Network => 2,
            Self::Decode => 3,
            Self::SourceNotSupported => 4,
            Self::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for MediaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Aborted => "aborted",
            Self::Network => "network error",
            Self::Decode => "decode error",
            Self::SourceNotSupported => "source not supported",
            Self::Unknown(_) => "unrecognized",
        };
        write!(f, "{}: {label}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_durations_are_filtered() {
        assert_eq!(known_duration(f64::NAN), None);
        assert_eq!(known_duration(f64::INFINITY), None);
        assert_eq!(known_duration(0.0), None);
        assert_eq!(known_duration(190.0), Some(190.0));
    }

    #[test]
    fn zero_volume_is_silent_without_mute() {
        let state = VolumeState {
            volume: 0.0,
            muted: false,
        };
        assert!(state.is_silent());
        let state = VolumeState {
            volume: 0.5,
            muted: false,
        };
        assert!(!state.is_silent());
    }

    #[test]
    fn error_codes_decode() {
        assert_eq!(MediaErrorCode::from_code(2), MediaErrorCode::Network);
        assert_eq!(MediaErrorCode::from_code(9), MediaErrorCode::Unknown(9));
        assert_eq!(MediaErrorCode::Decode.to_string(), "3: decode error");
    }
}
