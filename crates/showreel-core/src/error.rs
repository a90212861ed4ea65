//! Error types shared by the controller and the host bindings.

use thiserror::Error;

use crate::media::MediaErrorCode;

/// Errors that can occur while driving the player.
///
/// None of these are fatal to the page: the controller logs them, notifies the
/// user where that helps, and degrades the affected feature to a no-op.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayerError {
    /// A required element is absent from the document.
    #[error("element `{0}` not found")]
    MissingElement(String),

    /// The host refused or failed to start playback (autoplay policy,
    /// decode failure, missing source).
    #[error("{0}")]
    PlayRejected(String),

    /// Entering or leaving fullscreen failed.
    #[error("fullscreen request failed: {0}")]
    Fullscreen(String),

    /// The media element reported a load or decode failure.
    #[error("media error ({})", describe_code(.code))]
    Media {
        /// Decoded `MediaError.code`, if the element exposed one.
        code: Option<MediaErrorCode>,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Any other failure reported by the host environment.
    #[error("host error: {0}")]
    Host(String),
}

fn describe_code(code: &Option<MediaErrorCode>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

/// Result alias for player operations.
pub type Result<T> = std::result::Result<T, PlayerError>;
