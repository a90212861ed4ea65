//! Page-level configuration for the browser player.

use std::time::Duration;

use serde::Deserialize;
use showreel_core::{PlayerConfig, PlayerError, Result};
use tracing_subscriber::EnvFilter;

/// Element ids and selectors the player binds to.
///
/// Every element except the video is optional at runtime: a missing element
/// disables the feature that needs it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerElements {
    /// Id of the `<video>` element.
    pub video: String,
    /// CSS selector of the wrapper that goes fullscreen and tracks hover.
    pub wrapper: String,
    /// Id of the overlay holding the big play button.
    pub overlay: String,
    /// Id of the overlay play button.
    pub play_button: String,
    /// Id of the play/pause button in the control bar.
    pub play_pause_button: String,
    /// Id of the clickable progress track.
    pub progress_bar: String,
    /// Id of the fill inside the progress track.
    pub progress_fill: String,
    /// Id of the `m:ss / m:ss` label.
    pub time_display: String,
    /// Id of the mute button.
    pub volume_button: String,
    /// Id of the volume `<input type="range">`.
    pub volume_slider: String,
    /// Id of the fullscreen button.
    pub fullscreen_button: String,
    /// Id of the control bar that auto-hides.
    pub controls: String,
}

impl Default for PlayerElements {
    fn default() -> Self {
        Self {
            video: "promo-video".to_string(),
            wrapper: ".video-wrapper".to_string(),
            overlay: "video-overlay".to_string(),
            play_button: "play-button".to_string(),
            play_pause_button: "play-pause-btn".to_string(),
            progress_bar: "progress-bar".to_string(),
            progress_fill: "progress-fill".to_string(),
            time_display: "time-display".to_string(),
            volume_button: "volume-btn".to_string(),
            volume_slider: "volume-slider".to_string(),
            fullscreen_button: "fullscreen-btn".to_string(),
            controls: "video-controls".to_string(),
        }
    }
}

/// Configuration accepted by `attachPlayer`.
///
/// Controller settings are flattened into the same object, so
/// `{ "hideDelayMs": 2000, "elements": { "video": "intro" } }` is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebPlayerConfig {
    /// Elements the player binds to.
    pub elements: PlayerElements,
    /// How long a toast stays up before dismissing itself, in ms.
    pub toast_timeout_ms: u64,
    /// Delay between page load and attaching the player, in ms.
    pub init_delay_ms: u64,
    /// `EnvFilter` directive for the console logger.
    pub log_level: String,
    #[serde(flatten)]
    pub player: PlayerConfig,
}

impl Default for WebPlayerConfig {
    fn default() -> Self {
        Self {
            elements: PlayerElements::default(),
            toast_timeout_ms: 5000,
            init_delay_ms: 500,
            log_level: "info".to_string(),
            player: PlayerConfig::default(),
        }
    }
}

impl WebPlayerConfig {
    pub fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.toast_timeout_ms)
    }

    pub fn init_delay(&self) -> Duration {
        Duration::from_millis(self.init_delay_ms)
    }

    /// Sets the id of the video element.
    pub fn with_video_id(mut self, id: impl Into<String>) -> Self {
        self.elements.video = id.into();
        self
    }

    pub fn with_toast_timeout(mut self, timeout: Duration) -> Self {
        self.toast_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn with_init_delay(mut self, delay: Duration) -> Self {
        self.init_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_log_level(mut self, directive: impl Into<String>) -> Self {
        self.log_level = directive.into();
        self
    }

    /// Replaces the controller settings.
    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    /// Builds the console log filter from `log_level`.
    pub fn log_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| PlayerError::Config(format!("invalid logLevel `{}`: {e}", self.log_level)))
    }

    /// Checks element ids, timings and the log directive, then the
    /// controller settings.
    pub fn validate(&self) -> Result<()> {
        if self.elements.video.trim().is_empty() {
            return Err(PlayerError::Config("elements.video must not be empty".into()));
        }
        if self.toast_timeout_ms == 0 {
            return Err(PlayerError::Config("toastTimeoutMs must be positive".into()));
        }
        self.log_filter()?;
        self.player.validate()
    }
}
