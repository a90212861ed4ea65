//! Controller configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{PlayerError, Result};

/// Behavioral settings for a [`PlaybackController`](crate::PlaybackController).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    /// Inactivity before the control bar hides during playback, in ms.
    pub hide_delay_ms: u64,
    /// Distance of an ArrowLeft/ArrowRight skip, in seconds.
    pub seek_step_secs: f64,
    /// Clamp progress bar clicks to the bar's extent.
    ///
    /// When false, a click left or right of the bar seeks before 0 or past
    /// the end, leaving it to the media element to bound the position.
    pub clamp_progress_seek: bool,
    /// Volume applied to the element and slider on initialization.
    pub initial_volume: f64,
    /// User-facing texts.
    pub messages: PlayerMessages,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: 3000,
            seek_step_secs: 10.0,
            clamp_progress_seek: true,
            initial_volume: 1.0,
            messages: PlayerMessages::default(),
        }
    }
}

impl PlayerConfig {
    /// Inactivity delay as a [`Duration`].
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    /// Sets the inactivity delay.
    pub fn with_hide_delay(mut self, delay: Duration) -> Self {
        self.hide_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Sets the keyboard skip distance.
    pub fn with_seek_step(mut self, secs: f64) -> Self {
        self.seek_step_secs = secs;
        self
    }

    /// Sets whether progress bar clicks are clamped.
    pub fn with_clamped_seek(mut self, clamp: bool) -> Self {
        self.clamp_progress_seek = clamp;
        self
    }

    /// Sets the initial volume.
    pub fn with_initial_volume(mut self, volume: f64) -> Self {
        self.initial_volume = volume;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.hide_delay_ms == 0 {
            return Err(PlayerError::Config("hideDelayMs must be positive".into()));
        }
        if !(self.seek_step_secs.is_finite() && self.seek_step_secs > 0.0) {
            return Err(PlayerError::Config(format!(
                "seekStepSecs must be a positive number, got {}",
                self.seek_step_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(PlayerError::Config(format!(
                "initialVolume must be within [0, 1], got {}",
                self.initial_volume
            )));
        }
        Ok(())
    }
}

/// Texts shown to the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerMessages {
    /// Prefix for play rejections; the host's error message follows it.
    pub play_failed: String,
    /// Shown when the media fails to load. `{source}` is replaced with the
    /// element's current source.
    pub load_failed: String,
}

impl Default for PlayerMessages {
    fn default() -> Self {
        Self {
            play_failed: "Could not play the video: ".to_string(),
            load_failed: "Could not load the video. Check the source path: {source}".to_string(),
        }
    }
}

impl PlayerMessages {
    /// Message for a play rejection.
    pub fn play_failed(&self, reason: &str) -> String {
        format!("{}{reason}", self.play_failed)
    }

    /// Message for a load failure.
    pub fn load_failed(&self, source: Option<&str>) -> String {
        self.load_failed
            .replace("{source}", source.unwrap_or("(no source)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = PlayerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hide_delay(), Duration::from_secs(3));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(PlayerConfig::default()
            .with_initial_volume(1.5)
            .validate()
            .is_err());
        assert!(PlayerConfig::default()
            .with_seek_step(0.0)
            .validate()
            .is_err());
        assert!(PlayerConfig::default()
            .with_hide_delay(Duration::ZERO)
            .validate()
            .is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{"hideDelayMs": 1500, "messages": {"playFailed": "Oops: "}}"#)
                .unwrap();
        assert_eq!(config.hide_delay(), Duration::from_millis(1500));
        assert_eq!(config.seek_step_secs, 10.0);
        assert!(config.clamp_progress_seek);
        assert_eq!(config.messages.play_failed("x"), "Oops: x");
        assert_eq!(
            config.messages.load_failed,
            PlayerMessages::default().load_failed
        );
    }

    #[test]
    fn load_message_names_the_source() {
        let messages = PlayerMessages::default();
        assert_eq!(
            messages.load_failed(Some("media/promo.mp4")),
            "Could not load the video. Check the source path: media/promo.mp4"
        );
        assert_eq!(
            messages.play_failed("NotAllowedError"),
            "Could not play the video: NotAllowedError"
        );
    }
}
