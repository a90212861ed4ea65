//! showreel: embedded promotional video player for the browser.
//!
//! Binds a [`PlaybackController`] from `showreel-core` to a page's `<video>`
//! element and its custom control chrome: overlay play button, play/pause
//! button, seekable progress bar, time label, mute button, volume slider and
//! fullscreen button.
//!
//! # Example
//!
//! ```js
//! import init, { attachPlayer } from "./showreel.js";
//!
//! await init();
//! const player = attachPlayer({ elements: { video: "promo-video" }, hideDelayMs: 3000 });
//! ```
//!
//! Everything DOM-specific is only compiled for `wasm32`; the configuration,
//! logging and re-exported core types are available on every target.

pub mod config;
pub mod logging;
pub mod registry;

#[cfg(target_arch = "wasm32")]
pub mod media;

// Re-export the core so consumers depend on one crate
pub use showreel_core::{
    AutoHideTimer, ControlSurface, FullscreenIcon, MediaElement, MediaErrorCode, NotificationKind,
    Notifier, PendingCommand, PlayAttempt, PlayIcon, PlaybackController, PlaybackPhase,
    PlaybackState, PlaybackView, PlayerConfig, PlayerError, PlayerMessages, Result, ShortcutKey,
    TimerHost, TimerId, VolumeIcon,
};

pub use config::{PlayerElements, WebPlayerConfig};
pub use logging::{init_logging, ConsoleMakeWriter};
pub use registry::PlayerRegistry;

#[cfg(target_arch = "wasm32")]
pub use media::{
    attach, attach_player, BrowserTimers, DomControls, PlayerHandle, ToastNotifier, WebController,
    WebVideo,
};
