//! showreel-core: headless playback controller for an embedded video player.
//!
//! This crate holds everything about the player that does not depend on a
//! browser:
//!
//! - [`PlaybackController`]: play/pause, progress, volume, fullscreen,
//!   auto-hiding controls and keyboard shortcuts
//! - [`MediaElement`], [`ControlSurface`], [`TimerHost`], [`Notifier`]: the
//!   seams the host implements
//! - [`PlaybackState`] and [`AutoHideTimer`]: the controller's ephemeral state
//! - [`PlayerConfig`] and [`PlayerError`]
//!
//! It has **zero web dependency**. It is consumed by `showreel`, which
//! implements the seams over `web-sys`.
//!
//! # Example
//!
//! ```ignore
//! let mut controller = PlaybackController::new(media, surface, timers, notifier, config);
//! if controller.initialize() {
//!     // attach event listeners that call controller methods
//! }
//! ```

pub mod auto_hide;
pub mod config;
pub mod controller;
pub mod error;
pub mod keyboard;
pub mod media;
pub mod notify;
pub mod progress;
pub mod state;
pub mod surface;

pub use auto_hide::{AutoHideTimer, TimerHost, TimerId};
pub use config::{PlayerConfig, PlayerMessages};
pub use controller::{PendingCommand, PlaybackController};
pub use error::{PlayerError, Result};
pub use keyboard::ShortcutKey;
pub use media::{known_duration, MediaElement, MediaErrorCode, MediaPosition, VolumeState};
pub use notify::{NotificationKind, Notifier};
pub use progress::{format_progress_label, format_timestamp};
pub use state::{PlayAttempt, PlaybackPhase, PlaybackState};
pub use surface::{ControlSurface, FullscreenIcon, PlayIcon, PlaybackView, VolumeIcon};
