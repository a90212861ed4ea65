//! Browser implementations of the controller seams.
//!
//! - [`WebVideo`] - `HTMLVideoElement` as a [`MediaElement`](showreel_core::MediaElement)
//! - [`DomControls`] - the page's player chrome as a [`ControlSurface`](showreel_core::ControlSurface)
//! - [`BrowserTimers`] - `setTimeout` as a [`TimerHost`](showreel_core::TimerHost)
//! - [`ToastNotifier`] - toast popups as a [`Notifier`](showreel_core::Notifier)
//! - [`binder`] - event wiring and the `attachPlayer` entry point

pub mod binder;
pub mod dom_controls;
pub mod timers;
pub mod toast;
pub mod web_video;

pub use binder::{attach, attach_player, PlayerHandle, WebController};
pub use dom_controls::DomControls;
pub use timers::{BrowserTimers, TimerSink};
pub use toast::ToastNotifier;
pub use web_video::{js_error_message, WebVideo};
