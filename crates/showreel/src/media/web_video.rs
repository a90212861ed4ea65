//! Media element adapter over the browser's native `HTMLVideoElement`.
//!
//! The browser decodes and presents the video; this wrapper only issues
//! commands and answers state queries for the controller. Play and fullscreen
//! transitions return the browser's `Promise`, which the binder awaits.

use js_sys::{Function, Promise, Reflect};
use showreel_core::{MediaElement, PlayerError, Result};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlVideoElement};

/// Controller-facing view of one `<video>` element.
pub struct WebVideo {
    /// The underlying HTML video element
    video: HtmlVideoElement,
    document: Document,
    /// Element put into fullscreen; the player wrapper when present
    fullscreen_target: Element,
}

impl WebVideo {
    /// Wraps `video`. Fullscreen requests go to `fullscreen_target`, or to the
    /// video itself when it is `None`.
    pub fn new(
        video: HtmlVideoElement,
        document: Document,
        fullscreen_target: Option<Element>,
    ) -> Self {
        let fullscreen_target = fullscreen_target.unwrap_or_else(|| video.clone().into());
        Self {
            video,
            document,
            fullscreen_target,
        }
    }

    /// Returns the underlying video element.
    pub fn video_element(&self) -> &HtmlVideoElement {
        &self.video
    }
}

impl MediaElement for WebVideo {
    type Pending = Promise;

    fn play(&mut self) -> Result<Promise> {
        self.video
            .play()
            .map_err(|e| PlayerError::PlayRejected(js_error_message(&e)))
    }

    fn pause(&mut self) {
        if let Err(e) = self.video.pause() {
            warn!(error = %js_error_message(&e), "pause failed");
        }
    }

    fn seek_to(&mut self, seconds: f64) {
        self.video.set_current_time(seconds);
    }

    fn set_volume(&mut self, fraction: f64) {
        self.video.set_volume(fraction);
    }

    fn set_muted(&mut self, muted: bool) {
        self.video.set_muted(muted);
    }

    fn request_fullscreen(&mut self) -> Result<Promise> {
        call_promise(&self.fullscreen_target, "requestFullscreen")
    }

    fn exit_fullscreen(&mut self) -> Result<Promise> {
        call_promise(&self.document, "exitFullscreen")
    }

    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn is_paused(&self) -> bool {
        self.video.paused()
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn raw_duration(&self) -> f64 {
        self.video.duration()
    }

    fn volume(&self) -> f64 {
        self.video.volume()
    }

    fn is_muted(&self) -> bool {
        self.video.muted()
    }

    fn error_code(&self) -> Option<u16> {
        self.video.error().map(|e| e.code())
    }

    fn source(&self) -> Option<String> {
        let src = self.video.current_src();
        if src.is_empty() {
            self.video.get_attribute("src").filter(|s| !s.is_empty())
        } else {
            Some(src)
        }
    }
}

/// Calls a promise-returning DOM method by name.
///
/// `Element.requestFullscreen` and `Document.exitFullscreen` return promises
/// in current browsers, but the web-sys bindings discard them. Older engines
/// return `undefined`, which is treated as an already resolved promise.
fn call_promise(target: &JsValue, method: &str) -> Result<Promise> {
    let func = Reflect::get(target, &JsValue::from_str(method))
        .map_err(|e| PlayerError::Host(js_error_message(&e)))?;
    let func: Function = func
        .dyn_into()
        .map_err(|_| PlayerError::Fullscreen(format!("{method} is not supported")))?;
    let value = func
        .call0(target)
        .map_err(|e| PlayerError::Fullscreen(js_error_message(&e)))?;
    Ok(value
        .dyn_into::<Promise>()
        .unwrap_or_else(|_| Promise::resolve(&JsValue::UNDEFINED)))
}

/// Extracts a readable message from a thrown JS value.
///
/// Uses `error.message` for `Error` objects, the value itself for strings and
/// the debug representation otherwise.
pub fn js_error_message(value: &JsValue) -> String {
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
