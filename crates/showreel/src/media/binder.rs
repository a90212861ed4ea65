//! Event wiring between the page and a [`PlaybackController`].
//!
//! One controller per video element lives in an `Rc<RefCell<..>>` shared by
//! the listener closures. Listeners are leaked for the lifetime of the page,
//! matching the lifetime of the markup they are attached to.
//!
//! ```text
//! DOM event ──► closure ──► controller method ──► DomControls
//!                                │
//!                                └─► PendingCommand ──► spawn_local(await)
//!                                                           │
//!                         play_settled / fullscreen_failed ◄┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use showreel_core::{
    PendingCommand, PlaybackController, PlayerError, Result, ShortcutKey, TimerId,
};
use tracing::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlInputElement, HtmlVideoElement, KeyboardEvent,
    MouseEvent, Window,
};

use super::dom_controls::DomControls;
use super::timers::BrowserTimers;
use super::toast::ToastNotifier;
use super::web_video::{js_error_message, WebVideo};
use crate::config::{PlayerElements, WebPlayerConfig};
use crate::logging::init_logging;
use crate::registry::PlayerRegistry;

/// Controller bound to browser seams.
pub type WebController = PlaybackController<WebVideo, DomControls, BrowserTimers, ToastNotifier>;

type SharedController = Rc<RefCell<WebController>>;

thread_local! {
    static REGISTRY: RefCell<PlayerRegistry<SharedController>> = RefCell::new(PlayerRegistry::new());
}

/// JS handle to an attached player.
#[wasm_bindgen]
pub struct PlayerHandle {
    controller: SharedController,
    video_id: String,
}

#[wasm_bindgen]
impl PlayerHandle {
    /// Id of the bound video element.
    #[wasm_bindgen(getter, js_name = videoId)]
    pub fn video_id(&self) -> String {
        self.video_id.clone()
    }

    /// Current phase: `paused`, `playing` or `ended`.
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.controller
            .try_borrow()
            .map(|c| format!("{:?}", c.phase()).to_lowercase())
            .unwrap_or_default()
    }

    /// Plays if paused or ended, pauses otherwise.
    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&self) {
        dispatch(&self.controller, |c| c.toggle_play());
    }

    /// Flips the muted flag.
    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&self) {
        with_controller(&self.controller, |c| c.toggle_mute());
    }

    /// Enters fullscreen on the wrapper, or leaves it.
    #[wasm_bindgen(js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(&self) {
        dispatch(&self.controller, |c| c.toggle_fullscreen());
    }

    /// Seeks by `delta` seconds, clamped to the media's extent.
    #[wasm_bindgen(js_name = seekBy)]
    pub fn seek_by(&self, delta: f64) {
        with_controller(&self.controller, |c| c.seek_by(delta));
    }
}

/// Binds the player described by `config` to the page.
///
/// `config` is an optional object with camelCase keys; omitted keys keep
/// their defaults. Returns `undefined` when the video element is missing or
/// the config is invalid. Calling it again for the same element returns the
/// existing player without binding twice.
#[wasm_bindgen(js_name = attachPlayer)]
pub fn attach_player(config: JsValue) -> Option<PlayerHandle> {
    let config = match decode_config(config) {
        Ok(config) => config,
        Err(e) => {
            error!(%e, "invalid player configuration");
            return None;
        }
    };
    if let Ok(filter) = config.log_filter() {
        // Fails harmlessly when the page already installed a subscriber.
        let _ = init_logging(filter);
    }

    match attach(&config) {
        Ok(handle) => Some(handle),
        Err(PlayerError::MissingElement(id)) => {
            info!(id, "video element not found, player not attached");
            None
        }
        Err(e) => {
            error!(%e, "failed to attach video player");
            None
        }
    }
}

fn decode_config(value: JsValue) -> Result<WebPlayerConfig> {
    let config = if value.is_undefined() || value.is_null() {
        WebPlayerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(value).map_err(|e| PlayerError::Config(e.to_string()))?
    };
    config.validate()?;
    Ok(config)
}

/// Attaches a player, reusing the registered one for the same element.
pub fn attach(config: &WebPlayerConfig) -> Result<PlayerHandle> {
    let video_id = config.elements.video.clone();
    if REGISTRY.with(|r| r.borrow().contains(&video_id)) {
        debug!(%video_id, "video player already initialized, skipping");
    }

    let controller = REGISTRY.with(|r| {
        r.borrow_mut()
            .get_or_attach(&video_id, || build(config), |c| bind(c, config))
    })?;
    Ok(PlayerHandle {
        controller,
        video_id,
    })
}

/// Creates and initializes the controller for `config.elements.video`.
fn build(config: &WebPlayerConfig) -> Result<SharedController> {
    let video_id = &config.elements.video;
    let (window, document, video) = lookup_video(video_id)?;

    info!(%video_id, "initializing video player");
    // Focusable so the keyboard shortcuts reach it.
    video.set_attribute("tabindex", "0").map_err(host_error)?;

    let surface = DomControls::lookup(&document, &config.elements);
    let wrapper = surface.wrapper().cloned();
    let media = WebVideo::new(video, document.clone(), wrapper);
    let timers = BrowserTimers::new(window.clone());
    let sink = timers.sink();
    let notifier = ToastNotifier::new(window, document, config.toast_timeout());

    let controller: SharedController = Rc::new(RefCell::new(PlaybackController::new(
        media,
        surface,
        timers,
        notifier,
        config.player.clone(),
    )));

    let weak = Rc::downgrade(&controller);
    *sink.borrow_mut() = Some(Box::new(move |id: TimerId| {
        if let Some(controller) = weak.upgrade() {
            with_controller(&controller, |c| c.on_timer_elapsed(id));
        }
    }));

    if with_controller(&controller, |c| c.initialize()) != Some(true) {
        return Err(PlayerError::Host("controller initialization was skipped".into()));
    }
    Ok(controller)
}

/// Wires page events to an initialized controller.
fn bind(controller: &SharedController, config: &WebPlayerConfig) -> Result<()> {
    let (_, document, video) = lookup_video(&config.elements.video)?;
    bind_video(controller, &video)?;
    bind_controls(controller, &document, &config.elements)?;
    let wrapper = controller
        .try_borrow()
        .ok()
        .and_then(|c| c.surface().wrapper().cloned());
    if let Some(wrapper) = &wrapper {
        bind_pointer(controller, wrapper)?;
    }
    Ok(())
}

fn lookup_video(video_id: &str) -> Result<(Window, Document, HtmlVideoElement)> {
    let window = web_sys::window().ok_or_else(|| PlayerError::Host("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| PlayerError::Host("no document".into()))?;
    let video = document
        .get_element_by_id(video_id)
        .and_then(|e| e.dyn_into().ok())
        .ok_or_else(|| PlayerError::MissingElement(video_id.to_string()))?;
    Ok((window, document, video))
}

fn bind_video(controller: &SharedController, video: &HtmlVideoElement) -> Result<()> {
    on_click_toggle(controller, video)?;

    let c = Rc::clone(controller);
    listen(video, "timeupdate", move |_: Event| {
        with_controller(&c, |c| c.update_progress());
    })?;
    let c = Rc::clone(controller);
    listen(video, "loadedmetadata", move |_: Event| {
        with_controller(&c, |c| c.on_metadata_loaded());
    })?;
    let c = Rc::clone(controller);
    listen(video, "ended", move |_: Event| {
        with_controller(&c, |c| c.on_ended());
    })?;
    let c = Rc::clone(controller);
    listen(video, "error", move |_: Event| {
        with_controller(&c, |c| c.on_media_error());
    })?;
    let c = Rc::clone(controller);
    listen(video, "playing", move |_: Event| {
        with_controller(&c, |c| c.on_media_playing());
    })?;
    let c = Rc::clone(controller);
    listen(video, "pause", move |_: Event| {
        with_controller(&c, |c| c.on_media_paused());
    })?;

    let c = Rc::clone(controller);
    listen(video, "keydown", move |e: KeyboardEvent| {
        let Some(key) = ShortcutKey::from_code(&e.code()) else {
            return;
        };
        e.prevent_default();
        debug!(?key, "keyboard shortcut");
        dispatch(&c, |c| c.handle_key(key));
    })
}

fn bind_controls(
    controller: &SharedController,
    document: &Document,
    elements: &PlayerElements,
) -> Result<()> {
    if let Some(button) = document.get_element_by_id(&elements.play_button) {
        on_click_toggle(controller, &button)?;
    }
    if let Some(button) = document.get_element_by_id(&elements.play_pause_button) {
        on_click_toggle(controller, &button)?;
    }

    if let Some(bar) = document.get_element_by_id(&elements.progress_bar) {
        let c = Rc::clone(controller);
        let target = bar.clone();
        listen(&bar, "click", move |e: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            with_controller(&c, |c| {
                c.set_progress(f64::from(e.client_x()), rect.left(), rect.width())
            });
        })?;
    }

    if let Some(button) = document.get_element_by_id(&elements.volume_button) {
        let c = Rc::clone(controller);
        listen(&button, "click", move |_: Event| {
            with_controller(&c, |c| c.toggle_mute());
        })?;
    }

    if let Some(slider) = document
        .get_element_by_id(&elements.volume_slider)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    {
        let c = Rc::clone(controller);
        let input = slider.clone();
        listen(&slider, "input", move |_: Event| {
            let value = input.value_as_number();
            if value.is_nan() {
                return;
            }
            with_controller(&c, |c| c.change_volume(value));
        })?;
    }

    if let Some(button) = document.get_element_by_id(&elements.fullscreen_button) {
        let c = Rc::clone(controller);
        listen(&button, "click", move |_: Event| {
            dispatch(&c, |c| c.toggle_fullscreen());
        })?;
    }

    let c = Rc::clone(controller);
    listen(document, "fullscreenchange", move |_: Event| {
        with_controller(&c, |c| c.on_fullscreen_change());
    })
}

fn bind_pointer(controller: &SharedController, wrapper: &Element) -> Result<()> {
    let c = Rc::clone(controller);
    listen(wrapper, "mouseenter", move |_: Event| {
        with_controller(&c, |c| c.on_pointer_enter());
    })?;
    let c = Rc::clone(controller);
    listen(wrapper, "mousemove", move |_: Event| {
        with_controller(&c, |c| c.on_pointer_move());
    })?;
    let c = Rc::clone(controller);
    listen(wrapper, "mouseleave", move |_: Event| {
        with_controller(&c, |c| c.on_pointer_leave());
    })
}

fn on_click_toggle(controller: &SharedController, target: &EventTarget) -> Result<()> {
    let c = Rc::clone(controller);
    listen(target, "click", move |e: Event| {
        e.prevent_default();
        dispatch(&c, |c| c.toggle_play());
    })
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<()>
where
    E: JsCast + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(host_error)?;
    closure.forget();
    Ok(())
}

/// Runs `f` on the controller unless it is already borrowed further up the
/// stack, in which case the event is dropped.
fn with_controller<R>(
    controller: &SharedController,
    f: impl FnOnce(&mut WebController) -> R,
) -> Option<R> {
    match controller.try_borrow_mut() {
        Ok(mut c) => Some(f(&mut c)),
        Err(_) => {
            warn!("video player busy, dropping event");
            None
        }
    }
}

/// Runs a command and drives whatever it left pending.
fn dispatch(
    controller: &SharedController,
    f: impl FnOnce(&mut WebController) -> PendingCommand<Promise>,
) {
    if let Some(pending) = with_controller(controller, f) {
        drive(controller, pending);
    }
}

fn drive(controller: &SharedController, pending: PendingCommand<Promise>) {
    match pending {
        PendingCommand::None => {}
        PendingCommand::Play { attempt, pending } => {
            let controller = Rc::clone(controller);
            spawn_local(async move {
                let outcome = JsFuture::from(pending)
                    .await
                    .map(|_| ())
                    .map_err(|e| PlayerError::PlayRejected(js_error_message(&e)));
                with_controller(&controller, |c| c.play_settled(attempt, outcome));
            });
        }
        PendingCommand::Fullscreen(pending) => {
            let controller = Rc::clone(controller);
            spawn_local(async move {
                if let Err(e) = JsFuture::from(pending).await {
                    let err = PlayerError::Fullscreen(js_error_message(&e));
                    with_controller(&controller, |c| c.fullscreen_failed(err));
                }
            });
        }
    }
}

fn host_error(value: JsValue) -> PlayerError {
    PlayerError::Host(js_error_message(&value))
}
