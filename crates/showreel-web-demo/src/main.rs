//! showreel web demo
//!
//! Bootstraps the promotional video player on a static page: installs the
//! panic hook and console logging, reports uncaught page errors, and attaches
//! the player shortly after the page has loaded so the rest of the page
//! initializes first.
//!
//! Build and run with trunk:
//! ```bash
//! trunk serve --open
//! ```

#[cfg(target_arch = "wasm32")]
fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    web::start(showreel::WebPlayerConfig::default());
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("showreel-web-demo runs in the browser; build it with `trunk serve`");
}

#[cfg(target_arch = "wasm32")]
mod web {
    use showreel::media::js_error_message;
    use showreel::{attach, init_logging, PlayerError, WebPlayerConfig};
    use tracing::{debug, error, info};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{ErrorEvent, Event, PromiseRejectionEvent, Window};

    pub fn start(config: WebPlayerConfig) {
        if let Err(e) = config.log_filter().and_then(init_logging) {
            web_sys::console::error_1(&format!("Failed to initialize logging: {e}").into());
        }

        let Some(window) = web_sys::window() else {
            error!("failed to get window object");
            return;
        };
        let Some(document) = window.document() else {
            error!("failed to get document");
            return;
        };

        report_page_errors(&window);

        if document.ready_state() == "complete" {
            schedule_attach(&window, config);
            return;
        }
        let target = window.clone();
        let on_load = Closure::once_into_js(move || schedule_attach(&target, config));
        if let Err(e) = window.add_event_listener_with_callback("load", on_load.unchecked_ref()) {
            error!(error = ?e, "failed to listen for page load");
        }
    }

    fn schedule_attach(window: &Window, config: WebPlayerConfig) {
        let delay = i32::try_from(config.init_delay_ms).unwrap_or(i32::MAX);
        debug!(delay, "page loaded, scheduling player attach");
        let attach_later = Closure::once_into_js(move || match attach(&config) {
            Ok(player) => info!(video = %player.video_id(), "video player ready"),
            Err(PlayerError::MissingElement(id)) => {
                info!(%id, "no video element on this page");
            }
            Err(e) => error!(%e, "failed to attach video player"),
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            attach_later.unchecked_ref(),
            delay,
        ) {
            error!(error = ?e, "failed to schedule player attach");
        }
    }

    /// Logs uncaught errors and unhandled promise rejections from anywhere on
    /// the page.
    fn report_page_errors(window: &Window) {
        let on_error = Closure::wrap(Box::new(|event: Event| {
            let message = event
                .dyn_ref::<ErrorEvent>()
                .map(|e| e.message())
                .unwrap_or_else(|| event.type_());
            error!(%message, "uncaught page error");
        }) as Box<dyn FnMut(Event)>);
        let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();

        let on_rejection = Closure::wrap(Box::new(|event: Event| {
            let reason = event
                .dyn_ref::<PromiseRejectionEvent>()
                .map(|e| js_error_message(&e.reason()))
                .unwrap_or_default();
            error!(%reason, "unhandled promise rejection");
        }) as Box<dyn FnMut(Event)>);
        let _ = window.add_event_listener_with_callback(
            "unhandledrejection",
            on_rejection.as_ref().unchecked_ref(),
        );
        on_rejection.forget();
    }
}

#[cfg(target_arch = "wasm32")]
mod console_error_panic_hook {
    use std::panic::PanicHookInfo;

    pub fn hook(info: &PanicHookInfo<'_>) {
        let msg = info.to_string();
        web_sys::console::error_1(&msg.into());
    }
}
