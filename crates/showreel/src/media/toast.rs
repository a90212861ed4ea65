//! Toast notifications in the top-right corner of the page.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use showreel_core::{NotificationKind, Notifier};
use tracing::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::dom_controls::icon_html;

const SLIDE_IN_DELAY_MS: i32 = 100;
const REMOVE_DELAY_MS: i32 = 300;

const TOAST_STYLE: &str = "position: fixed; top: 20px; right: 20px; color: white; \
    padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.3); \
    z-index: 10000; display: flex; align-items: center; gap: 0.5rem; max-width: 400px; \
    transition: transform 0.3s ease; transform: translateX(100%);";

const CLOSE_STYLE: &str = "background: none; border: none; color: white; font-size: 1.2rem; \
    cursor: pointer; margin-left: auto; opacity: 0.8;";

/// [`Notifier`] appending toasts to `document.body`.
pub struct ToastNotifier {
    window: Window,
    document: Document,
    timeout: Duration,
}

impl ToastNotifier {
    /// Creates a notifier whose toasts dismiss themselves after `timeout`.
    pub fn new(window: Window, document: Document, timeout: Duration) -> Self {
        Self {
            window,
            document,
            timeout,
        }
    }

    fn show(&self, message: &str, kind: NotificationKind) -> Result<(), JsValue> {
        let toast: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        toast.set_class_name(&format!("notification notification-{kind}"));
        toast.set_attribute("role", "alert")?;
        toast.style().set_css_text(TOAST_STYLE);
        toast.style().set_property("background", kind.color())?;

        let icon = self.document.create_element("span")?;
        icon.set_inner_html(&icon_html(kind.icon()));
        toast.append_child(&icon)?;

        // Text only; the message may carry browser error strings.
        let text = self.document.create_element("span")?;
        text.set_text_content(Some(message));
        toast.append_child(&text)?;

        let close: HtmlElement = self.document.create_element("button")?.dyn_into()?;
        close.set_class_name("notification-close");
        close.set_attribute("aria-label", "Close")?;
        close.set_text_content(Some("\u{00d7}"));
        close.style().set_css_text(CLOSE_STYLE);
        toast.append_child(&close)?;

        self.document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&toast)?;

        let slide_target = toast.clone();
        set_timeout(&self.window, SLIDE_IN_DELAY_MS, move || {
            let _ = slide_target.style().set_property("transform", "translateX(0)");
        })?;

        let dismissed = Rc::new(Cell::new(false));
        let auto_close = {
            let window = self.window.clone();
            let toast = toast.clone();
            let dismissed = Rc::clone(&dismissed);
            set_timeout(&self.window, millis(self.timeout), move || {
                dismiss(&window, &toast, &dismissed);
            })?
        };

        let window = self.window.clone();
        let on_close = Closure::wrap(Box::new(move || {
            window.clear_timeout_with_handle(auto_close);
            dismiss(&window, &toast, &dismissed);
        }) as Box<dyn FnMut()>);
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();

        Ok(())
    }
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        info!(%kind, text = message, "notification");
        if let Err(e) = self.show(message, kind) {
            warn!(error = ?e, "failed to show notification");
        }
    }
}

/// Slides the toast out and removes it once the transition is over.
fn dismiss(window: &Window, toast: &HtmlElement, dismissed: &Cell<bool>) {
    if dismissed.replace(true) {
        return;
    }
    let _ = toast.style().set_property("transform", "translateX(100%)");
    let toast = toast.clone();
    let removed = set_timeout(window, REMOVE_DELAY_MS, move || toast.remove());
    if let Err(e) = removed {
        warn!(error = ?e, "failed to schedule toast removal");
    }
}

/// Runs `f` once after `millis`. Returns the timeout handle.
fn set_timeout(window: &Window, millis: i32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
}

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}
