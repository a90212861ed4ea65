//! [`TimerHost`] backed by `window.setTimeout`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use showreel_core::{TimerHost, TimerId};
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Receives the id of every timer that fires.
pub type TimerSink = Rc<RefCell<Option<Box<dyn FnMut(TimerId)>>>>;

struct Scheduled {
    handle: i32,
    // Kept alive until the timer fires or is cancelled.
    _callback: Closure<dyn FnMut()>,
}

/// Browser timers delivering expirations to a [`TimerSink`].
///
/// The sink is installed after construction because it usually needs a
/// handle to the controller that owns this host.
pub struct BrowserTimers {
    window: Window,
    next_id: u64,
    live: HashMap<TimerId, Scheduled>,
    fired: Rc<RefCell<Vec<TimerId>>>,
    sink: TimerSink,
}

impl BrowserTimers {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            next_id: 0,
            live: HashMap::new(),
            fired: Rc::new(RefCell::new(Vec::new())),
            sink: Rc::new(RefCell::new(None)),
        }
    }

    /// Slot the binder fills with the expiry handler.
    pub fn sink(&self) -> TimerSink {
        Rc::clone(&self.sink)
    }

    /// Drops closures of timers that already ran.
    ///
    /// Ids are recorded only after their callback returns, so a closure is
    /// never dropped while it is executing.
    fn reap(&mut self) {
        let fired: Vec<TimerId> = self.fired.borrow_mut().drain(..).collect();
        for id in fired {
            self.live.remove(&id);
        }
    }
}

impl TimerHost for BrowserTimers {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.reap();
        self.next_id += 1;
        let id = TimerId(self.next_id);

        let sink = Rc::clone(&self.sink);
        let fired = Rc::clone(&self.fired);
        let callback = Closure::wrap(Box::new(move || {
            match sink.try_borrow_mut() {
                Ok(mut slot) => {
                    if let Some(handler) = slot.as_mut() {
                        handler(id);
                    }
                }
                Err(_) => warn!(?id, "timer sink busy, dropping expiry"),
            }
            fired.borrow_mut().push(id);
        }) as Box<dyn FnMut()>);

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => {
                self.live.insert(
                    id,
                    Scheduled {
                        handle,
                        _callback: callback,
                    },
                );
            }
            Err(e) => warn!(?id, error = ?e, "setTimeout failed"),
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.reap();
        if let Some(timer) = self.live.remove(&id) {
            self.window.clear_timeout_with_handle(timer.handle);
        }
    }
}
