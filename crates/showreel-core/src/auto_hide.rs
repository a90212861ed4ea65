//! Debounced hiding of the control bar.
//!
//! The host owns the actual timers ([`TimerHost`]); [`AutoHideTimer`] only
//! remembers which one is current. Re-arming always cancels the previous
//! handle first, and a callback for any other handle is ignored, so at most
//! one hide can ever take effect.

use std::time::Duration;

/// Opaque handle for a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// One-shot timer scheduling provided by the host.
///
/// When a scheduled timer elapses the host calls
/// [`PlaybackController::on_timer_elapsed`](crate::PlaybackController::on_timer_elapsed)
/// with the id returned here.
pub trait TimerHost {
    /// Schedules a timer firing once after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancels a timer. Cancelling an already-fired id is harmless.
    fn cancel(&mut self, id: TimerId);
}

/// Tracks the single outstanding hide timer.
#[derive(Debug)]
pub struct AutoHideTimer {
    delay: Duration,
    pending: Option<TimerId>,
}

impl AutoHideTimer {
    /// Creates a disarmed timer with the given inactivity delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Inactivity delay before the controls hide.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns true if a hide is scheduled.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancels any scheduled hide and schedules a fresh one.
    pub fn rearm<T: TimerHost + ?Sized>(&mut self, host: &mut T) -> TimerId {
        self.cancel(host);
        let id = host.schedule(self.delay);
        self.pending = Some(id);
        id
    }

    /// Cancels the scheduled hide, if any.
    pub fn cancel<T: TimerHost + ?Sized>(&mut self, host: &mut T) {
        if let Some(id) = self.pending.take() {
            host.cancel(id);
        }
    }

    /// Claims an elapsed timer.
    ///
    /// Returns true only for the current handle, which is then cleared.
    pub fn claim(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHost {
        next: u64,
        cancelled: Vec<TimerId>,
    }

    impl TimerHost for CountingHost {
        fn schedule(&mut self, _delay: Duration) -> TimerId {
            self.next += 1;
            TimerId(self.next)
        }

        fn cancel(&mut self, id: TimerId) {
            self.cancelled.push(id);
        }
    }

    #[test]
    fn rearm_cancels_previous_handle() {
        let mut host = CountingHost::default();
        let mut timer = AutoHideTimer::new(Duration::from_millis(3000));

        let first = timer.rearm(&mut host);
        let second = timer.rearm(&mut host);

        assert_eq!(host.cancelled, vec![first]);
        assert!(!timer.claim(first));
        assert!(timer.claim(second));
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancel_without_pending_is_noop() {
        let mut host = CountingHost::default();
        let mut timer = AutoHideTimer::new(Duration::from_secs(3));
        timer.cancel(&mut host);
        assert!(host.cancelled.is_empty());
    }
}
