//! Rate limiting for high-frequency window events.
//!
//! Every call re-arms a quiet window of `wait`. In leading-edge use
//! ([`Debounce::admit`]) the first call of a burst runs immediately and the
//! rest are suppressed until the window expires with no further calls. In
//! trailing-edge use ([`Debounce::defer`]) only the last action of a burst
//! runs, once the window expires.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::timer::{Scheduler, TimerId};

pub struct Debounce {
    scheduler: Rc<dyn Scheduler>,
    wait: Duration,
    pending: Rc<Cell<Option<TimerId>>>,
}

impl Debounce {
    #[must_use]
    pub fn new(scheduler: Rc<dyn Scheduler>, wait: Duration) -> Self {
        Self { scheduler, wait, pending: Rc::new(Cell::new(None)) }
    }

    /// Leading edge: re-arm the window and report whether the caller should
    /// handle this event now.
    pub fn admit(&self) -> bool {
        let call_now = self.pending.get().is_none();
        self.rearm(None);
        call_now
    }

    /// Trailing edge: run `action` once the window passes quietly. A later
    /// call replaces the pending action.
    pub fn defer(&self, action: impl FnOnce() + 'static) {
        self.rearm(Some(Box::new(action)));
    }

    /// Whether a quiet window is currently running.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.get().is_some()
    }

    fn rearm(&self, on_quiet: Option<Box<dyn FnOnce()>>) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        let pending = Rc::clone(&self.pending);
        let id = self.scheduler.after(
            self.wait,
            Box::new(move || {
                pending.set(None);
                if let Some(action) = on_quiet {
                    action();
                }
            }),
        );
        self.pending.set(Some(id));
    }
}
