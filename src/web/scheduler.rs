//! `Scheduler` over `gloo-timers` callbacks.
//!
//! A timer's JS closure must outlive its own invocation, so finished and
//! cancelled timers are parked in `spent` and only dropped from outside any
//! timer callback (the next time a timer is scheduled).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;

use crate::timer::{Scheduler, Tick, TimerId};

enum Handle {
    Once(Timeout),
    Repeating(Interval),
}

impl Handle {
    /// Stop the browser timer, handing back its closure.
    fn cancel(self) -> Closure<dyn FnMut()> {
        match self {
            Handle::Once(timeout) => timeout.cancel(),
            Handle::Repeating(interval) => interval.cancel(),
        }
    }
}

#[derive(Default)]
struct Timers {
    next_id: u64,
    live: HashMap<TimerId, Handle>,
    spent: Vec<Closure<dyn FnMut()>>,
    running: bool,
}

#[derive(Clone, Default)]
pub struct BrowserScheduler {
    timers: Rc<RefCell<Timers>>,
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

fn retire(timers: &RefCell<Timers>, id: TimerId) {
    let mut timers = timers.borrow_mut();
    if let Some(handle) = timers.live.remove(&id) {
        let closure = handle.cancel();
        timers.spent.push(closure);
    }
}

/// Run `f` flagged as inside a timer callback.
fn in_callback<R>(timers: &RefCell<Timers>, f: impl FnOnce() -> R) -> R {
    timers.borrow_mut().running = true;
    let result = f();
    timers.borrow_mut().running = false;
    result
}

impl BrowserScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&self) -> TimerId {
        let mut timers = self.timers.borrow_mut();
        if !timers.running {
            timers.spent.clear();
        }
        timers.next_id += 1;
        TimerId::new(timers.next_id)
    }
}

impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let id = self.allocate();
        let timers = Rc::clone(&self.timers);
        let timeout = Timeout::new(millis(delay), move || {
            in_callback(&timers, task);
            retire(&timers, id);
        });
        self.timers
            .borrow_mut()
            .live
            .insert(id, Handle::Once(timeout));
        id
    }

    fn every(&self, period: Duration, mut task: Box<dyn FnMut() -> Tick>) -> TimerId {
        let id = self.allocate();
        let timers = Rc::clone(&self.timers);
        let interval = Interval::new(millis(period).max(1), move || {
            if in_callback(&timers, &mut task) == Tick::Stop {
                retire(&timers, id);
            }
        });
        self.timers
            .borrow_mut()
            .live
            .insert(id, Handle::Repeating(interval));
        id
    }

    fn cancel(&self, id: TimerId) {
        retire(&self.timers, id);
    }
}
