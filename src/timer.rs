//! Timer scheduling.
//!
//! DESIGN
//! ======
//! Every delayed effect (theme spin reset, staged filter transitions, counter
//! frames, typing, debounce windows) goes through [`Scheduler`] instead of
//! ambient `setTimeout`/`setInterval`. Each scheduled task gets a
//! [`TimerId`] that can cancel it. [`ManualScheduler`] advances a virtual
//! clock explicitly so tests are deterministic; the browser layer provides
//! a `gloo-timers` implementation.
//!
//! Implementations must not hold internal borrows while running a task: tasks
//! routinely schedule or cancel other timers.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::time::Duration;

/// Cancellation token for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Returned by repeating tasks to keep or stop the interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId;

    /// Run `task` every `period` until it returns [`Tick::Stop`] or is cancelled.
    fn every(&self, period: Duration, task: Box<dyn FnMut() -> Tick>) -> TimerId;

    /// Cancel a pending task. Unknown or finished ids are ignored.
    fn cancel(&self, id: TimerId);
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeating { period: Duration, run: Box<dyn FnMut() -> Tick> },
}

struct Pending {
    id: TimerId,
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    pending: Vec<Pending>,
    running: Option<TimerId>,
    running_cancelled: bool,
}

impl ManualState {
    fn push(&mut self, id: TimerId, due: Duration, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { id, due, seq, task });
    }

    fn alloc_id(&mut self) -> TimerId {
        self.next_id += 1;
        TimerId(self.next_id)
    }

    /// Remove and return the earliest task due at or before `limit`.
    fn pop_due(&mut self, limit: Duration) -> Option<Pending> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= limit)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(index))
    }
}

/// Virtual-clock scheduler. Nothing runs until [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ManualState>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move the clock forward by `dt`, running every task that falls due in
    /// order of due time (ties in scheduling order).
    pub fn advance(&self, dt: Duration) {
        let target = self.state.borrow().now + dt;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let next = state.pop_due(target);
                if let Some(p) = &next {
                    state.now = p.due;
                    state.running = Some(p.id);
                    state.running_cancelled = false;
                }
                next
            };
            let Some(Pending { id, due, task, .. }) = next else {
                break;
            };

            let again = match task {
                Task::Once(run) => {
                    run();
                    None
                }
                Task::Repeating { period, mut run } => match run() {
                    Tick::Continue => Some((period, run)),
                    Tick::Stop => None,
                },
            };

            let mut state = self.state.borrow_mut();
            state.running = None;
            if let Some((period, run)) = again {
                if !state.running_cancelled {
                    state.push(id, due + period, Task::Repeating { period, run });
                }
            }
        }
        self.state.borrow_mut().now = target;
    }

    /// Convenience for `advance(Duration::from_millis(ms))`.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = state.alloc_id();
        let due = state.now + delay;
        state.push(id, due, Task::Once(task));
        id
    }

    fn every(&self, period: Duration, task: Box<dyn FnMut() -> Tick>) -> TimerId {
        // A zero period would spin `advance` forever.
        let period = period.max(Duration::from_millis(1));
        let mut state = self.state.borrow_mut();
        let id = state.alloc_id();
        let due = state.now + period;
        state.push(id, due, Task::Repeating { period, run: task });
        id
    }

    fn cancel(&self, id: TimerId) {
        let mut state = self.state.borrow_mut();
        if state.running == Some(id) {
            state.running_cancelled = true;
        }
        state.pending.retain(|p| p.id != id);
    }
}
