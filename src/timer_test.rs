use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

// =============================================================
// One-shot tasks
// =============================================================

#[test]
fn after_runs_once_when_due() {
    let sched = ManualScheduler::new();
    let hits = counter();
    let h = Rc::clone(&hits);
    sched.after(Duration::from_millis(300), Box::new(move || h.set(h.get() + 1)));

    sched.advance_ms(299);
    assert_eq!(hits.get(), 0);
    sched.advance_ms(1);
    assert_eq!(hits.get(), 1);
    sched.advance_ms(1000);
    assert_eq!(hits.get(), 1);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn cancel_prevents_pending_task() {
    let sched = ManualScheduler::new();
    let hits = counter();
    let h = Rc::clone(&hits);
    let id = sched.after(Duration::from_millis(50), Box::new(move || h.set(h.get() + 1)));
    sched.cancel(id);
    sched.advance_ms(100);
    assert_eq!(hits.get(), 0);
}

#[test]
fn tasks_run_in_due_order_then_schedule_order() {
    let sched = ManualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for (label, ms) in [("late", 30), ("first", 10), ("second", 10)] {
        let log = Rc::clone(&log);
        sched.after(Duration::from_millis(ms), Box::new(move || log.borrow_mut().push(label)));
    }
    sched.advance_ms(40);
    assert_eq!(*log.borrow(), vec!["first", "second", "late"]);
}

#[test]
fn task_may_schedule_follow_up_within_same_advance() {
    let sched = Rc::new(ManualScheduler::new());
    let hits = counter();
    let inner_sched = Rc::clone(&sched);
    let h = Rc::clone(&hits);
    sched.after(
        Duration::from_millis(10),
        Box::new(move || {
            let h = Rc::clone(&h);
            inner_sched.after(Duration::from_millis(10), Box::new(move || h.set(h.get() + 1)));
        }),
    );
    sched.advance_ms(25);
    assert_eq!(hits.get(), 1);
    assert_eq!(sched.now(), Duration::from_millis(25));
}

// =============================================================
// Repeating tasks
// =============================================================

#[test]
fn every_repeats_until_stop() {
    let sched = ManualScheduler::new();
    let hits = counter();
    let h = Rc::clone(&hits);
    sched.every(
        Duration::from_millis(16),
        Box::new(move || {
            h.set(h.get() + 1);
            if h.get() == 3 { Tick::Stop } else { Tick::Continue }
        }),
    );
    sched.advance_ms(1000);
    assert_eq!(hits.get(), 3);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn every_fires_once_per_elapsed_period() {
    let sched = ManualScheduler::new();
    let hits = counter();
    let h = Rc::clone(&hits);
    sched.every(
        Duration::from_millis(16),
        Box::new(move || {
            h.set(h.get() + 1);
            Tick::Continue
        }),
    );
    sched.advance_ms(160);
    assert_eq!(hits.get(), 10);
}

#[test]
fn repeating_task_can_cancel_itself() {
    let sched = Rc::new(ManualScheduler::new());
    let hits = counter();
    let id_slot = Rc::new(Cell::new(None::<TimerId>));
    let (h, slot, inner) = (Rc::clone(&hits), Rc::clone(&id_slot), Rc::clone(&sched));
    let id = sched.every(
        Duration::from_millis(5),
        Box::new(move || {
            h.set(h.get() + 1);
            if let Some(id) = slot.get() {
                inner.cancel(id);
            }
            Tick::Continue
        }),
    );
    id_slot.set(Some(id));
    sched.advance_ms(50);
    assert_eq!(hits.get(), 1);
}
