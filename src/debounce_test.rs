use std::cell::Cell;

use super::*;
use crate::timer::ManualScheduler;

fn setup() -> (Rc<ManualScheduler>, Debounce) {
    let sched = Rc::new(ManualScheduler::new());
    let debounce = Debounce::new(sched.clone(), Duration::from_millis(20));
    (sched, debounce)
}

// =============================================================
// Leading edge
// =============================================================

#[test]
fn first_call_runs_immediately() {
    let (_sched, debounce) = setup();
    assert!(debounce.admit());
    assert!(debounce.is_armed());
}

#[test]
fn burst_is_suppressed_until_quiet_window_passes() {
    let (sched, debounce) = setup();
    assert!(debounce.admit());
    for _ in 0..5 {
        sched.advance_ms(10);
        assert!(!debounce.admit(), "calls inside the window are suppressed");
    }
    sched.advance_ms(20);
    assert!(!debounce.is_armed());
    assert!(debounce.admit());
}

#[test]
fn window_is_exactly_wait_long() {
    let (sched, debounce) = setup();
    assert!(debounce.admit());
    sched.advance_ms(19);
    assert!(!debounce.admit());
    sched.advance_ms(19);
    assert!(debounce.is_armed());
    sched.advance_ms(1);
    assert!(!debounce.is_armed());
}

// =============================================================
// Trailing edge
// =============================================================

#[test]
fn defer_runs_only_the_last_action_after_quiet() {
    let (sched, debounce) = setup();
    let seen = Rc::new(Cell::new(0));
    for value in 1..=3 {
        let seen = Rc::clone(&seen);
        debounce.defer(move || seen.set(value));
        sched.advance_ms(5);
    }
    assert_eq!(seen.get(), 0);
    sched.advance_ms(20);
    assert_eq!(seen.get(), 3);
    assert_eq!(sched.pending(), 0);
}
