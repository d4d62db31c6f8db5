//! Scroll- and pointer-driven visual effects: back-to-top visibility,
//! one-shot reveal, stat counters, hero parallax, and the tagline typing
//! effect.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::consts::{BACK_TO_TOP_PX, COUNTER_DURATION, COUNTER_TICK, PARALLAX_DIVISOR, TYPING_TICK};
use crate::dom::{Node, Point, Viewport};
use crate::elements::Elements;
use crate::observer::OnceObserver;
use crate::timer::{Scheduler, Tick, TimerId};

const REVEAL: &str = "reveal";
const REVEALED: &str = "active";

// =============================================================================
// BACK TO TOP
// =============================================================================

pub fn handle_back_to_top<N: Node>(elements: &Elements<N>, scroll_y: f64) {
    let Some(button) = &elements.back_to_top else {
        return;
    };
    if scroll_y > BACK_TO_TOP_PX {
        button.add_class("visible");
    } else {
        button.remove_class("visible");
    }
}

// =============================================================================
// REVEAL
// =============================================================================

/// Put every reveal target in its hidden starting state and watch it.
pub fn prepare_reveal<N: Node>(elements: &Elements<N>, observer: &OnceObserver<N>) {
    for target in &elements.reveal_targets {
        target.add_class(REVEAL);
        observer.watch(target.clone());
    }
}

pub fn reveal<N: Node>(node: &N) {
    node.add_class(REVEAL);
    node.add_class(REVEALED);
}

// =============================================================================
// COUNTERS
// =============================================================================

/// Leading integer of `text`, the way the page's stat numbers are written
/// (`"50+"` → 50). `None` when the text does not start with a number.
#[must_use]
pub fn parse_counter_target(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let Ok(magnitude) = digits[..end].parse::<i32>() else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Linear count-up from zero to `target`, one frame per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i32,
    increment: f64,
    value: f64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: i32) -> Self {
        let frames = u32::try_from(COUNTER_DURATION.as_millis() / COUNTER_TICK.as_millis())
            .unwrap_or(1)
            .max(1);
        Self { target, increment: f64::from(target) / f64::from(frames), value: 0.0 }
    }

    /// Advance one frame. Returns the text to display and whether to keep going.
    pub fn step(&mut self) -> (String, Tick) {
        self.value += self.increment;
        if self.value >= f64::from(self.target) {
            (format!("{}+", self.target), Tick::Stop)
        } else {
            (format!("{}+", self.value.floor()), Tick::Continue)
        }
    }
}

/// Start counting `node` up to the number it currently shows. Returns `None`
/// (leaving the text alone) when the text has no leading integer.
pub fn animate_counter<N: Node + 'static>(node: &N, scheduler: &dyn Scheduler) -> Option<TimerId> {
    let text = node.text();
    let Some(target) = parse_counter_target(&text) else {
        log::debug!("stat counter text {text:?} has no leading integer");
        return None;
    };
    let mut animation = CounterAnimation::new(target);
    let node = node.clone();
    Some(scheduler.every(
        COUNTER_TICK,
        Box::new(move || {
            let (frame, tick) = animation.step();
            node.set_text(&frame);
            tick
        }),
    ))
}

// =============================================================================
// PARALLAX
// =============================================================================

/// Inverse parallax offset for a pointer at `pointer`: the image drifts away
/// from the pointer relative to the viewport center.
#[must_use]
pub fn parallax_offset(viewport: Viewport, pointer: Point) -> Point {
    Point::new(
        (viewport.width / 2.0 - pointer.x) / PARALLAX_DIVISOR,
        (viewport.height / 2.0 - pointer.y) / PARALLAX_DIVISOR,
    )
}

pub fn apply_parallax<N: Node>(image: &N, viewport: Viewport, pointer: Point) {
    let offset = parallax_offset(viewport, pointer);
    image.set_style("transform", &format!("translateX({}px) translateY({}px)", offset.x, offset.y));
}

// =============================================================================
// TYPING
// =============================================================================

/// Retype the tagline's text one character per tick.
pub fn start_typing<N: Node + 'static>(tagline: &N, scheduler: &dyn Scheduler) -> Option<TimerId> {
    let full: Vec<char> = tagline.text().chars().collect();
    if full.is_empty() {
        return None;
    }
    tagline.set_text("");
    tagline.set_style("opacity", "1");

    let mut typed = String::with_capacity(full.len());
    let node = tagline.clone();
    let mut next = 0;
    Some(scheduler.every(
        TYPING_TICK,
        Box::new(move || {
            let Some(c) = full.get(next) else {
                return Tick::Stop;
            };
            next += 1;
            typed.push(*c);
            node.set_text(&typed);
            if next < full.len() { Tick::Continue } else { Tick::Stop }
        }),
    ))
}

// =============================================================================
// PAGE LOAD
// =============================================================================

/// Signal the preloader styles that every asset has loaded.
pub fn mark_loaded<N: Node>(elements: &Elements<N>) {
    if let Some(body) = &elements.body {
        body.add_class("loaded");
    }
}
