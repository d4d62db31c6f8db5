//! One-shot visibility watchers.
//!
//! DESIGN
//! ======
//! Reveal and counter effects trigger the first time an element is visible
//! enough, then never again. [`OnceObserver`] owns that contract without
//! depending on `IntersectionObserver`: whoever measures visibility (the
//! browser observer callback, or [`visible_ratio`] over host geometry) calls
//! [`OnceObserver::notify`], which fires at most once per element and drops
//! the element from the watch list when it does.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use std::cell::RefCell;

use crate::consts::{COUNTER_THRESHOLD, REVEAL_BOTTOM_INSET_PX, REVEAL_THRESHOLD};
use crate::dom::Node;

/// When an element counts as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    /// Minimum visible fraction of the element, `0.0..=1.0`.
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport before measuring.
    pub bottom_inset: f64,
}

impl WatchOptions {
    pub const REVEAL: WatchOptions = WatchOptions { threshold: REVEAL_THRESHOLD, bottom_inset: REVEAL_BOTTOM_INSET_PX };
    pub const COUNTER: WatchOptions = WatchOptions { threshold: COUNTER_THRESHOLD, bottom_inset: 0.0 };
}

pub struct OnceObserver<N> {
    options: WatchOptions,
    watched: RefCell<Vec<N>>,
}

impl<N: Node> OnceObserver<N> {
    #[must_use]
    pub fn new(options: WatchOptions) -> Self {
        Self { options, watched: RefCell::new(Vec::new()) }
    }

    #[must_use]
    pub fn options(&self) -> WatchOptions {
        self.options
    }

    /// Start watching `node`. Watching twice is a no-op.
    pub fn watch(&self, node: N) {
        let mut watched = self.watched.borrow_mut();
        if !watched.contains(&node) {
            watched.push(node);
        }
    }

    #[must_use]
    pub fn is_watching(&self, node: &N) -> bool {
        self.watched.borrow().contains(node)
    }

    /// Snapshot of the nodes still being watched.
    #[must_use]
    pub fn watched(&self) -> Vec<N> {
        self.watched.borrow().clone()
    }

    /// Report that `node` is `ratio` visible. Returns `true` exactly once per
    /// watched node: the first time `ratio` reaches the threshold. The node is
    /// detached before returning.
    pub fn notify(&self, node: &N, ratio: f64) -> bool {
        if ratio <= 0.0 || ratio < self.options.threshold {
            return false;
        }
        let mut watched = self.watched.borrow_mut();
        let Some(index) = watched.iter().position(|n| n == node) else {
            return false;
        };
        watched.remove(index);
        true
    }
}

/// Visible fraction of a box `height` tall whose top edge sits `top` pixels
/// below the viewport top, for a viewport `viewport_height` tall with
/// `bottom_inset` pixels trimmed from its bottom.
#[must_use]
pub fn visible_ratio(top: f64, height: f64, viewport_height: f64, bottom_inset: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let view_bottom = viewport_height - bottom_inset;
    let visible = (top + height).min(view_bottom) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}
