//! Portfolio category filter.
//!
//! Showing and hiding are two-phase so a CSS transition never runs on an
//! element whose `display` is changing in the same frame:
//! - show: `display: block` now, fade/scale in after a short delay;
//! - hide: fade/scale out now, `display: none` once the transition is over.
//!
//! A new filter cancels any phase still pending from the previous one, so
//! rapid clicks always settle on the last selection.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::cell::RefCell;

use crate::consts::{FILTER_HIDE_DELAY, FILTER_SHOW_DELAY};
use crate::dom::Node;
use crate::elements::Elements;
use crate::timer::{Scheduler, TimerId};

pub const SHOW_ALL: &str = "all";

const ACTIVE: &str = "active";
const HIDDEN: &str = "hidden";

/// Whether an item of `category` stays visible under `filter`.
#[must_use]
pub fn matches(filter: &str, category: Option<&str>) -> bool {
    filter == SHOW_ALL || category == Some(filter)
}

#[derive(Debug, Default)]
pub struct PortfolioFilter {
    pending: RefCell<Vec<Option<TimerId>>>,
}

impl PortfolioFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `button`'s category. Returns `false` (changing nothing) when
    /// the button carries no `data-filter`.
    pub fn select<N: Node + 'static>(&self, elements: &Elements<N>, button: &N, scheduler: &dyn Scheduler) -> bool {
        let Some(filter) = button.attribute("data-filter") else {
            log::debug!("filter button without data-filter ignored");
            return false;
        };

        for other in &elements.filter_buttons {
            other.remove_class(ACTIVE);
        }
        button.add_class(ACTIVE);

        let mut pending = self.pending.borrow_mut();
        pending.resize(elements.portfolio_items.len(), None);
        for (item, slot) in elements.portfolio_items.iter().zip(pending.iter_mut()) {
            if let Some(id) = slot.take() {
                scheduler.cancel(id);
            }
            let category = item.attribute("data-category");
            *slot = Some(if matches(&filter, category.as_deref()) {
                show(item, scheduler)
            } else {
                hide(item, scheduler)
            });
        }
        log::debug!("portfolio filter set to {filter:?}");
        true
    }
}

fn show<N: Node + 'static>(item: &N, scheduler: &dyn Scheduler) -> TimerId {
    item.remove_class(HIDDEN);
    item.set_style("display", "block");
    let item = item.clone();
    scheduler.after(
        FILTER_SHOW_DELAY,
        Box::new(move || {
            item.set_style("opacity", "1");
            item.set_style("transform", "scale(1)");
        }),
    )
}

fn hide<N: Node + 'static>(item: &N, scheduler: &dyn Scheduler) -> TimerId {
    item.set_style("opacity", "0");
    item.set_style("transform", "scale(0.8)");
    let item = item.clone();
    scheduler.after(
        FILTER_HIDE_DELAY,
        Box::new(move || {
            item.add_class(HIDDEN);
            item.set_style("display", "none");
        }),
    )
}
