//! Page controller: owns configuration, the element registry, timers and
//! watchers, and routes every page event to its behavior unit.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser layer (`crate::web`) translates DOM events into the `on_*`
//! methods below and feeds intersection entries into `on_reveal_visible` /
//! `on_counter_visible`. Everything here is browser-free, so tests drive a
//! `Controller<FakeHost>` with a `ManualScheduler` and `MemoryStore`.
//!
//! All handlers take `&self`. Scheduled tasks only capture node handles,
//! never the controller, so a task may fire while a handler is running.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::consts::DEBOUNCE_WAIT;
use crate::debounce::Debounce;
use crate::dom::{Host, Node, Point};
use crate::effects;
use crate::elements::Elements;
use crate::filter::PortfolioFilter;
use crate::links;
use crate::nav;
use crate::observer::{visible_ratio, OnceObserver, WatchOptions};
use crate::storage::PreferenceStore;
use crate::theme::{self, Theme};
use crate::timer::Scheduler;

const CALL_TO_ACTION: &str = "Looking for a developer? Let's work together!";

pub struct Controller<H: Host> {
    host: H,
    config: SiteConfig,
    elements: Elements<H::Node>,
    scheduler: Rc<dyn Scheduler>,
    store: Box<dyn PreferenceStore>,
    scroll_gate: Debounce,
    resize_gate: Debounce,
    reveal: OnceObserver<H::Node>,
    counters: OnceObserver<H::Node>,
    filter: PortfolioFilter,
    parallax: Cell<bool>,
}

impl<H> Controller<H>
where
    H: Host,
    H::Node: 'static,
{
    /// Collect the page's elements from `host`. Nothing is mutated until
    /// [`Controller::start`].
    pub fn new(host: H, config: SiteConfig, store: Box<dyn PreferenceStore>, scheduler: Rc<dyn Scheduler>) -> Self {
        let elements = Elements::collect(&host, &config.messaging_marker);
        Self {
            scroll_gate: Debounce::new(Rc::clone(&scheduler), DEBOUNCE_WAIT),
            resize_gate: Debounce::new(Rc::clone(&scheduler), DEBOUNCE_WAIT),
            reveal: OnceObserver::new(WatchOptions::REVEAL),
            counters: OnceObserver::new(WatchOptions::COUNTER),
            filter: PortfolioFilter::new(),
            parallax: Cell::new(false),
            host,
            config,
            elements,
            scheduler,
            store,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn elements(&self) -> &Elements<H::Node> {
        &self.elements
    }

    /// Elements still waiting for their reveal.
    #[must_use]
    pub fn pending_reveals(&self) -> Vec<H::Node> {
        self.reveal.watched()
    }

    /// Stat counters that have not started yet.
    #[must_use]
    pub fn pending_counters(&self) -> Vec<H::Node> {
        self.counters.watched()
    }

    #[must_use]
    pub fn parallax_enabled(&self) -> bool {
        self.parallax.get()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        theme::current(&self.elements)
    }

    // --- Startup ---

    /// Content-loaded initialization: theme, link rewrites, watchers,
    /// parallax and the optional typing effect. Returns the applied theme.
    pub fn start(&self) -> Theme {
        let theme = theme::init_theme(
            &self.elements,
            self.store.as_ref(),
            &self.config.theme_key,
            self.host.prefers_dark(),
        );
        links::apply_links(&self.elements, &self.config);

        effects::prepare_reveal(&self.elements, &self.reveal);
        for stat in &self.elements.stat_numbers {
            self.counters.watch(stat.clone());
        }

        let desktop = self.host.viewport().is_desktop();
        self.parallax.set(desktop && self.elements.hero_image.is_some());

        if self.config.typing_effect {
            if let Some(tagline) = &self.elements.hero_tagline {
                effects::start_typing(tagline, self.scheduler.as_ref());
            }
        }

        self.welcome();
        log::debug!("controller ready: theme {theme}, parallax {}", self.parallax.get());
        theme
    }

    fn welcome(&self) {
        log::info!("Welcome to {}'s Portfolio!", self.config.owner);
        if !self.config.headline.is_empty() {
            log::info!("{}", self.config.headline);
        }
        log::info!("{CALL_TO_ACTION}");
        if let Some(location) = self.config.contact.location() {
            log::debug!("based in {location}");
        }
    }

    /// Window `load`: every asset is in.
    pub fn on_load(&self) {
        effects::mark_loaded(&self.elements);
    }

    // --- Window events ---

    /// Debounced scroll: navbar state, active link, back-to-top. Returns
    /// whether this event was handled or swallowed by the debounce window.
    pub fn on_scroll(&self) -> bool {
        if !self.scroll_gate.admit() {
            return false;
        }
        let scroll_y = self.host.scroll_y();
        nav::handle_navbar_scroll(&self.elements, scroll_y);
        nav::update_active_nav_link(&self.elements, scroll_y);
        effects::handle_back_to_top(&self.elements, scroll_y);
        true
    }

    /// Debounced resize: the desktop layout has no mobile menu.
    pub fn on_resize(&self) -> bool {
        if !self.resize_gate.admit() {
            return false;
        }
        nav::close_on_resize(&self.elements, self.host.viewport());
        true
    }

    pub fn on_pointer_move(&self, pointer: Point) {
        if !self.parallax.get() {
            return;
        }
        if let Some(image) = &self.elements.hero_image {
            effects::apply_parallax(image, self.host.viewport(), pointer);
        }
    }

    // --- Document events ---

    /// Any click on the document. `target` is `None` when the event target
    /// is not an element.
    pub fn on_document_click(&self, target: Option<&H::Node>) {
        nav::close_on_outside_click(&self.elements, target);
    }

    pub fn on_keydown(&self, key: &str) {
        nav::close_on_escape(&self.elements, key);
    }

    // --- Control clicks ---

    pub fn on_theme_toggle_click(&self) -> Theme {
        theme::toggle_theme(&self.elements, self.store.as_ref(), &self.config.theme_key, self.scheduler.as_ref())
    }

    pub fn on_nav_toggle_click(&self) {
        nav::toggle_nav(&self.elements);
    }

    /// Nav links never navigate on their own: `prevent_default` runs for
    /// every click, whatever the link points at. Returns whether the click
    /// scrolled to a section.
    pub fn on_nav_link_click(&self, link: &H::Node, prevent_default: impl FnOnce()) -> bool {
        prevent_default();
        nav::smooth_scroll(&self.host, &self.elements, link)
    }

    pub fn on_back_to_top_click(&self) {
        nav::scroll_to_top(&self.host);
    }

    pub fn on_filter_click(&self, button: &H::Node) -> bool {
        self.filter.select(&self.elements, button, self.scheduler.as_ref())
    }

    // --- Visibility ---

    /// A reveal target is `ratio` visible. Returns whether it was revealed now.
    pub fn on_reveal_visible(&self, node: &H::Node, ratio: f64) -> bool {
        if !self.reveal.notify(node, ratio) {
            return false;
        }
        effects::reveal(node);
        true
    }

    /// A stat number is `ratio` visible. Returns whether its count-up started.
    pub fn on_counter_visible(&self, node: &H::Node, ratio: f64) -> bool {
        if !self.counters.notify(node, ratio) {
            return false;
        }
        effects::animate_counter(node, self.scheduler.as_ref()).is_some()
    }

    /// Measure every watched element against the current viewport and feed
    /// the results to the watchers. For hosts without a native intersection
    /// observer.
    pub fn sweep_visibility(&self) {
        let scroll_y = self.host.scroll_y();
        let viewport = self.host.viewport();
        let ratio = |node: &H::Node, options: WatchOptions| {
            visible_ratio(node.offset_top() - scroll_y, node.offset_height(), viewport.height, options.bottom_inset)
        };
        for node in self.reveal.watched() {
            self.on_reveal_visible(&node, ratio(&node, self.reveal.options()));
        }
        for node in self.counters.watched() {
            self.on_counter_visible(&node, ratio(&node, self.counters.options()));
        }
    }
}
