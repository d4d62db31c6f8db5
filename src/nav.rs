//! Navigation bar behavior: mobile menu, scroll state, active link, and
//! in-page smooth scrolling.
//!
//! The mobile menu has no state of its own. It is open iff the menu element
//! carries `active`; every transition either toggles or removes classes, so
//! repeated events are harmless.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ACTIVE_SECTION_OFFSET_PX, NAVBAR_SCROLLED_PX};
use crate::dom::{Host, Node, Viewport};
use crate::elements::Elements;

const ACTIVE: &str = "active";
const NAV_OPEN: &str = "nav-open";
const SCROLLED: &str = "scrolled";

/// Open the mobile menu if closed, close it if open.
pub fn toggle_nav<N: Node>(elements: &Elements<N>) {
    if let Some(toggle) = &elements.nav_toggle {
        toggle.toggle_class(ACTIVE);
    }
    if let Some(menu) = &elements.nav_menu {
        menu.toggle_class(ACTIVE);
    }
    if let Some(body) = &elements.body {
        body.toggle_class(NAV_OPEN);
    }
}

pub fn close_nav<N: Node>(elements: &Elements<N>) {
    if let Some(toggle) = &elements.nav_toggle {
        toggle.remove_class(ACTIVE);
    }
    if let Some(menu) = &elements.nav_menu {
        menu.remove_class(ACTIVE);
    }
    if let Some(body) = &elements.body {
        body.remove_class(NAV_OPEN);
    }
}

/// Close the open menu when a click lands outside the navbar.
pub fn close_on_outside_click<N: Node>(elements: &Elements<N>, target: Option<&N>) {
    let Some(navbar) = &elements.navbar else {
        return;
    };
    let inside = target.is_some_and(|t| navbar.contains(t));
    if !inside && elements.nav_open() {
        close_nav(elements);
    }
}

pub fn close_on_escape<N: Node>(elements: &Elements<N>, key: &str) {
    if key == "Escape" && elements.nav_open() {
        close_nav(elements);
    }
}

/// Force the menu closed once the desktop layout applies.
pub fn close_on_resize<N: Node>(elements: &Elements<N>, viewport: Viewport) {
    if viewport.is_desktop() {
        close_nav(elements);
    }
}

/// `scrolled` on the navbar iff the page is scrolled past the threshold.
pub fn handle_navbar_scroll<N: Node>(elements: &Elements<N>, scroll_y: f64) {
    let Some(navbar) = &elements.navbar else {
        return;
    };
    if scroll_y > NAVBAR_SCROLLED_PX {
        navbar.add_class(SCROLLED);
    } else {
        navbar.remove_class(SCROLLED);
    }
}

/// Mark the nav link of the section under the anchor line as active.
///
/// Link state is left alone when no section contains the anchor line.
pub fn update_active_nav_link<N: Node>(elements: &Elements<N>, scroll_y: f64) {
    let line = scroll_y + ACTIVE_SECTION_OFFSET_PX;
    for section in &elements.sections {
        let top = section.offset_top();
        if line < top || line >= top + section.offset_height() {
            continue;
        }
        let target = section
            .attribute("id")
            .map(|id| format!("#{id}"));
        for link in &elements.nav_links {
            link.remove_class(ACTIVE);
            if target.is_some() && link.attribute("href") == target {
                link.add_class(ACTIVE);
            }
        }
    }
}

/// Scroll to the section a `#fragment` link points at, leaving room for the
/// navbar, and close the mobile menu. Returns whether a scroll happened.
pub fn smooth_scroll<H: Host>(host: &H, elements: &Elements<H::Node>, link: &H::Node) -> bool {
    let Some(href) = link.attribute("href") else {
        return false;
    };
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        log::debug!("nav link {href:?} is not an in-page fragment");
        return false;
    };
    let Some(target) = host.element_by_id(id) else {
        log::debug!("nav link target #{id} not found");
        return false;
    };

    let nav_height = elements
        .navbar
        .as_ref()
        .map_or(0.0, Node::offset_height);
    host.scroll_to(target.offset_top() - nav_height);
    close_nav(elements);
    true
}

pub fn scroll_to_top<H: Host>(host: &H) {
    host.scroll_to(0.0);
}
