//! DOM listeners forwarding into the [`Controller`].
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `forget` once attached; each holds an `Rc` to the controller.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent,
};

use super::dom::{WebHost, WebNode};
use crate::controller::Controller;
use crate::dom::Point;
use crate::observer::WatchOptions;

type PageController = Controller<WebHost>;

fn listen<E>(target: &EventTarget, kind: &str, passive: bool, handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Run `boot` once the document is parsed.
///
/// # Errors
///
/// Fails if the listener cannot be attached.
pub fn on_content_loaded(target: &EventTarget, boot: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let mut boot = Some(boot);
    listen(target, "DOMContentLoaded", false, move |_: Event| {
        if let Some(boot) = boot.take() {
            boot();
        }
    })
}

fn target_node(event: &Event) -> Option<WebNode> {
    let target = event.target()?;
    target.dyn_ref::<Element>().cloned().map(WebNode::new)
}

/// Attach every page listener and visibility observer.
///
/// # Errors
///
/// Returns the first listener or observer the browser refused.
pub fn bind(controller: &Rc<PageController>) -> Result<(), JsValue> {
    let host = controller.host();
    let window: &EventTarget = host.window();
    let document: &EventTarget = host.document();
    let elements = controller.elements();

    // --- Window ---

    let ctrl = Rc::clone(controller);
    listen(window, "scroll", true, move |_: Event| {
        ctrl.on_scroll();
    })?;

    let ctrl = Rc::clone(controller);
    listen(window, "resize", true, move |_: Event| {
        ctrl.on_resize();
    })?;

    let ctrl = Rc::clone(controller);
    listen(window, "load", false, move |_: Event| ctrl.on_load())?;

    // --- Document ---

    let ctrl = Rc::clone(controller);
    listen(document, "click", false, move |event: Event| {
        ctrl.on_document_click(target_node(&event).as_ref());
    })?;

    let ctrl = Rc::clone(controller);
    listen(document, "keydown", false, move |event: KeyboardEvent| {
        ctrl.on_keydown(&event.key());
    })?;

    if controller.parallax_enabled() {
        let ctrl = Rc::clone(controller);
        listen(document, "mousemove", true, move |event: MouseEvent| {
            ctrl.on_pointer_move(Point::new(f64::from(event.page_x()), f64::from(event.page_y())));
        })?;
    }

    // --- Controls ---

    if let Some(toggle) = &elements.theme_toggle {
        let ctrl = Rc::clone(controller);
        listen(toggle.element(), "click", false, move |_: Event| {
            ctrl.on_theme_toggle_click();
        })?;
    }

    if let Some(toggle) = &elements.nav_toggle {
        let ctrl = Rc::clone(controller);
        listen(toggle.element(), "click", false, move |_: Event| ctrl.on_nav_toggle_click())?;
    }

    if let Some(button) = &elements.back_to_top {
        let ctrl = Rc::clone(controller);
        listen(button.element(), "click", false, move |_: Event| ctrl.on_back_to_top_click())?;
    }

    for link in &elements.nav_links {
        let ctrl = Rc::clone(controller);
        let node = link.clone();
        listen(link.element(), "click", false, move |event: Event| {
            ctrl.on_nav_link_click(&node, || event.prevent_default());
        })?;
    }

    for button in &elements.filter_buttons {
        let ctrl = Rc::clone(controller);
        let node = button.clone();
        listen(button.element(), "click", false, move |_: Event| {
            ctrl.on_filter_click(&node);
        })?;
    }

    // --- Visibility ---

    observe(controller, &controller.pending_reveals(), WatchOptions::REVEAL, PageController::on_reveal_visible)?;
    observe(controller, &controller.pending_counters(), WatchOptions::COUNTER, PageController::on_counter_visible)?;

    log::debug!("page listeners attached");
    Ok(())
}

/// Feed intersection entries for `nodes` into `on_visible`, unobserving each
/// node once it reports having fired.
fn observe(
    controller: &Rc<PageController>,
    nodes: &[WebNode],
    options: WatchOptions,
    on_visible: fn(&PageController, &WebNode, f64) -> bool,
) -> Result<(), JsValue> {
    if nodes.is_empty() {
        return Ok(());
    }

    let ctrl = Rc::clone(controller);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let node = WebNode::new(entry.target());
            if on_visible(&ctrl, &node, entry.intersection_ratio()) {
                observer.unobserve(node.element());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if options.bottom_inset > 0.0 {
        init.set_root_margin(&format!("0px 0px -{}px 0px", options.bottom_inset));
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for node in nodes {
        observer.observe(node.element());
    }
    callback.forget();
    Ok(())
}
