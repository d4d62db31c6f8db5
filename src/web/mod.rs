//! Browser bindings and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` implements `Host`/`Node` over `web-sys`, `storage` wraps
//! `localStorage`, `scheduler` runs timers through `gloo-timers`, and
//! `events` attaches the DOM listeners and intersection observers that feed
//! the [`Controller`]. `start` is the module's `#[wasm_bindgen(start)]`
//! hook: it installs logging, waits for the document to be parsed, then
//! builds and starts one controller for the page.

pub mod dom;
pub mod events;
pub mod scheduler;
pub mod storage;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use self::dom::WebHost;
use self::scheduler::BrowserScheduler;
use self::storage::LocalStore;
use crate::config::SiteConfig;
use crate::controller::Controller;

/// Id of the optional `<script type="application/json">` carrying a
/// `SiteConfig` override.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::warn!("console logger not installed: {err}");
    }

    let Some(host) = WebHost::current() else {
        log::warn!("no window or document; page behavior disabled");
        return;
    };
    let document = host.document().clone();
    if document.ready_state() == "loading" {
        if let Err(err) = events::on_content_loaded(&document, boot) {
            log::warn!("cannot wait for DOMContentLoaded: {err:?}");
        }
    } else {
        boot();
    }
}

fn boot() {
    let Some(host) = WebHost::current() else {
        return;
    };
    let config = page_config(host.document());
    let loaded = host.document().ready_state() == "complete";

    let controller = Rc::new(Controller::new(
        host,
        config,
        Box::new(LocalStore::new()),
        Rc::new(BrowserScheduler::new()),
    ));
    controller.start();
    if let Err(err) = events::bind(&controller) {
        log::warn!("page listeners incomplete: {err:?}");
    }
    // `load` already fired before we could listen for it.
    if loaded {
        controller.on_load();
    }
}

/// Config from the page's `#site-config` script, falling back to the
/// built-in defaults when absent or malformed.
fn page_config(document: &Document) -> SiteConfig {
    let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
        return SiteConfig::default();
    };
    let raw = script.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using built-in site config");
            SiteConfig::default()
        }
    }
}
