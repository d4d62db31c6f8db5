//! `Host` and `Node` over the live `web-sys` window and document.
//!
//! DOM calls that can throw are logged at debug level and otherwise
//! ignored: a failed class or style write only loses a cosmetic effect.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{Host, Node, Viewport};

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::debug!("{op} failed: {err:?}");
    }
}

/// A live DOM element.
#[derive(Clone, Debug, PartialEq)]
pub struct WebNode(Element);

impl WebNode {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        &self.0
    }

    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl Node for WebNode {
    fn add_class(&self, name: &str) {
        report("classList.add", self.0.class_list().add_1(name));
    }

    fn remove_class(&self, name: &str) {
        report("classList.remove", self.0.class_list().remove_1(name));
    }

    fn toggle_class(&self, name: &str) {
        report("classList.toggle", self.0.class_list().toggle(name).map(drop));
    }

    fn has_class(&self, name: &str) -> bool {
        self.0.class_list().contains(name)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        report("setAttribute", self.0.set_attribute(name, value));
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.html() else {
            return;
        };
        let style = html.style();
        if value.is_empty() {
            report("style.removeProperty", style.remove_property(property).map(drop));
        } else {
            report("style.setProperty", style.set_property(property, value));
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn offset_top(&self) -> f64 {
        self.html().map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn offset_height(&self) -> f64 {
        self.html().map_or(0.0, |html| f64::from(html.offset_height()))
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(other.0.as_ref()))
    }
}

/// The page's window and document.
#[derive(Clone, Debug)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// `None` outside a browser main thread (no window or no document).
    #[must_use]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn pixels(what: &str, value: Result<JsValue, JsValue>) -> f64 {
    match value {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::debug!("reading {what} failed: {err:?}");
            0.0
        }
    }
}

impl Host for WebHost {
    type Node = WebNode;

    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::debug!("reading scrollY failed: {err:?}");
                0.0
            }
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(
            pixels("innerWidth", self.window.inner_width()),
            pixels("innerHeight", self.window.inner_height()),
        )
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn prefers_dark(&self) -> bool {
        matches!(self.window.match_media(PREFERS_DARK_QUERY), Ok(Some(query)) if query.matches())
    }

    fn element_by_id(&self, id: &str) -> Option<WebNode> {
        self.document.get_element_by_id(id).map(WebNode)
    }

    fn query_all(&self, selector: &str) -> Vec<WebNode> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("querySelectorAll({selector:?}) failed: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .map(WebNode)
            .collect()
    }

    fn query(&self, selector: &str) -> Option<WebNode> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(WebNode),
            Err(err) => {
                log::debug!("querySelector({selector:?}) failed: {err:?}");
                None
            }
        }
    }

    fn root(&self) -> Option<WebNode> {
        self.document.document_element().map(WebNode)
    }

    fn body(&self) -> Option<WebNode> {
        self.document.body().map(|body| WebNode(body.into()))
    }
}
