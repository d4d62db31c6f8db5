//! In-memory `Host`/`Node` implementations.
//!
//! Compiled for the crate's tests and, with the `testing` feature, for
//! integration tests and embedders that drive the controller without a
//! browser. Selector matching is deliberately dumb:
//! a node is returned by `query_all(sel)` only if it was registered under
//! that exact selector string.

#[cfg(test)]
#[path = "fake_test.rs"]
mod fake_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::{Host, Node, Viewport};

#[derive(Debug, Default)]
struct FakeNodeState {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    top: f64,
    height: f64,
    parent: Option<FakeNode>,
}

/// Shared handle to an in-memory element.
#[derive(Clone, Debug, Default)]
pub struct FakeNode(Rc<RefCell<FakeNodeState>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_class(self, name: &str) -> Self {
        self.add_class(name);
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Place the node at `top` with the given height (document coordinates).
    #[must_use]
    pub fn with_bounds(self, top: f64, height: f64) -> Self {
        {
            let mut state = self.0.borrow_mut();
            state.top = top;
            state.height = height;
        }
        self
    }

    #[must_use]
    pub fn child_of(self, parent: &FakeNode) -> Self {
        self.0.borrow_mut().parent = Some(parent.clone());
        self
    }

    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    fn parent(&self) -> Option<FakeNode> {
        self.0.borrow().parent.clone()
    }
}

impl Node for FakeNode {
    fn add_class(&self, name: &str) {
        let mut state = self.0.borrow_mut();
        if !state.classes.iter().any(|c| c == name) {
            state.classes.push(name.to_owned());
        }
    }

    fn remove_class(&self, name: &str) {
        self.0.borrow_mut().classes.retain(|c| c != name);
    }

    fn toggle_class(&self, name: &str) {
        if self.has_class(name) {
            self.remove_class(name);
        } else {
            self.add_class(name);
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == name)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.0.borrow_mut();
        if value.is_empty() {
            state.styles.remove(property);
        } else {
            state.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.0.borrow_mut().text);
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().height
    }

    fn contains(&self, other: &Self) -> bool {
        let mut cursor = Some(other.clone());
        while let Some(node) = cursor {
            if node == *self {
                return true;
            }
            cursor = node.parent();
        }
        false
    }
}

/// In-memory window + document.
#[derive(Debug)]
pub struct FakeHost {
    scroll_y: Cell<f64>,
    viewport: Cell<Viewport>,
    prefers_dark: Cell<bool>,
    root: FakeNode,
    body: FakeNode,
    nodes: RefCell<Vec<(String, FakeNode)>>,
    scrolls: RefCell<Vec<f64>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new(Viewport::new(1280.0, 800.0))
    }
}

impl FakeHost {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scroll_y: Cell::new(0.0),
            viewport: Cell::new(viewport),
            prefers_dark: Cell::new(false),
            root: FakeNode::new(),
            body: FakeNode::new(),
            nodes: RefCell::new(Vec::new()),
            scrolls: RefCell::new(Vec::new()),
        }
    }

    /// Make `node` answer `query_all(selector)`. Returns the node for chaining.
    pub fn register(&self, selector: &str, node: FakeNode) -> FakeNode {
        self.nodes
            .borrow_mut()
            .push((selector.to_owned(), node.clone()));
        node
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.prefers_dark.set(dark);
    }

    #[must_use]
    pub fn root_node(&self) -> FakeNode {
        self.root.clone()
    }

    #[must_use]
    pub fn body_node(&self) -> FakeNode {
        self.body.clone()
    }

    /// Every `scroll_to` target requested so far.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }
}

impl Host for FakeHost {
    type Node = FakeNode;

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
        self.scroll_y.set(top);
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn element_by_id(&self, id: &str) -> Option<FakeNode> {
        self.nodes
            .borrow()
            .iter()
            .map(|(_, node)| node)
            .find(|node| node.attribute("id").as_deref() == Some(id))
            .cloned()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeNode> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(sel, _)| sel == selector)
            .map(|(_, node)| node.clone())
            .collect()
    }

    fn root(&self) -> Option<FakeNode> {
        Some(self.root.clone())
    }

    fn body(&self) -> Option<FakeNode> {
        Some(self.body.clone())
    }
}

/// A complete portfolio page registered into a [`FakeHost`], with handles to
/// every node the controller touches.
///
/// Layout: four stacked sections (`home` 0–800, `about` 800–1400,
/// `portfolio` 1400–2400, `contact` 2400–3000), a 70px navbar holding the
/// menu and its links, three filter buttons (`all`, `web`, `design`) and
/// four portfolio items (`web`, `design`, `web`, `branding`).
#[derive(Debug)]
pub struct FakePage {
    pub host: FakeHost,
    pub navbar: FakeNode,
    pub nav_toggle: FakeNode,
    pub nav_menu: FakeNode,
    pub nav_links: Vec<FakeNode>,
    pub sections: Vec<FakeNode>,
    pub theme_toggle: FakeNode,
    pub back_to_top: FakeNode,
    pub filter_buttons: Vec<FakeNode>,
    pub portfolio_items: Vec<FakeNode>,
    pub about_text: FakeNode,
    pub hero_image: FakeNode,
    pub hero_tagline: FakeNode,
    pub stat_numbers: Vec<FakeNode>,
    pub hero_socials: Vec<FakeNode>,
    pub contact_socials: Vec<FakeNode>,
    pub footer_socials: Vec<FakeNode>,
    pub messaging_links: Vec<FakeNode>,
    pub email_link: FakeNode,
    pub phone_link: FakeNode,
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new(Viewport::new(1280.0, 800.0))
    }
}

impl FakePage {
    pub const SECTION_IDS: [&'static str; 4] = ["home", "about", "portfolio", "contact"];
    pub const CATEGORIES: [&'static str; 4] = ["web", "design", "web", "branding"];

    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        use crate::elements::selectors;

        let host = FakeHost::new(viewport);
        let body = host.body_node();

        let navbar = host.register(
            "#navbar",
            FakeNode::new()
                .with_id(selectors::NAVBAR_ID)
                .with_bounds(0.0, 70.0)
                .child_of(&body),
        );
        let nav_toggle = host.register(
            "#navToggle",
            FakeNode::new().with_id(selectors::NAV_TOGGLE_ID).child_of(&navbar),
        );
        let nav_menu = host.register(
            "#navMenu",
            FakeNode::new().with_id(selectors::NAV_MENU_ID).child_of(&navbar),
        );
        let nav_links = Self::SECTION_IDS
            .iter()
            .map(|id| {
                host.register(
                    selectors::NAV_LINKS,
                    FakeNode::new()
                        .with_attr("href", &format!("#{id}"))
                        .child_of(&nav_menu),
                )
            })
            .collect();

        let bounds = [(0.0, 800.0), (800.0, 600.0), (1400.0, 1000.0), (2400.0, 600.0)];
        let sections = Self::SECTION_IDS
            .iter()
            .zip(bounds)
            .map(|(id, (top, height))| {
                host.register(
                    selectors::SECTIONS,
                    FakeNode::new()
                        .with_id(id)
                        .with_bounds(top, height)
                        .child_of(&body),
                )
            })
            .collect();

        let theme_toggle = host.register(
            "#themeToggle",
            FakeNode::new().with_id(selectors::THEME_TOGGLE_ID).child_of(&navbar),
        );
        let back_to_top = host.register(
            "#backToTop",
            FakeNode::new().with_id(selectors::BACK_TO_TOP_ID).child_of(&body),
        );

        let filter_buttons = ["all", "web", "design"]
            .iter()
            .enumerate()
            .map(|(i, filter)| {
                let button = FakeNode::new().with_attr("data-filter", filter).child_of(&body);
                let button = if i == 0 { button.with_class("active") } else { button };
                host.register(selectors::FILTER_BUTTONS, button)
            })
            .collect();

        let portfolio_items: Vec<FakeNode> = Self::CATEGORIES
            .iter()
            .map(|category| {
                let item = FakeNode::new()
                    .with_class("portfolio-item")
                    .with_attr("data-category", category)
                    .with_bounds(1500.0, 300.0)
                    .child_of(&body);
                host.register(selectors::REVEAL_TARGETS, item.clone());
                host.register(selectors::PORTFOLIO_ITEMS, item)
            })
            .collect();

        let about_text = host.register(
            selectors::REVEAL_TARGETS,
            FakeNode::new()
                .with_class("about-text")
                .with_bounds(850.0, 400.0)
                .child_of(&body),
        );

        let hero_image = host.register(selectors::HERO_IMAGE, FakeNode::new().child_of(&body));
        let hero_tagline = host.register(
            selectors::HERO_TAGLINE,
            FakeNode::new().with_text("Designing for the web").child_of(&body),
        );

        let stat_numbers = ["50+", "120", "5"]
            .iter()
            .map(|text| {
                host.register(
                    selectors::STAT_NUMBERS,
                    FakeNode::new().with_text(text).with_bounds(900.0, 60.0).child_of(&body),
                )
            })
            .collect();

        let social_group = |selector: &str| -> Vec<FakeNode> {
            (0..5)
                .map(|_| host.register(selector, FakeNode::new().with_attr("href", "#").child_of(&body)))
                .collect()
        };
        let hero_socials = social_group(selectors::HERO_SOCIALS);
        let contact_socials = social_group(selectors::CONTACT_SOCIALS);
        let footer_socials = social_group(selectors::FOOTER_SOCIALS);

        let messaging_selector = selectors::messaging_links(crate::config::DEFAULT_MESSAGING_MARKER);
        let messaging_links = (0..2)
            .map(|_| {
                host.register(
                    &messaging_selector,
                    FakeNode::new().with_attr("href", "https://wa.me/000").child_of(&body),
                )
            })
            .collect();

        let email_link = host.register(
            selectors::EMAIL_LINK,
            FakeNode::new()
                .with_attr("href", "mailto:old@example.com")
                .with_text("old@example.com")
                .child_of(&body),
        );
        let phone_link = host.register(
            selectors::PHONE_LINK,
            FakeNode::new()
                .with_attr("href", "tel:000")
                .with_text("000")
                .child_of(&body),
        );

        Self {
            host,
            navbar,
            nav_toggle,
            nav_menu,
            nav_links,
            sections,
            theme_toggle,
            back_to_top,
            filter_buttons,
            portfolio_items,
            about_text,
            hero_image,
            hero_tagline,
            stat_numbers,
            hero_socials,
            contact_socials,
            footer_socials,
            messaging_links,
            email_link,
            phone_link,
        }
    }

    /// Registry over this page, as the controller would collect it.
    #[must_use]
    pub fn elements(&self) -> crate::elements::Elements<FakeNode> {
        crate::elements::Elements::collect(&self.host, crate::config::DEFAULT_MESSAGING_MARKER)
    }
}
