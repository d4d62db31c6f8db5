//! Document abstraction consumed by the behavior units.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `web-sys` directly. It talks to a [`Host`]
//! (window + document) that hands out [`Node`] handles. The browser layer
//! implements both over real DOM objects; `crate::fake` implements them
//! in memory for tests.
//!
//! Node handles are shared references to the same underlying element, so
//! every mutator takes `&self` and clones are cheap.

/// A handle to one element.
pub trait Node: Clone + PartialEq {
    fn add_class(&self, name: &str);
    fn remove_class(&self, name: &str);
    fn toggle_class(&self, name: &str);
    fn has_class(&self, name: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    /// Set an inline style property. An empty value clears it.
    fn set_style(&self, property: &str, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Distance from the document top, in CSS pixels.
    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;

    /// Whether `other` is this node or one of its descendants.
    fn contains(&self, other: &Self) -> bool;
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Wide enough for the desktop layout (parallax, closed mobile menu).
    #[must_use]
    pub fn is_desktop(self) -> bool {
        self.width > crate::consts::DESKTOP_MIN_WIDTH_PX
    }
}

/// Pointer position in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Window and document services.
pub trait Host {
    type Node: Node;

    fn scroll_y(&self) -> f64;
    fn viewport(&self) -> Viewport;

    /// Smooth-scroll the window to `top`.
    fn scroll_to(&self, top: f64);

    /// Whether the system color-scheme query reports dark.
    fn prefers_dark(&self) -> bool;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First element matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
}

impl<H: Host + ?Sized> Host for &H {
    type Node = H::Node;

    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn scroll_to(&self, top: f64) {
        (**self).scroll_to(top);
    }

    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Node> {
        (**self).element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Self::Node> {
        (**self).query_all(selector)
    }

    fn query(&self, selector: &str) -> Option<Self::Node> {
        (**self).query(selector)
    }

    fn root(&self) -> Option<Self::Node> {
        (**self).root()
    }

    fn body(&self) -> Option<Self::Node> {
        (**self).body()
    }
}
