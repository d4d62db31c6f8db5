//! Registry of the page elements the controller drives.
//!
//! Collected once at startup from a [`Host`] and handed to each behavior
//! unit. Every slot is optional or possibly empty: a page missing an element
//! simply loses the matching effect.

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

use crate::dom::{Host, Node};

/// Element ids and selectors making up the page contract.
pub mod selectors {
    pub const NAVBAR_ID: &str = "navbar";
    pub const NAV_TOGGLE_ID: &str = "navToggle";
    pub const NAV_MENU_ID: &str = "navMenu";
    pub const THEME_TOGGLE_ID: &str = "themeToggle";
    pub const BACK_TO_TOP_ID: &str = "backToTop";

    pub const NAV_LINKS: &str = ".nav-link";
    pub const FILTER_BUTTONS: &str = ".filter-btn";
    pub const PORTFOLIO_ITEMS: &str = ".portfolio-item";
    pub const SECTIONS: &str = "section";
    pub const REVEAL_TARGETS: &str = ".skill-card, .portfolio-item, .about-text, .about-image, .contact-info, .contact-cta";
    pub const HERO_IMAGE: &str = ".hero-image";
    pub const HERO_TAGLINE: &str = ".hero-tagline";
    pub const STAT_NUMBERS: &str = ".stat-number";

    pub const HERO_SOCIALS: &str = ".hero-socials .social-link";
    pub const CONTACT_SOCIALS: &str = ".contact-socials .social-link";
    pub const FOOTER_SOCIALS: &str = ".footer-socials a";
    pub const EMAIL_LINK: &str = r#"a[href^="mailto:"]"#;
    pub const PHONE_LINK: &str = r#"a[href^="tel:"]"#;

    /// Anchors whose `href` contains `marker`.
    #[must_use]
    pub fn messaging_links(marker: &str) -> String {
        format!(r#"a[href*="{marker}"]"#)
    }
}

/// Social anchor groups rewritten position-wise at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialGroup {
    Hero,
    Contact,
    Footer,
}

impl SocialGroup {
    pub const ALL: [SocialGroup; 3] = [SocialGroup::Hero, SocialGroup::Contact, SocialGroup::Footer];

    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            SocialGroup::Hero => selectors::HERO_SOCIALS,
            SocialGroup::Contact => selectors::CONTACT_SOCIALS,
            SocialGroup::Footer => selectors::FOOTER_SOCIALS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Elements<N> {
    pub root: Option<N>,
    pub body: Option<N>,

    pub navbar: Option<N>,
    pub nav_toggle: Option<N>,
    pub nav_menu: Option<N>,
    pub nav_links: Vec<N>,
    pub sections: Vec<N>,

    pub theme_toggle: Option<N>,
    pub back_to_top: Option<N>,

    pub filter_buttons: Vec<N>,
    pub portfolio_items: Vec<N>,

    pub hero_image: Option<N>,
    pub hero_tagline: Option<N>,
    pub stat_numbers: Vec<N>,
    pub reveal_targets: Vec<N>,

    pub hero_socials: Vec<N>,
    pub contact_socials: Vec<N>,
    pub footer_socials: Vec<N>,
    pub messaging_links: Vec<N>,
    pub email_link: Option<N>,
    pub phone_link: Option<N>,
}

impl<N> Default for Elements<N> {
    fn default() -> Self {
        Self {
            root: None,
            body: None,
            navbar: None,
            nav_toggle: None,
            nav_menu: None,
            nav_links: Vec::new(),
            sections: Vec::new(),
            theme_toggle: None,
            back_to_top: None,
            filter_buttons: Vec::new(),
            portfolio_items: Vec::new(),
            hero_image: None,
            hero_tagline: None,
            stat_numbers: Vec::new(),
            reveal_targets: Vec::new(),
            hero_socials: Vec::new(),
            contact_socials: Vec::new(),
            footer_socials: Vec::new(),
            messaging_links: Vec::new(),
            email_link: None,
            phone_link: None,
        }
    }
}

impl<N: Node> Elements<N> {
    /// Look up every element of the page contract.
    pub fn collect<H: Host<Node = N>>(host: &H, messaging_marker: &str) -> Self {
        let messaging_links = if messaging_marker.is_empty() {
            Vec::new()
        } else {
            host.query_all(&selectors::messaging_links(messaging_marker))
        };
        let elements = Self {
            root: host.root(),
            body: host.body(),
            navbar: host.element_by_id(selectors::NAVBAR_ID),
            nav_toggle: host.element_by_id(selectors::NAV_TOGGLE_ID),
            nav_menu: host.element_by_id(selectors::NAV_MENU_ID),
            nav_links: host.query_all(selectors::NAV_LINKS),
            sections: host.query_all(selectors::SECTIONS),
            theme_toggle: host.element_by_id(selectors::THEME_TOGGLE_ID),
            back_to_top: host.element_by_id(selectors::BACK_TO_TOP_ID),
            filter_buttons: host.query_all(selectors::FILTER_BUTTONS),
            portfolio_items: host.query_all(selectors::PORTFOLIO_ITEMS),
            hero_image: host.query(selectors::HERO_IMAGE),
            hero_tagline: host.query(selectors::HERO_TAGLINE),
            stat_numbers: host.query_all(selectors::STAT_NUMBERS),
            reveal_targets: host.query_all(selectors::REVEAL_TARGETS),
            hero_socials: host.query_all(SocialGroup::Hero.selector()),
            contact_socials: host.query_all(SocialGroup::Contact.selector()),
            footer_socials: host.query_all(SocialGroup::Footer.selector()),
            messaging_links,
            email_link: host.query(selectors::EMAIL_LINK),
            phone_link: host.query(selectors::PHONE_LINK),
        };
        log::debug!(
            "collected page elements: {} nav links, {} sections, {} portfolio items, {} reveal targets",
            elements.nav_links.len(),
            elements.sections.len(),
            elements.portfolio_items.len(),
            elements.reveal_targets.len()
        );
        elements
    }

    #[must_use]
    pub fn social_group(&self, group: SocialGroup) -> &[N] {
        match group {
            SocialGroup::Hero => &self.hero_socials,
            SocialGroup::Contact => &self.contact_socials,
            SocialGroup::Footer => &self.footer_socials,
        }
    }

    /// Whether the mobile menu is currently open.
    #[must_use]
    pub fn nav_open(&self) -> bool {
        self.nav_menu.as_ref().is_some_and(|menu| menu.has_class("active"))
    }
}
