use super::*;
use crate::fake::{FakeHost, FakeNode};

#[test]
fn collect_on_empty_page_yields_empty_registry() {
    let host = FakeHost::default();
    let elements = Elements::collect(&host, "wa.me");
    assert!(elements.navbar.is_none());
    assert!(elements.nav_links.is_empty());
    assert!(elements.email_link.is_none());
    assert!(!elements.nav_open());
    // Root and body always exist in a document.
    assert!(elements.root.is_some());
    assert!(elements.body.is_some());
}

#[test]
fn collect_finds_ids_and_selectors() {
    let host = FakeHost::default();
    let navbar = host.register("#navbar", FakeNode::new().with_id(selectors::NAVBAR_ID));
    let link = host.register(selectors::NAV_LINKS, FakeNode::new());
    let wa = host.register(&selectors::messaging_links("wa.me"), FakeNode::new());

    let elements = Elements::collect(&host, "wa.me");
    assert_eq!(elements.navbar, Some(navbar));
    assert_eq!(elements.nav_links, vec![link]);
    assert_eq!(elements.messaging_links, vec![wa]);
}

#[test]
fn empty_marker_matches_no_messaging_links() {
    let host = FakeHost::default();
    host.register(&selectors::messaging_links(""), FakeNode::new());
    let elements = Elements::collect(&host, "");
    assert!(elements.messaging_links.is_empty());
}

#[test]
fn social_groups_map_to_their_selectors() {
    let host = FakeHost::default();
    let footer = host.register(selectors::FOOTER_SOCIALS, FakeNode::new());
    let elements = Elements::collect(&host, "wa.me");
    assert_eq!(elements.social_group(SocialGroup::Footer), &[footer]);
    assert!(elements.social_group(SocialGroup::Hero).is_empty());
}

#[test]
fn nav_open_follows_menu_active_class() {
    let host = FakeHost::default();
    let menu = host.register("#navMenu", FakeNode::new().with_id(selectors::NAV_MENU_ID));
    let elements = Elements::collect(&host, "wa.me");
    assert!(!elements.nav_open());
    menu.add_class("active");
    assert!(elements.nav_open());
}
