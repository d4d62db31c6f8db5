use super::*;
use crate::fake::FakePage;
use crate::storage::MemoryStore;
use crate::timer::ManualScheduler;

const KEY: &str = "tikka-theme";

fn root_theme(page: &FakePage) -> Option<String> {
    page.host.root_node().attribute(THEME_ATTRIBUTE)
}

// =============================================================
// Theme value
// =============================================================

#[test]
fn parse_accepts_only_known_names() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_and_display_matches_storage_form() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Light.to_string(), "light");
}

// =============================================================
// init_theme
// =============================================================

#[test]
fn first_visit_defaults_to_dark_and_persists() {
    let page = FakePage::default();
    let store = MemoryStore::new();
    let theme = init_theme(&page.elements(), &store, KEY, false);
    assert_eq!(theme, Theme::Dark);
    assert_eq!(root_theme(&page).as_deref(), Some("dark"));
    assert_eq!(store.peek(KEY).as_deref(), Some("dark"));
}

#[test]
fn system_light_preference_is_ignored() {
    let page = FakePage::default();
    let store = MemoryStore::new();
    assert_eq!(init_theme(&page.elements(), &store, KEY, false), Theme::Dark);
    let store = MemoryStore::new();
    assert_eq!(init_theme(&page.elements(), &store, KEY, true), Theme::Dark);
}

#[test]
fn stored_preference_wins() {
    let page = FakePage::default();
    let store = MemoryStore::new().with_entry(KEY, "light");
    assert_eq!(init_theme(&page.elements(), &store, KEY, true), Theme::Light);
    assert_eq!(root_theme(&page).as_deref(), Some("light"));
}

#[test]
fn unrecognized_stored_value_is_replaced_by_default() {
    let page = FakePage::default();
    let store = MemoryStore::new().with_entry(KEY, "sepia");
    assert_eq!(init_theme(&page.elements(), &store, KEY, false), Theme::Dark);
    assert_eq!(store.peek(KEY).as_deref(), Some("dark"));
}

#[test]
fn unavailable_storage_still_applies_theme() {
    let page = FakePage::default();
    let store = MemoryStore::unavailable();
    assert_eq!(init_theme(&page.elements(), &store, KEY, false), Theme::Dark);
    assert_eq!(root_theme(&page).as_deref(), Some("dark"));
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_parity_matches_persisted_value() {
    for n in 0..8 {
        let page = FakePage::default();
        let elements = page.elements();
        let store = MemoryStore::new();
        let sched = ManualScheduler::new();
        init_theme(&elements, &store, KEY, false);
        for _ in 0..n {
            toggle_theme(&elements, &store, KEY, &sched);
        }
        let expected = if n % 2 == 0 { "dark" } else { "light" };
        assert_eq!(store.peek(KEY).as_deref(), Some(expected), "after {n} toggles");
        assert_eq!(root_theme(&page).as_deref(), Some(expected));
    }
}

#[test]
fn toggle_from_unset_attribute_goes_dark() {
    let page = FakePage::default();
    let store = MemoryStore::new();
    let sched = ManualScheduler::new();
    assert_eq!(toggle_theme(&page.elements(), &store, KEY, &sched), Theme::Dark);
}

#[test]
fn toggle_spins_control_for_300ms() {
    let page = FakePage::default();
    let store = MemoryStore::new();
    let sched = ManualScheduler::new();
    toggle_theme(&page.elements(), &store, KEY, &sched);

    assert_eq!(page.theme_toggle.style("transform").as_deref(), Some("rotate(360deg)"));
    sched.advance_ms(299);
    assert!(page.theme_toggle.style("transform").is_some());
    sched.advance_ms(1);
    assert_eq!(page.theme_toggle.style("transform"), None);
}

#[test]
fn toggle_with_unavailable_storage_is_session_only() {
    let page = FakePage::default();
    let store = MemoryStore::unavailable();
    let sched = ManualScheduler::new();
    let elements = page.elements();
    init_theme(&elements, &store, KEY, false);
    assert_eq!(toggle_theme(&elements, &store, KEY, &sched), Theme::Light);
    assert_eq!(root_theme(&page).as_deref(), Some("light"));
    assert_eq!(store.peek(KEY), None);
}
