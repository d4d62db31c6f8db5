//! Color theme initialization and toggle.
//!
//! The active theme is the `data-theme` attribute on the `<html>` element;
//! stylesheet variables key off it. The preference is persisted under the
//! configured storage key. Persistence is best effort: when storage is
//! unavailable the theme still applies for the current session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::consts::THEME_SPIN;
use crate::dom::Node;
use crate::elements::Elements;
use crate::storage::PreferenceStore;
use crate::timer::Scheduler;

pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply the stored preference, or default to dark and store that.
///
/// `prefers_dark` is the system color-scheme answer. It is logged but does
/// not influence the default: first visits always start dark.
pub fn init_theme<N: Node>(elements: &Elements<N>, store: &dyn PreferenceStore, key: &str, prefers_dark: bool) -> Theme {
    let saved = match store.load(key) {
        Ok(saved) => saved,
        Err(err) => {
            log::debug!("theme preference unreadable: {err}");
            None
        }
    };

    if let Some(raw) = saved {
        if let Some(theme) = Theme::parse(&raw) {
            apply(elements, theme);
            return theme;
        }
        log::debug!("ignoring unrecognized stored theme {raw:?}");
    }

    log::debug!("no stored theme (system prefers dark: {prefers_dark}); defaulting to dark");
    let theme = Theme::Dark;
    apply(elements, theme);
    persist(store, key, theme);
    theme
}

/// Theme currently applied to the document. Anything but `dark` counts as light.
#[must_use]
pub fn current<N: Node>(elements: &Elements<N>) -> Theme {
    let attr = elements
        .root
        .as_ref()
        .and_then(|root| root.attribute(THEME_ATTRIBUTE));
    if attr.as_deref() == Some("dark") { Theme::Dark } else { Theme::Light }
}

/// Flip the theme, persist it, and spin the toggle control briefly.
pub fn toggle_theme<N: Node + 'static>(
    elements: &Elements<N>,
    store: &dyn PreferenceStore,
    key: &str,
    scheduler: &dyn Scheduler,
) -> Theme {
    let next = current(elements).toggled();
    apply(elements, next);
    persist(store, key, next);

    if let Some(toggle) = &elements.theme_toggle {
        toggle.set_style("transform", "rotate(360deg)");
        let toggle = toggle.clone();
        scheduler.after(THEME_SPIN, Box::new(move || toggle.set_style("transform", "")));
    }
    next
}

pub fn apply<N: Node>(elements: &Elements<N>, theme: Theme) {
    if let Some(root) = &elements.root {
        root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

fn persist(store: &dyn PreferenceStore, key: &str, theme: Theme) {
    if let Err(err) = store.store(key, theme.as_str()) {
        log::debug!("theme preference not persisted: {err}");
    }
}
