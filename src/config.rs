//! Maintainer-editable site configuration.
//!
//! DESIGN
//! ======
//! Social links, contact details and the few behavior switches live in one
//! immutable `SiteConfig` value handed to the controller at construction.
//! `SiteConfig::default()` carries the site owner's literal values; a page
//! may override any top-level section through JSON (see `from_json`). A
//! section present in the JSON replaces the default section wholesale.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_KEY: &str = "tikka-theme";
pub const DEFAULT_MESSAGING_MARKER: &str = "wa.me";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Social platforms the page links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Youtube,
    Fiverr,
    Github,
    Whatsapp,
}

impl Platform {
    /// Anchor order inside the hero, contact and footer social groups.
    pub const GROUP_ORDER: [Platform; 5] =
        [Platform::Facebook, Platform::Instagram, Platform::Youtube, Platform::Fiverr, Platform::Github];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Fiverr => "fiverr",
            Platform::Github => "github",
            Platform::Whatsapp => "whatsapp",
        }
    }
}

/// Platform → URL map. A missing or empty entry means "leave that link alone".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(BTreeMap<Platform, String>);

impl SocialLinks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, platform: Platform, url: impl Into<String>) -> Self {
        self.0.insert(platform, url.into());
        self
    }

    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.0
            .get(&platform)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}

/// Contact details shown in the contact block. Empty strings are treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    /// Shown by the page template; the controller only reports it at startup.
    pub location: String,
}

impl ContactInfo {
    /// The configured location, `None` when empty.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        Some(self.location.as_str()).filter(|location| !location.is_empty())
    }

    /// Phone number in `tel:` form, whitespace removed.
    #[must_use]
    pub fn dial_string(&self) -> String {
        self.phone.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

/// Everything the controller reads from configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name used in the startup greeting.
    pub owner: String,
    /// Second greeting line.
    pub headline: String,
    pub social: SocialLinks,
    pub contact: ContactInfo,
    /// `localStorage` key holding the theme preference.
    pub theme_key: String,
    /// Substring identifying messaging anchors rewritten to the whatsapp URL.
    pub messaging_marker: String,
    /// Type out the hero tagline one character at a time on startup.
    pub typing_effect: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "TIKKA".to_owned(),
            headline: "Web Developer | Graphic Designer | Creative Freelancer".to_owned(),
            social: SocialLinks::new()
                .with(Platform::Facebook, "https://www.facebook.com/share/1FfwXtZyqg/?mibextid=wwXIfr")
                .with(
                    Platform::Instagram,
                    "https://www.instagram.com/t_s_w_07_14_?igsh=MThrZ3d2ZndraThxbA%3D%3D&utm_source=qr",
                )
                .with(Platform::Youtube, "https://youtube.com/@tikka.abcd.0?si=Zgrk0-H8ZfL24qHB")
                .with(Platform::Fiverr, "https://fiverr.com/tikka_abcd")
                .with(Platform::Github, "https://github.com/TIKKA-AbCd")
                .with(
                    Platform::Whatsapp,
                    "https://wa.me/94776496564?text=Hi%20TIKKA,%20I%20saw%20your%20portfolio%20website%20and%20want%20to%20work%20with%20you.",
                ),
            contact: ContactInfo {
                email: "Tikka.abcd.0@gmail.com".to_owned(),
                phone: "+94 77 649 6564".to_owned(),
                location: "Sri Lanka".to_owned(),
            },
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            messaging_marker: DEFAULT_MESSAGING_MARKER.to_owned(),
            typing_effect: false,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config; missing sections fall back to `SiteConfig::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON or a
    /// field has the wrong shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
