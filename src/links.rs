//! Startup rewrite of social, messaging and contact links from `SiteConfig`.
//!
//! The page ships placeholder anchors. Each social group lists its anchors in
//! [`Platform::GROUP_ORDER`]; a group with fewer anchors simply has its tail
//! platforms skipped. Messaging anchors are matched by the href they carry
//! after the social pass, so a social placeholder that happened to point at a
//! messaging URL keeps its platform link.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::config::{ContactInfo, Platform, SiteConfig, SocialLinks};
use crate::dom::Node;
use crate::elements::{Elements, SocialGroup};

/// Rewrite every configured link on the page. Returns how many anchors changed.
pub fn apply_links<N: Node>(elements: &Elements<N>, config: &SiteConfig) -> usize {
    let mut rewritten = 0;
    for group in SocialGroup::ALL {
        rewritten += rewrite_social_group(elements.social_group(group), &config.social);
    }
    rewritten += rewrite_messaging_links(&elements.messaging_links, &config.social, &config.messaging_marker);
    rewritten += rewrite_contact(elements, &config.contact);
    log::debug!("rewrote {rewritten} configured links");
    rewritten
}

/// Position-wise rewrite of one social group.
pub fn rewrite_social_group<N: Node>(anchors: &[N], social: &SocialLinks) -> usize {
    let mut rewritten = 0;
    for (anchor, platform) in anchors.iter().zip(Platform::GROUP_ORDER) {
        if let Some(url) = social.get(platform) {
            anchor.set_attribute("href", url);
            rewritten += 1;
        }
    }
    rewritten
}

/// Point every anchor whose href still contains `marker` at the whatsapp URL.
pub fn rewrite_messaging_links<N: Node>(anchors: &[N], social: &SocialLinks, marker: &str) -> usize {
    let Some(url) = social.get(Platform::Whatsapp) else {
        return 0;
    };
    if marker.is_empty() {
        return 0;
    }
    let mut rewritten = 0;
    for anchor in anchors {
        if anchor.attribute("href").is_some_and(|href| href.contains(marker)) {
            anchor.set_attribute("href", url);
            rewritten += 1;
        }
    }
    rewritten
}

fn rewrite_contact<N: Node>(elements: &Elements<N>, contact: &ContactInfo) -> usize {
    let mut rewritten = 0;
    if let Some(link) = &elements.email_link {
        if !contact.email.is_empty() {
            link.set_attribute("href", &format!("mailto:{}", contact.email));
            link.set_text(&contact.email);
            rewritten += 1;
        }
    }
    if let Some(link) = &elements.phone_link {
        if !contact.phone.is_empty() {
            link.set_attribute("href", &format!("tel:{}", contact.dial_string()));
            link.set_text(&contact.phone);
            rewritten += 1;
        }
    }
    rewritten
}
