//! Client-side behavior for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and attached to a static page whose
//! markup and styles already exist. It owns the page's interactive state:
//! the persisted color theme, the mobile navigation menu, scroll-driven
//! navbar/back-to-top/active-link state, the portfolio category filter, the
//! reveal, counter, parallax and typing effects, and the startup rewrite of
//! social and contact links from [`config::SiteConfig`].
//!
//! Everything except [`web`] is browser-free: behavior units talk to the
//! page through the [`dom::Host`] and [`dom::Node`] traits, to time through
//! [`timer::Scheduler`], and to storage through
//! [`storage::PreferenceStore`], so the whole controller runs under
//! `cargo test` against the in-memory `fake` page. That module is compiled
//! for unit tests and behind the `testing` feature only; the page lifecycle
//! tests in `tests/startup.rs` need `cargo test --features testing`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Event routing; owns config, elements, timers, watchers |
//! | [`config`] | `SiteConfig`: social links, contact details, switches |
//! | [`dom`] | `Host`/`Node` traits, viewport and pointer types |
//! | [`elements`] | Selector contract and the collected element registry |
//! | [`theme`] | Theme init, toggle, persistence |
//! | [`nav`] | Mobile menu, navbar scroll state, active link, smooth scroll |
//! | [`effects`] | Back-to-top, reveal, counters, parallax, typing, load flag |
//! | [`filter`] | Staged portfolio filtering |
//! | [`links`] | Social/messaging/contact link rewriting |
//! | [`observer`] | Fire-once visibility watchers |
//! | [`debounce`] | Leading/trailing-edge event rate limiting |
//! | [`timer`] | `Scheduler` trait and the deterministic `ManualScheduler` |
//! | [`storage`] | `PreferenceStore` trait and `MemoryStore` |
//! | `fake` | In-memory page for tests (`testing` feature) |
//! | [`consts`] | Thresholds, breakpoints and durations |
//! | `web` | `web-sys` bindings and the wasm entry point (`browser` feature) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod debounce;
pub mod dom;
pub mod effects;
pub mod elements;
#[cfg(any(test, feature = "testing"))]
pub mod fake;
pub mod filter;
pub mod links;
pub mod nav;
pub mod observer;
pub mod storage;
pub mod theme;
pub mod timer;

#[cfg(feature = "browser")]
pub mod web;
