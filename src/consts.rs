//! Shared thresholds and timings for the behavior controller.

use std::time::Duration;

// ── Scroll thresholds ───────────────────────────────────────────

/// Navbar gains `scrolled` once the page is scrolled strictly past this.
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;

/// Back-to-top control becomes `visible` strictly past this.
pub const BACK_TO_TOP_PX: f64 = 500.0;

/// Offset below `scrollY` of the line that picks the active section.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

// ── Layout ──────────────────────────────────────────────────────

/// Viewport width above which the desktop layout applies.
pub const DESKTOP_MIN_WIDTH_PX: f64 = 768.0;

/// Divisor applied to pointer displacement for the hero parallax.
pub const PARALLAX_DIVISOR: f64 = 50.0;

// ── Timings ─────────────────────────────────────────────────────

/// Re-entry window for debounced scroll and resize handlers.
pub const DEBOUNCE_WAIT: Duration = Duration::from_millis(20);

/// How long the theme toggle keeps its spin transform.
pub const THEME_SPIN: Duration = Duration::from_millis(300);

/// Delay between `display: block` and the fade-in of a shown item.
pub const FILTER_SHOW_DELAY: Duration = Duration::from_millis(50);

/// Delay between the fade-out of a hidden item and `display: none`.
pub const FILTER_HIDE_DELAY: Duration = Duration::from_millis(300);

/// Total counter animation time.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Counter frame period.
pub const COUNTER_TICK: Duration = Duration::from_millis(16);

/// Per-character delay for the hero tagline typing effect.
pub const TYPING_TICK: Duration = Duration::from_millis(50);

// ── Visibility ──────────────────────────────────────────────────

/// Fraction of a reveal target that must be on screen.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom inset of the viewport used when watching reveal targets.
pub const REVEAL_BOTTOM_INSET_PX: f64 = 50.0;

/// Fraction of a stat counter that must be on screen.
pub const COUNTER_THRESHOLD: f64 = 0.5;
