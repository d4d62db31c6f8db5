#![allow(clippy::float_cmp)]

use super::*;
use crate::fake::{FakeNode, FakePage};
use crate::observer::WatchOptions;
use crate::timer::ManualScheduler;

// =============================================================
// Back to top
// =============================================================

#[test]
fn back_to_top_is_step_function_at_500() {
    let page = FakePage::default();
    let elements = page.elements();
    for (scroll_y, visible) in [(0.0, false), (499.0, false), (500.0, false), (500.5, true), (3000.0, true), (10.0, false)] {
        handle_back_to_top(&elements, scroll_y);
        assert_eq!(page.back_to_top.has_class("visible"), visible, "at scrollY {scroll_y}");
    }
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn prepare_reveal_marks_and_watches_every_target() {
    let page = FakePage::default();
    let elements = page.elements();
    let observer = OnceObserver::new(WatchOptions::REVEAL);
    prepare_reveal(&elements, &observer);

    assert_eq!(observer.watched().len(), elements.reveal_targets.len());
    assert!(page.about_text.has_class(REVEAL));
    assert!(!page.about_text.has_class(REVEALED));
}

#[test]
fn reveal_adds_active_state() {
    let node = FakeNode::new();
    reveal(&node);
    assert_eq!(node.classes(), vec!["reveal".to_owned(), "active".to_owned()]);
}

// =============================================================
// Counters
// =============================================================

#[test]
fn parse_counter_target_reads_leading_integer() {
    assert_eq!(parse_counter_target("50+"), Some(50));
    assert_eq!(parse_counter_target("  120 projects"), Some(120));
    assert_eq!(parse_counter_target("-7"), Some(-7));
    assert_eq!(parse_counter_target("+3"), Some(3));
    assert_eq!(parse_counter_target("abc"), None);
    assert_eq!(parse_counter_target(""), None);
    assert_eq!(parse_counter_target("-"), None);
}

#[test]
fn counter_first_frame_and_final_frame() {
    let mut anim = CounterAnimation::new(50);
    // 50 / 125 frames = 0.4 per frame.
    assert_eq!(anim.step(), ("0+".to_owned(), Tick::Continue));
    let mut last = anim.step();
    while last.1 == Tick::Continue {
        last = anim.step();
    }
    assert_eq!(last.0, "50+");
}

#[test]
fn counter_final_frame_is_target_for_awkward_targets() {
    for target in [0, 1, 7, 99, 125, 333, 1000, 12_345] {
        let mut anim = CounterAnimation::new(target);
        let mut frames = 0;
        let text = loop {
            frames += 1;
            let (text, tick) = anim.step();
            if tick == Tick::Stop {
                break text;
            }
            assert!(frames < 200, "target {target} never finished");
        };
        assert_eq!(text, format!("{target}+"));
    }
}

#[test]
fn animate_counter_reaches_target_in_about_two_seconds() {
    let sched = ManualScheduler::new();
    let stat = FakeNode::new().with_text("50+");
    assert!(animate_counter(&stat, &sched).is_some());

    sched.advance_ms(16);
    assert_eq!(stat.text(), "0+");
    sched.advance_ms(1000);
    let mid = parse_counter_target(&stat.text()).expect("numeric frame");
    assert!((20..=26).contains(&mid), "mid-animation value {mid}");
    sched.advance_ms(1100);
    assert_eq!(stat.text(), "50+");
    assert_eq!(sched.pending(), 0);
}

#[test]
fn animate_counter_skips_non_numeric_text() {
    let sched = ManualScheduler::new();
    let stat = FakeNode::new().with_text("many");
    assert!(animate_counter(&stat, &sched).is_none());
    assert_eq!(stat.text(), "many");
    assert_eq!(sched.pending(), 0);
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_is_zero_at_viewport_center() {
    let offset = parallax_offset(Viewport::new(1000.0, 800.0), Point::new(500.0, 400.0));
    assert_eq!(offset, Point::new(0.0, 0.0));
}

#[test]
fn parallax_moves_against_pointer_and_is_unclamped() {
    let vp = Viewport::new(1000.0, 800.0);
    assert_eq!(parallax_offset(vp, Point::new(0.0, 0.0)), Point::new(10.0, 8.0));
    assert_eq!(parallax_offset(vp, Point::new(6000.0, 400.0)), Point::new(-110.0, 0.0));
}

#[test]
fn apply_parallax_writes_translate_transform() {
    let image = FakeNode::new();
    apply_parallax(&image, Viewport::new(1000.0, 800.0), Point::new(250.0, 600.0));
    assert_eq!(image.style("transform").as_deref(), Some("translateX(5px) translateY(-4px)"));
}

// =============================================================
// Typing
// =============================================================

#[test]
fn typing_restores_text_one_char_per_tick() {
    let sched = ManualScheduler::new();
    let tagline = FakeNode::new().with_text("Hi!");
    assert!(start_typing(&tagline, &sched).is_some());
    assert_eq!(tagline.text(), "");
    assert_eq!(tagline.style("opacity").as_deref(), Some("1"));

    sched.advance_ms(50);
    assert_eq!(tagline.text(), "H");
    sched.advance_ms(100);
    assert_eq!(tagline.text(), "Hi!");
    assert_eq!(sched.pending(), 0);
}

#[test]
fn typing_empty_tagline_is_noop() {
    let sched = ManualScheduler::new();
    let tagline = FakeNode::new();
    assert!(start_typing(&tagline, &sched).is_none());
    assert_eq!(tagline.style("opacity"), None);
}

#[test]
fn mark_loaded_tags_body() {
    let page = FakePage::default();
    mark_loaded(&page.elements());
    assert!(page.host.body_node().has_class("loaded"));
}
