//! Tracker, transforms and tweens wired together the way a page uses them

use std::cell::Cell;
use std::rc::Rc;

use vantage_animation::{
    Easing, LatchConfig, ScrollTracker, ScrollTransform, SectionBounds, SpringConfig,
    StaggerGroup,
};

const FRAME: f32 = 1.0 / 60.0;

fn tracker() -> ScrollTracker {
    let mut tracker = ScrollTracker::new(SpringConfig::default(), LatchConfig::default());
    tracker.attach(SectionBounds::new(1000.0, 2000.0), 1000.0);
    tracker
}

#[test]
fn smoothed_progress_drives_a_transform() {
    let mut tracker = tracker();
    let opacity = ScrollTransform::new(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]).unwrap();

    tracker.on_scroll(1500.0);
    let mut value = 0.0;
    for _ in 0..600 {
        value = opacity.sample(tracker.step(FRAME));
    }

    assert!((tracker.smoothed() - 0.5).abs() < 1e-3);
    assert!((value - 1.0).abs() < 1e-2);
}

#[test]
fn latches_drop_when_scrolling_back() {
    let mut tracker = tracker();
    tracker.on_scroll(2000.0);
    for _ in 0..600 {
        tracker.step(FRAME);
    }
    let latches = tracker.latches();
    assert!(latches.reveal && latches.show_overlay && latches.section_reveal);

    tracker.on_scroll(1000.0);
    for _ in 0..600 {
        tracker.step(FRAME);
    }
    assert_eq!(tracker.latches(), Default::default());
}

#[test]
fn stagger_group_follows_the_reveal_latch() {
    let mut tracker = tracker();
    let mut text = StaggerGroup::nested(&[2, 2], 0.2, 0.6, Easing::EaseOut);

    tracker.on_scroll(2000.0);
    for _ in 0..600 {
        tracker.step(FRAME);
        text.set_visible(tracker.latches().reveal);
        text.tick(FRAME);
    }
    assert!(text.is_visible());
    assert!(text.is_settled());
    assert_eq!(text.value(3), 1.0);
}

#[test]
fn listener_counts_frames_until_detach() {
    let mut tracker = tracker();
    let frames = Rc::new(Cell::new(0));
    let sink = frames.clone();
    tracker.subscribe(move |_| sink.set(sink.get() + 1));

    for _ in 0..5 {
        tracker.step(FRAME);
    }
    tracker.detach();
    tracker.step(FRAME);

    assert_eq!(frames.get(), 5);
    assert_eq!(tracker.subscriber_count(), 0);
    assert_eq!(tracker.on_scroll(1500.0), None);
}

#[test]
fn spring_and_latch_config_from_toml() {
    let spring: SpringConfig = toml::from_str("stiffness = 400.0\ndamping = 30.0").unwrap();
    assert_eq!(spring.stiffness, 400.0);
    assert_eq!(spring.mass, 1.0);
    assert!(spring.is_valid());

    let latches: LatchConfig = toml::from_str("overlay = 1.05").unwrap();
    assert_eq!(latches.overlay, 1.05);
    assert_eq!(latches.scale, 1.15);

    let encoded = toml::to_string(&spring).unwrap();
    let back: SpringConfig = toml::from_str(&encoded).unwrap();
    assert_eq!(back, spring);
}
