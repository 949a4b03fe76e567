//! End-to-end scroll scenarios through a mounted scene

use std::cell::RefCell;
use std::rc::Rc;

use vantage_animation::SectionBounds;
use vantage_core::Vec3;
use vantage_scene::{
    AnimationClip, FrameState, PageLayout, SceneAnimator, SceneConfig, TextSide, Viewport,
};

const FRAME: f32 = 1.0 / 60.0;

// Section progress reaches 1 at scroll_y = 900 + 3000 - 800
const SECTION_END: f32 = 3100.0;

fn layout() -> PageLayout {
    PageLayout {
        document_height: 6000.0,
        hero_height: 900.0,
        section: SectionBounds::new(900.0, 3000.0),
    }
}

fn mount(clip: Option<AnimationClip>) -> SceneAnimator {
    SceneAnimator::mount(
        SceneConfig::default(),
        layout(),
        Viewport::new(1280.0, 800.0),
        clip,
    )
    .unwrap()
}

fn run(scene: &mut SceneAnimator, frames: usize) -> FrameState {
    let mut last = scene.frame(FRAME);
    for _ in 1..frames {
        last = scene.frame(FRAME);
    }
    last
}

#[test]
fn reveal_latch_applies_in_the_frame_it_crosses() {
    let mut scene = mount(None);
    scene.on_scroll(SECTION_END);

    let mut previous = scene.frame(FRAME);
    assert!(!previous.ui.latches.reveal);

    for _ in 0..600 {
        let frame = scene.frame(FRAME);
        let crossed = frame.progress.smoothed * 1.15 >= 0.95;
        assert_eq!(frame.ui.latches.reveal, crossed);

        if crossed && !previous.ui.latches.reveal {
            // The first left item starts its entrance right away
            let first = frame.ui.text[0];
            assert_eq!(first.side, TextSide::Left);
            assert!(first.opacity > 0.0);
            return;
        }
        previous = frame;
    }
    panic!("reveal latch never crossed");
}

#[test]
fn full_scroll_settles_between_end_and_close_zoom() {
    let mut scene = mount(Some(AnimationClip::new("Action", 3.0).unwrap()));
    scene.on_scroll(SECTION_END);
    let frame = run(&mut scene, 900);

    // The camera reads unscaled progress, so a full scroll stops halfway
    // along the end -> close zoom segment
    assert!((frame.progress.smoothed - 1.0).abs() < 1e-3);
    assert!(frame.camera.position.distance(Vec3::new(0.0, 9.0, 2.5)) < 0.05);
    assert_eq!(frame.model.clip_time, Some(3.0));
    assert!((frame.model.position.z - 4.0).abs() < 1e-2);
    assert!(frame.ui.latches.reveal);
    assert!(frame.ui.latches.show_overlay);
    assert_eq!(frame.ui.logo.opacity, 1.0);
    assert!(frame.ui.text.iter().all(|item| item.opacity == 1.0));
}

#[test]
fn camera_holds_its_furthest_waypoint_on_partial_scroll_back() {
    let mut scene = mount(None);
    scene.on_scroll(SECTION_END);
    let forward = run(&mut scene, 900);
    let held = forward.camera.position;

    scene.on_scroll(2000.0);
    let back = run(&mut scene, 900);

    // Progress fell to about 0.5, but the high-water mark did not
    assert!(back.progress.smoothed < 0.6);
    assert!(back.camera.max_progress > 0.99);
    assert!(back.camera.position.distance(held) < 1e-3);
    assert!(!back.ui.latches.reveal);
    assert!(!back.ui.logo.visible);
}

#[test]
fn scrolling_to_top_resets_the_camera() {
    let mut scene = mount(None);
    scene.on_scroll(SECTION_END);
    run(&mut scene, 900);

    scene.on_scroll(0.0);
    let frame = run(&mut scene, 1200);

    let config = SceneConfig::default();
    assert!(frame.camera.max_progress < 0.01);
    assert!(frame.camera.position.distance(config.camera.start) < 0.1);
    assert!(frame.ui.text.iter().all(|item| item.opacity == 0.0));
}

#[test]
fn missing_clip_still_drives_depth_and_camera() {
    let mut scene = mount(None);
    scene.on_scroll(SECTION_END);
    let frame = run(&mut scene, 900);

    assert_eq!(frame.model.clip_time, None);
    assert!(frame.model.cursor > 0.99);
    assert!((frame.model.position.z - 4.0).abs() < 1e-2);
    assert!(frame.camera.max_progress > 0.99);
}

#[test]
fn subscribers_see_each_frame_until_unmount() {
    let mut scene = mount(None);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    scene.subscribe(move |value| sink.borrow_mut().push(value));

    scene.on_scroll(SECTION_END);
    run(&mut scene, 10);
    assert_eq!(seen.borrow().len(), 10);

    let values = seen.borrow().clone();
    assert!(values.windows(2).all(|pair| pair[1] >= pair[0]));

    scene.unmount();
    assert_eq!(Rc::strong_count(&seen), 1);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let mut scene = mount(None);
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    let id = scene.subscribe(move |_| *sink.borrow_mut() += 1);

    scene.frame(FRAME);
    assert!(scene.unsubscribe(id));
    assert!(!scene.unsubscribe(id));
    scene.frame(FRAME);

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn mounting_mid_page_starts_at_current_progress() {
    let mut scene = SceneAnimator::mount_at(
        SceneConfig::default(),
        layout(),
        Viewport::new(1280.0, 800.0),
        None,
        2000.0,
    )
    .unwrap();

    let frame = scene.frame(FRAME);
    assert_eq!(frame.progress.raw, 0.5);
    assert_eq!(frame.progress.smoothed, frame.progress.raw);
    // The high-water mark starts where the page is, not at the top
    assert_eq!(frame.camera.max_progress, 0.5);
    assert_eq!(frame.camera.target, SceneConfig::default().camera.mid);
}

#[test]
fn relayout_keeps_the_spring_continuous() {
    let mut scene = mount(None);
    scene.on_scroll(2000.0);
    scene.relayout(layout());

    // Already attached, so the spring animates rather than snapping
    let frame = scene.frame(FRAME);
    assert!(frame.progress.raw > 0.49);
    assert!(frame.progress.smoothed < frame.progress.raw);
}

#[test]
fn hero_and_navbar_follow_page_scroll() {
    let mut scene = mount(None);

    let top = scene.frame(FRAME);
    assert_eq!(top.hero.button_opacity, 1.0);
    assert!(!top.hero.nav.logo_visible);

    scene.on_scroll(3000.0);
    let frame = scene.frame(FRAME);
    assert!(frame.hero.buttons_hidden);
    assert!(frame.hero.nav.logo_visible);
    assert_eq!(frame.hero.image_width_pct, 3.125);
}

#[test]
fn frame_state_serializes() {
    let mut scene = mount(Some(AnimationClip::new("Action", 2.0).unwrap()));
    scene.on_scroll(1500.0);
    let frame = scene.frame(FRAME);

    let json = serde_json::to_string(&frame).unwrap();
    let back: FrameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.frame, frame.frame);
    assert_eq!(back.ui.text.len(), 6);
}
