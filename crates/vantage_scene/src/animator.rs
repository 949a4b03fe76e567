//! Scene animator
//!
//! One `SceneAnimator` owns everything the scroll scene needs for the lifetime
//! of a mounted view: the scroll tracker, the camera, model and UI mappers, and
//! the hero timeline. It is built on mount and torn down on unmount; there is
//! no ambient state.
//!
//! Each display frame:
//!
//! 1. the tracker's spring advances and the latches are re-evaluated
//! 2. camera, model and UI mappers read the same smoothed progress
//! 3. the hero timeline reads whole-page progress
//! 4. the result is returned as a [`FrameState`] for a [`RenderAdapter`]
//!
//! # Example
//!
//! ```rust
//! use vantage_scene::{PageLayout, SceneAnimator, SceneConfig, Viewport};
//! use vantage_animation::SectionBounds;
//!
//! let layout = PageLayout {
//!     document_height: 6000.0,
//!     hero_height: 900.0,
//!     section: SectionBounds::new(900.0, 3000.0),
//! };
//! let viewport = Viewport::new(1280.0, 800.0);
//!
//! let mut animator = SceneAnimator::mount(SceneConfig::default(), layout, viewport, None).unwrap();
//! animator.on_scroll(1500.0);
//! let frame = animator.frame(1.0 / 60.0);
//! assert!(frame.progress.smoothed > 0.0);
//! animator.unmount();
//! ```

use crate::camera::{CameraMapper, CameraPose};
use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::hero::{HeroFrame, HeroTimeline};
use crate::model::{AnimationClip, ModelMapper, ModelPose};
use crate::visibility::{UiFrame, UiVisibilityMapper};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vantage_animation::{ScrollTracker, SectionBounds};
use vantage_core::Subscription;

/// Viewport size in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Page geometry the animator needs, in document pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Total scrollable document height
    pub document_height: f32,
    pub hero_height: f32,
    /// The section whose traversal drives the 3D scene
    pub section: SectionBounds,
}

impl PageLayout {
    /// Whole-page progress for `scroll_y`
    pub fn page_progress(&self, scroll_y: f32, viewport: Viewport) -> f32 {
        SectionBounds::new(0.0, self.document_height).progress(scroll_y, viewport.height)
    }
}

/// Progress values for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub scroll_y: f32,
    /// Section progress before smoothing
    pub raw: f32,
    pub smoothed: f32,
    /// Camera high-water mark
    pub max_reached: f32,
    /// Whole-page progress
    pub page: f32,
}

/// Desired scene state for one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    pub frame: u64,
    pub progress: ProgressSnapshot,
    pub camera: CameraPose,
    pub model: ModelPose,
    pub ui: UiFrame,
    pub hero: HeroFrame,
}

/// Applies computed frames to a rendering engine
pub trait RenderAdapter {
    fn apply(&mut self, frame: &FrameState);
}

/// Collecting frames is enough for tests and offline traces
impl RenderAdapter for Vec<FrameState> {
    fn apply(&mut self, frame: &FrameState) {
        self.push(frame.clone());
    }
}

/// Owner of all per-view scroll animation state
pub struct SceneAnimator {
    config: SceneConfig,
    layout: PageLayout,
    viewport: Viewport,
    tracker: ScrollTracker,
    camera: CameraMapper,
    model: ModelMapper,
    ui: UiVisibilityMapper,
    hero: HeroTimeline,
    frame: u64,
}

impl SceneAnimator {
    /// Validate `config` and build the scene for a view mounted at the top
    /// of the page
    pub fn mount(
        config: SceneConfig,
        layout: PageLayout,
        viewport: Viewport,
        clip: Option<AnimationClip>,
    ) -> Result<Self, SceneError> {
        Self::mount_at(config, layout, viewport, clip, 0.0)
    }

    /// Like [`SceneAnimator::mount`], for a view already scrolled to
    /// `scroll_y`. Smoothed progress starts at the current progress.
    pub fn mount_at(
        config: SceneConfig,
        layout: PageLayout,
        viewport: Viewport,
        clip: Option<AnimationClip>,
        scroll_y: f32,
    ) -> Result<Self, SceneError> {
        config.validate()?;
        if let Some(clip) = &clip {
            if !clip.duration.is_finite() || clip.duration < 0.0 {
                return Err(SceneError::InvalidClip {
                    name: clip.name.clone(),
                    duration: clip.duration,
                });
            }
        }

        let mut tracker = ScrollTracker::new(config.spring, config.visibility.latches);
        tracker.on_scroll(scroll_y);
        tracker.attach(layout.section, viewport.height);

        let animator = Self {
            camera: CameraMapper::new(&config.camera)?,
            model: ModelMapper::new(&config.model, clip, viewport.width),
            ui: UiVisibilityMapper::new(&config.visibility),
            hero: HeroTimeline::new(&config.hero)?,
            tracker,
            config,
            layout,
            viewport,
            frame: 0,
        };

        info!(
            viewport_width = viewport.width,
            viewport_height = viewport.height,
            scroll_y,
            has_clip = animator.model.clip().is_some(),
            "scene mounted"
        );
        Ok(animator)
    }

    /// Release every listener. The animator is consumed.
    pub fn unmount(mut self) {
        self.tracker.detach();
        info!(frames = self.frame, "scene unmounted");
    }

    /// Feed a scroll event
    pub fn on_scroll(&mut self, scroll_y: f32) {
        if let Some(raw) = self.tracker.on_scroll(scroll_y) {
            debug!(scroll_y, raw, "scroll");
        }
    }

    /// Feed a resize event
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.model.on_resize(viewport.width);
        self.tracker.attach(self.layout.section, viewport.height);
    }

    /// Replace the page geometry after a layout change
    pub fn relayout(&mut self, layout: PageLayout) {
        self.layout = layout;
        self.tracker.attach(layout.section, self.viewport.height);
    }

    /// Compute the next frame
    pub fn frame(&mut self, dt: f32) -> FrameState {
        let smoothed = self.tracker.step(dt);

        let camera = self
            .camera
            .update(smoothed * self.config.camera.progress_scale);
        let model = self.model.update(smoothed);
        let ui = self.ui.update(self.tracker.latches(), dt);

        let scroll_y = self.tracker.scroll_y();
        let page = self.layout.page_progress(scroll_y, self.viewport);
        let hero = self.hero.sample(page, scroll_y, self.layout.hero_height);

        let state = FrameState {
            frame: self.frame,
            progress: ProgressSnapshot {
                scroll_y,
                raw: self.tracker.raw(),
                smoothed,
                max_reached: camera.max_progress,
                page,
            },
            camera,
            model,
            ui,
            hero,
        };
        self.frame += 1;
        state
    }

    /// Compute the next frame and hand it to `adapter`
    pub fn frame_into<A: RenderAdapter + ?Sized>(&mut self, dt: f32, adapter: &mut A) {
        let state = self.frame(dt);
        adapter.apply(&state);
    }

    /// Subscribe to smoothed progress updates
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(f32) + 'static,
    {
        self.tracker.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.tracker.unsubscribe(subscription)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frame
    }
}

impl std::fmt::Debug for SceneAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneAnimator")
            .field("layout", &self.layout)
            .field("viewport", &self.viewport)
            .field("smoothed", &self.tracker.smoothed())
            .field("frame", &self.frame)
            .finish()
    }
}
