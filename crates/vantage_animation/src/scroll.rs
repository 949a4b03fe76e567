//! Scroll tracking
//!
//! Converts a raw scroll offset into progress through a reference section and
//! smooths it with a critically damped spring. The smoothed value is the only
//! progress consumed downstream; it is published through a `ProgressSignal`
//! once per update.
//!
//! Progress is measured from "section top reaches viewport top" (0) to
//! "section bottom reaches viewport bottom" (1). Call sites rescale it
//! (×1.1, ×1.15) to get an extended hold zone past the end of the section.

use crate::spring::{Spring, SpringConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vantage_core::{ProgressSignal, Subscription};

/// Longest frame delta fed into the spring, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.04;

/// Vertical extent of the reference section, in document pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Progress of `scroll_y` through the section, clamped to [0, 1]
    pub fn progress(&self, scroll_y: f32, viewport_height: f32) -> f32 {
        let range = self.height - viewport_height;
        if range <= 0.0 {
            return if scroll_y >= self.top { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.top) / range).clamp(0.0, 1.0)
    }
}

/// Thresholds for the boolean latches derived from smoothed progress
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatchConfig {
    /// Multiplier applied before comparing against `reveal` and `overlay`
    pub scale: f32,
    pub reveal: f32,
    pub overlay: f32,
    /// Compared against the unscaled value
    pub section_reveal: f32,
}

impl Default for LatchConfig {
    fn default() -> Self {
        Self {
            scale: 1.15,
            reveal: 0.95,
            overlay: 1.1,
            section_reveal: 0.95,
        }
    }
}

/// Boolean states derived from smoothed progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollLatches {
    /// The canvas section's own reveal state
    pub section_reveal: bool,
    /// Side text groups are revealed
    pub reveal: bool,
    /// The centered logo overlay is shown
    pub show_overlay: bool,
}

impl ScrollLatches {
    /// Evaluate every latch for `smoothed`. No debounce: each latch follows
    /// its threshold in both directions.
    pub fn evaluate(smoothed: f32, config: &LatchConfig) -> Self {
        let scaled = smoothed * config.scale;
        Self {
            section_reveal: smoothed >= config.section_reveal,
            reveal: scaled >= config.reveal,
            show_overlay: scaled >= config.overlay,
        }
    }
}

/// Section-relative scroll progress with spring smoothing
#[derive(Debug)]
pub struct ScrollTracker {
    bounds: Option<SectionBounds>,
    viewport_height: f32,
    scroll_y: f32,
    raw: f32,
    spring: Spring,
    latch_config: LatchConfig,
    latches: ScrollLatches,
    signal: ProgressSignal,
}

impl ScrollTracker {
    pub fn new(spring: SpringConfig, latch_config: LatchConfig) -> Self {
        Self {
            bounds: None,
            viewport_height: 0.0,
            scroll_y: 0.0,
            raw: 0.0,
            spring: Spring::new(spring, 0.0),
            latch_config,
            latches: ScrollLatches::default(),
            signal: ProgressSignal::new(0.0),
        }
    }

    /// Attach the tracker to its reference section.
    ///
    /// The first attach starts the spring at the current progress so a page
    /// restored mid-scroll does not animate in from zero.
    pub fn attach(&mut self, bounds: SectionBounds, viewport_height: f32) {
        let first = self.bounds.is_none();
        self.bounds = Some(bounds);
        self.viewport_height = viewport_height;
        self.raw = bounds.progress(self.scroll_y, viewport_height);

        if first {
            debug!(raw = self.raw, ?bounds, "scroll tracker attached");
            self.spring.snap_to(self.raw);
            self.publish();
        } else {
            self.spring.set_target(self.raw);
        }
    }

    /// Stop tracking and release every subscriber
    pub fn detach(&mut self) {
        self.bounds = None;
        self.signal.clear();
        debug!("scroll tracker detached");
    }

    pub fn is_attached(&self) -> bool {
        self.bounds.is_some()
    }

    /// Feed a new scroll offset. Returns the raw progress, or `None` when not
    /// attached.
    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<f32> {
        self.scroll_y = scroll_y;
        let bounds = self.bounds?;
        self.raw = bounds.progress(scroll_y, self.viewport_height);
        self.spring.set_target(self.raw);
        Some(self.raw)
    }

    /// Advance the smoothing spring by one frame and re-evaluate the latches.
    /// Returns the smoothed progress.
    pub fn step(&mut self, dt: f32) -> f32 {
        if self.bounds.is_none() {
            return self.spring.value();
        }
        self.spring.step(dt.clamp(0.0, MAX_FRAME_DELTA));
        self.publish();
        self.spring.value()
    }

    fn publish(&mut self) {
        let smoothed = self.spring.value();
        let latches = ScrollLatches::evaluate(smoothed, &self.latch_config);
        if latches != self.latches {
            debug!(smoothed, ?latches, "scroll latches changed");
            self.latches = latches;
        }
        self.signal.set(smoothed);
    }

    pub fn raw(&self) -> f32 {
        self.raw
    }

    pub fn smoothed(&self) -> f32 {
        self.spring.value()
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn latches(&self) -> ScrollLatches {
        self.latches
    }

    pub fn latch_config(&self) -> &LatchConfig {
        &self.latch_config
    }

    /// Subscribe to smoothed progress updates
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(f32) + 'static,
    {
        self.signal.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.signal.unsubscribe(subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.signal.subscriber_count()
    }
}
