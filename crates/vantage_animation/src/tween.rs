//! Time-driven tweens
//!
//! Unlike the scroll-scrubbed values, these advance with frame time once
//! triggered: a one-shot `Tween` for single entrances and a `StaggerGroup`
//! for items that enter one after another.

use crate::easing::Easing;
use smallvec::SmallVec;

/// A one-shot 0 → 1 tween
#[derive(Clone, Debug)]
pub struct Tween {
    duration: f32,
    easing: Easing,
    elapsed: f32,
    playing: bool,
}

impl Tween {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration: duration.max(0.0),
            easing,
            elapsed: 0.0,
            playing: false,
        }
    }

    /// Start from the beginning
    pub fn play(&mut self) {
        self.elapsed = 0.0;
        self.playing = true;
    }

    /// Stop and rewind to the start
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if !self.playing {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Eased progress in [0, 1]
    pub fn value(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.playing && self.progress() >= 1.0
    }
}

#[derive(Clone, Copy, Debug)]
struct StaggerItem {
    delay: f32,
    progress: f32,
}

/// A group of items that enter with per-item delays and leave together.
///
/// Showing the group starts a clock; each item begins its entrance once the
/// clock passes its delay. Hiding reverses every item at once.
#[derive(Clone, Debug)]
pub struct StaggerGroup {
    items: SmallVec<[StaggerItem; 8]>,
    duration: f32,
    easing: Easing,
    visible: bool,
    clock: f32,
}

impl StaggerGroup {
    /// Create a group with explicit per-item delays (seconds)
    pub fn new(delays: impl IntoIterator<Item = f32>, duration: f32, easing: Easing) -> Self {
        Self {
            items: delays
                .into_iter()
                .map(|delay| StaggerItem {
                    delay: delay.max(0.0),
                    progress: 0.0,
                })
                .collect(),
            duration: duration.max(0.0),
            easing,
            visible: false,
            clock: 0.0,
        }
    }

    /// Create nested groups where the container staggers its groups by
    /// `stagger` and each group staggers its own items by `stagger` again.
    ///
    /// Items are laid out group by group.
    pub fn nested(group_sizes: &[usize], stagger: f32, duration: f32, easing: Easing) -> Self {
        let delays = group_sizes.iter().enumerate().flat_map(|(group, &size)| {
            (0..size).map(move |item| (group + item) as f32 * stagger)
        });
        Self::new(delays, duration, easing)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn delay(&self, index: usize) -> Option<f32> {
        self.items.get(index).map(|item| item.delay)
    }

    /// Show or hide the group. Re-showing restarts the stagger clock.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.clock = 0.0;
        }
    }

    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let previous = self.clock;
        self.clock += dt;

        for item in &mut self.items {
            if self.visible {
                if self.clock < item.delay {
                    continue;
                }
                if self.duration <= 0.0 {
                    item.progress = 1.0;
                    continue;
                }
                // Only the part of this frame after the item's delay counts
                let active = self.clock - item.delay.max(previous);
                item.progress = (item.progress + active.min(dt) / self.duration).min(1.0);
            } else if self.duration <= 0.0 {
                item.progress = 0.0;
            } else {
                item.progress = (item.progress - dt / self.duration).max(0.0);
            }
        }
    }

    /// Eased entrance value of item `index` in [0, 1]
    pub fn value(&self, index: usize) -> f32 {
        self.items
            .get(index)
            .map(|item| self.easing.apply(item.progress))
            .unwrap_or(0.0)
    }

    /// True once every item has fully entered (or fully left when hidden)
    pub fn is_settled(&self) -> bool {
        let goal = if self.visible { 1.0 } else { 0.0 };
        self.items.iter().all(|item| item.progress == goal)
    }
}
