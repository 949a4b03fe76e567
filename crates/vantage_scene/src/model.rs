//! Scroll-scrubbed model
//!
//! The model's animation clip is never played on its own clock. Each frame the
//! eased scroll cursor is converted to an absolute clip time and the playback
//! head is set to it directly. Past the end of the clip range the model keeps
//! moving in depth through an extended zone.

use crate::config::ModelConfig;
use crate::error::SceneError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use vantage_animation::easing::ease_in_out_cubic;
use vantage_core::{clamp01, follow, lerp, Vec3};

/// A pre-authored animation clip supplied by the asset loader
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    /// Length in seconds
    pub duration: f32,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, duration: f32) -> Result<Self, SceneError> {
        let name = name.into();
        if !duration.is_finite() || duration < 0.0 {
            return Err(SceneError::InvalidClip { name, duration });
        }
        Ok(Self { name, duration })
    }
}

/// Eased clip cursor in [0, 1] for `scroll` over the clip range
pub fn clip_cursor(scroll: f32, start: f32, end: f32) -> f32 {
    ease_in_out_cubic(clamp01((scroll - start) / (end - start)))
}

/// Model properties for one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelPose {
    pub position: Vec3,
    pub scale: f32,
    /// Eased cursor in [0, 1]
    pub cursor: f32,
    /// Absolute playback time, `None` without a clip
    pub clip_time: Option<f32>,
    /// Depth the model is trailing toward
    pub depth_target: f32,
}

/// Maps smoothed progress to clip time and model depth
#[derive(Clone, Debug)]
pub struct ModelMapper {
    config: ModelConfig,
    clip: Option<AnimationClip>,
    depth: f32,
    scale: f32,
}

impl ModelMapper {
    pub fn new(config: &ModelConfig, clip: Option<AnimationClip>, viewport_width: f32) -> Self {
        match &clip {
            Some(clip) => debug!(name = %clip.name, duration = clip.duration, "model clip bound"),
            None => debug!("no animation clip, model runs depth only"),
        }

        let mut mapper = Self {
            config: config.clone(),
            clip,
            depth: config.position.z,
            scale: config.desktop_scale,
        };
        mapper.on_resize(viewport_width);
        mapper
    }

    /// Pick the responsive scale for a new viewport width
    pub fn on_resize(&mut self, viewport_width: f32) -> f32 {
        let scale = if viewport_width <= self.config.mobile_breakpoint {
            self.config.mobile_scale
        } else {
            self.config.desktop_scale
        };
        if scale != self.scale {
            debug!(viewport_width, scale, "model scale changed");
        }
        self.scale = scale;
        scale
    }

    /// Depth target for an already scaled scroll value and its eased cursor
    fn depth_target(&self, scroll: f32, cursor: f32) -> f32 {
        let c = &self.config;
        if scroll <= c.clip_end {
            lerp(c.depth_from, c.depth_to, cursor)
        } else {
            let extra = clamp01((scroll - c.clip_end) / c.extended_span);
            lerp(c.depth_to, c.extended_depth, extra)
        }
    }

    /// Map one frame's smoothed progress to a model pose
    pub fn update(&mut self, smoothed: f32) -> ModelPose {
        let scroll = smoothed * self.config.progress_scale;
        let cursor = clip_cursor(scroll, self.config.clip_start, self.config.clip_end);
        let clip_time = self.clip.as_ref().map(|clip| cursor * clip.duration);

        let depth_target = self.depth_target(scroll, cursor);
        self.depth = follow(&self.depth, &depth_target, self.config.follow);

        trace!(scroll, cursor, ?clip_time, depth = self.depth, "model update");

        let base = self.config.position;
        ModelPose {
            position: Vec3::new(base.x, base.y, self.depth),
            scale: self.scale,
            cursor,
            clip_time,
            depth_target,
        }
    }

    pub fn clip(&self) -> Option<&AnimationClip> {
        self.clip.as_ref()
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}
