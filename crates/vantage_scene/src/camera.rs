//! Scroll-driven camera
//!
//! The camera follows a path of waypoints keyed by scroll progress. Progress
//! first passes through a ratchet so scrolling back up never rewinds the path,
//! except when the page returns to the very top. The camera position then
//! trails the path target with a fixed per-frame blend.

use crate::config::CameraConfig;
use crate::error::SceneError;
use serde::{Deserialize, Serialize};
use tracing::trace;
use vantage_core::{follow, Vec3};

/// A point on the camera path
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraWaypoint {
    /// Progress at which the camera reaches this position
    pub progress: f32,
    pub position: Vec3,
}

impl CameraWaypoint {
    pub fn at(progress: f32, position: Vec3) -> Self {
        Self { progress, position }
    }
}

/// Piecewise-linear camera path.
///
/// Two consecutive waypoints with the same position form a hold segment.
/// Progress before the first waypoint maps to the first position, progress at
/// or past the last maps to the last position.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraPath {
    waypoints: Vec<CameraWaypoint>,
}

impl CameraPath {
    pub fn new(waypoints: Vec<CameraWaypoint>) -> Result<Self, SceneError> {
        if waypoints.len() < 2 {
            return Err(SceneError::TooFewWaypoints(waypoints.len()));
        }
        for (index, waypoint) in waypoints.iter().enumerate() {
            if !waypoint.progress.is_finite() || !waypoint.position.is_finite() {
                return Err(SceneError::NonFinite("camera waypoint"));
            }
            if index > 0 && waypoint.progress <= waypoints[index - 1].progress {
                return Err(SceneError::UnorderedWaypoints {
                    index,
                    progress: waypoint.progress,
                });
            }
        }
        Ok(Self { waypoints })
    }

    /// Build the start → mid → hold → end → close zoom path
    pub fn from_config(config: &CameraConfig) -> Result<Self, SceneError> {
        let [reach_mid, leave_mid, reach_end, reach_zoom] = config.thresholds;
        Self::new(vec![
            CameraWaypoint::at(0.0, config.start),
            CameraWaypoint::at(reach_mid, config.mid),
            CameraWaypoint::at(leave_mid, config.mid),
            CameraWaypoint::at(reach_end, config.end),
            CameraWaypoint::at(reach_zoom, config.close_zoom),
        ])
    }

    pub fn waypoints(&self) -> &[CameraWaypoint] {
        &self.waypoints
    }

    /// Target position for progress `s`
    pub fn sample(&self, s: f32) -> Vec3 {
        let first = self.waypoints[0];
        if s < first.progress {
            return first.position;
        }

        for pair in self.waypoints.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if s < to.progress {
                let t = (s - from.progress) / (to.progress - from.progress);
                return from.position.lerp(to.position, t);
            }
        }

        self.waypoints[self.waypoints.len() - 1].position
    }
}

/// High-water mark of scroll progress.
///
/// Non-decreasing while progress stays at or above `reset_below`; a sample
/// below it replaces the mark outright.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRatchet {
    max: f32,
    reset_below: f32,
}

impl ProgressRatchet {
    pub fn new(reset_below: f32) -> Self {
        Self {
            max: 0.0,
            reset_below,
        }
    }

    pub fn update(&mut self, progress: f32) -> f32 {
        if progress < self.reset_below {
            self.max = progress;
        } else {
            self.max = self.max.max(progress);
        }
        self.max
    }

    pub fn value(&self) -> f32 {
        self.max
    }
}

/// Camera properties for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    /// Where the path wants the camera to be
    pub target: Vec3,
    pub look_at: Vec3,
    pub fov: f32,
    /// High-water mark that keyed the path this frame
    pub max_progress: f32,
}

/// Maps progress to a trailing camera pose
#[derive(Clone, Debug)]
pub struct CameraMapper {
    path: CameraPath,
    ratchet: ProgressRatchet,
    position: Vec3,
    look_at: Vec3,
    fov: f32,
    follow: f32,
}

impl CameraMapper {
    pub fn new(config: &CameraConfig) -> Result<Self, SceneError> {
        Ok(Self {
            path: CameraPath::from_config(config)?,
            ratchet: ProgressRatchet::new(config.reset_below),
            position: config.start,
            look_at: config.look_at,
            fov: config.fov,
            follow: config.follow,
        })
    }

    /// Map one frame's progress to a camera pose
    pub fn update(&mut self, progress: f32) -> CameraPose {
        let max_progress = self.ratchet.update(progress);
        let target = self.path.sample(max_progress);
        self.position = follow(&self.position, &target, self.follow);

        trace!(progress, max_progress, ?target, "camera update");

        CameraPose {
            position: self.position,
            target,
            look_at: self.look_at,
            fov: self.fov,
            max_progress,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn max_progress(&self) -> f32 {
        self.ratchet.value()
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }
}
